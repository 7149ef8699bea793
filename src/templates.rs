// Pokedex - HTML Views
// Server-rendered pages; every interpolated value goes through html_escape

use crate::badges::badge_style;
use crate::creature::{display_name, Creature, EvolutionDisplay};
use crate::db::FavoriteEntry;

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 640px; margin: 2rem auto; padding: 0 1rem; color: #222; }\n\
h1 { color: #d32f2f; }\n\
.badge { display: inline-block; padding: 0.2rem 0.6rem; margin-right: 0.3rem; border-radius: 0.6rem; font-size: 0.85rem; text-transform: capitalize; }\n\
.sprite { image-rendering: pixelated; width: 160px; }\n\
.stats td { padding: 0.15rem 0.8rem 0.15rem 0; text-transform: capitalize; }\n\
.stages li { margin: 0.2rem 0; }\n\
.error { color: #b71c1c; }\n\
.favorited { color: #f9a825; }\n\
form.inline { display: inline; margin-left: 0.5rem; }\n\
ul.favorites li { margin: 0.4rem 0; }\n";

/// Escape text for interpolation into HTML content or attribute values
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }

    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        html_escape(title),
        STYLE,
        body
    )
}

/// GET / - search page, pre-seeded with known names for autocomplete
pub fn render_search_page(known_names: &[String]) -> String {
    let options: String = known_names
        .iter()
        .map(|name| format!("<option value=\"{}\"></option>", html_escape(name)))
        .collect();

    let body = format!(
        "<h1>Pokedex</h1>\n\
         <p>Welcome, Trainer.</p>\n\
         <p>Your journey to become a Pokemon Master begins here.</p>\n\
         <form action=\"/pokemon\" method=\"get\">\n\
         <input list=\"known-names\" name=\"name\" placeholder=\"Search for a Pokemon...\" autofocus>\n\
         <datalist id=\"known-names\">{}</datalist>\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n\
         <p><a href=\"/favorites\">View favorites</a></p>",
        options
    );

    page("Pokedex", &body)
}

/// GET /pokemon - detail view for one creature
pub fn render_detail_page(creature: &Creature, favorited: bool, evolution: &EvolutionDisplay) -> String {
    let title = display_name(&creature.name);

    let sprite_html = match &creature.sprite {
        Some(url) => format!(
            "<img class=\"sprite\" src=\"{}\" alt=\"{}\">\n",
            html_escape(url),
            html_escape(&title)
        ),
        None => String::new(),
    };

    let badges_html: String = creature
        .types
        .iter()
        .map(|type_name| {
            let style = badge_style(type_name);
            format!(
                "<span class=\"badge\" style=\"background:{};color:{}\">{}</span>",
                style.background,
                style.foreground,
                html_escape(type_name)
            )
        })
        .collect();

    let stats_html: String = creature
        .stats
        .iter()
        .map(|stat| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                html_escape(&stat.name),
                stat.value
            )
        })
        .collect();

    let evolution_html = match evolution {
        EvolutionDisplay::Chain(stages) => {
            let rows: String = stages
                .iter()
                .map(|names| {
                    let members: String = names
                        .iter()
                        .map(|name| html_escape(&display_name(name)))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("<li>{}</li>\n", members)
                })
                .collect();
            format!("<ol class=\"stages\">\n{}</ol>", rows)
        }
        EvolutionDisplay::NoEvolutions => "<p>This Pokemon does not evolve.</p>".to_string(),
        EvolutionDisplay::Unavailable => {
            "<p>Evolution data is currently unavailable.</p>".to_string()
        }
    };

    let favorite_html = if favorited {
        "<p class=\"favorited\">&#9733; Already in your favorites</p>".to_string()
    } else {
        format!(
            "<form action=\"/favorites/add\" method=\"post\">\n\
             <input type=\"hidden\" name=\"name\" value=\"{}\">\n\
             <button type=\"submit\">&#9734; Add to favorites</button>\n\
             </form>",
            html_escape(&creature.name)
        )
    };

    let body = format!(
        "<h1>{}</h1>\n\
         {}<p>{}</p>\n\
         <table>\n\
         <tr><td>Height</td><td>{}</td></tr>\n\
         <tr><td>Weight</td><td>{}</td></tr>\n\
         </table>\n\
         <h2>Stats</h2>\n\
         <table class=\"stats\">\n{}</table>\n\
         <h2>Evolution chain</h2>\n\
         {}\n\
         {}\n\
         <p><a href=\"/\">Back to search</a> | <a href=\"/favorites\">Favorites</a></p>",
        html_escape(&title),
        sprite_html,
        badges_html,
        creature.height,
        creature.weight,
        stats_html,
        evolution_html,
        favorite_html
    );

    page(&format!("Pokedex - {}", title), &body)
}

/// GET /favorites - the stored list with remove controls
pub fn render_favorites_page(entries: &[FavoriteEntry]) -> String {
    let list_html = if entries.is_empty() {
        "<p>No favorites yet. Go catch some!</p>".to_string()
    } else {
        let items: String = entries
            .iter()
            .map(|entry| {
                format!(
                    "<li><a href=\"/pokemon?name={}\">{}</a>\
                     <form action=\"/favorites/remove\" method=\"post\" class=\"inline\">\
                     <input type=\"hidden\" name=\"name\" value=\"{}\">\
                     <button type=\"submit\">Remove</button>\
                     </form></li>\n",
                    urlencoding::encode(&entry.raw),
                    html_escape(&entry.display),
                    html_escape(&entry.raw)
                )
            })
            .collect();
        format!("<ul class=\"favorites\">\n{}</ul>", items)
    };

    let body = format!(
        "<h1>Favorites</h1>\n{}\n<p><a href=\"/\">Back to search</a></p>",
        list_html
    );

    page("Pokedex - Favorites", &body)
}

/// Error view for a failed lookup; shows the normalized searched name
pub fn render_error_page(name: &str) -> String {
    let body = format!(
        "<h1>Pokedex</h1>\n\
         <p class=\"error\">No Pokemon found matching \"{}\".</p>\n\
         <p>Check the spelling and try again.</p>\n\
         <p><a href=\"/\">Back to search</a></p>",
        html_escape(name)
    );

    page("Pokedex - not found", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::StatValue;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(html_escape("mr-mime"), "mr-mime");
    }

    #[test]
    fn test_search_page_seeds_datalist() {
        let html = render_search_page(&["pikachu".to_string(), "eevee".to_string()]);

        assert!(html.contains("Welcome, Trainer."));
        assert!(html.contains("<option value=\"pikachu\">"));
        assert!(html.contains("<option value=\"eevee\">"));
    }

    #[test]
    fn test_detail_page_renders_badges_and_stages() {
        let creature = Creature {
            name: "bulbasaur".to_string(),
            height: 7,
            weight: 69,
            sprite: Some("https://img.example/1.png".to_string()),
            types: vec!["grass".to_string(), "poison".to_string()],
            stats: vec![StatValue {
                name: "hp".to_string(),
                value: 45,
            }],
        };
        let evolution = EvolutionDisplay::Chain(vec![
            vec!["bulbasaur".to_string()],
            vec!["ivysaur".to_string()],
            vec!["venusaur".to_string()],
        ]);

        let html = render_detail_page(&creature, false, &evolution);

        assert!(html.contains("<h1>Bulbasaur</h1>"));
        assert!(html.contains("background:#7AC74C"));
        assert!(html.contains("Ivysaur"));
        assert!(html.contains("Add to favorites"));
    }

    #[test]
    fn test_detail_page_marks_favorited_state() {
        let creature = Creature {
            name: "pikachu".to_string(),
            height: 4,
            weight: 60,
            sprite: None,
            types: vec![],
            stats: vec![],
        };

        let html = render_detail_page(&creature, true, &EvolutionDisplay::NoEvolutions);

        assert!(html.contains("Already in your favorites"));
        assert!(!html.contains("Add to favorites"));
        assert!(html.contains("does not evolve"));
    }

    #[test]
    fn test_detail_page_reports_unavailable_evolution() {
        let creature = Creature {
            name: "ditto".to_string(),
            height: 3,
            weight: 40,
            sprite: None,
            types: vec![],
            stats: vec![],
        };

        let html = render_detail_page(&creature, false, &EvolutionDisplay::Unavailable);

        assert!(html.contains("Evolution data is currently unavailable."));
    }

    #[test]
    fn test_favorites_page_links_and_escapes() {
        let entries = vec![FavoriteEntry {
            raw: "mr-mime".to_string(),
            display: "Mr-Mime".to_string(),
        }];

        let html = render_favorites_page(&entries);

        assert!(html.contains("/pokemon?name=mr-mime"));
        assert!(html.contains("Mr-Mime"));
        assert!(html.contains("Remove"));
    }

    #[test]
    fn test_error_page_contains_searched_name() {
        let html = render_error_page("missingno");

        assert!(html.contains("missingno"));
        assert!(html.contains("Back to search"));
    }
}
