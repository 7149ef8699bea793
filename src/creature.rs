// Pokedex - Creature Domain Model
// Internal representation, decoupled from the external API's schema

use crate::pokeapi::PokemonPayload;

/// Summary of one creature, rebuilt per request from the API response
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub sprite: Option<String>,
    pub types: Vec<String>,
    pub stats: Vec<StatValue>,
}

/// One (stat name, base value) pair
#[derive(Debug, Clone, PartialEq)]
pub struct StatValue {
    pub name: String,
    pub value: i64,
}

impl From<PokemonPayload> for Creature {
    fn from(payload: PokemonPayload) -> Self {
        Self {
            name: payload.name,
            height: payload.height,
            weight: payload.weight,
            sprite: payload.sprites.front_default,
            types: payload.types.into_iter().map(|slot| slot.kind.name).collect(),
            stats: payload
                .stats
                .into_iter()
                .map(|slot| StatValue {
                    name: slot.stat.name,
                    value: slot.base_stat,
                })
                .collect(),
        }
    }
}

/// What the detail page knows about a creature's evolution family.
///
/// "No evolutions" and "the lookup failed" are deliberately distinct states
/// so the page can say which one happened.
#[derive(Debug, Clone, PartialEq)]
pub enum EvolutionDisplay {
    /// Two or more tiers resolved
    Chain(Vec<Vec<String>>),
    /// The chain resolved to a single tier
    NoEvolutions,
    /// Either fetch step failed
    Unavailable,
}

/// Title-case a stored lower-case name for display: every hyphen-separated
/// segment gets its first letter upper-cased ("mr-mime" -> "Mr-Mime").
pub fn display_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_simple() {
        assert_eq!(display_name("pikachu"), "Pikachu");
    }

    #[test]
    fn test_display_name_hyphenated() {
        assert_eq!(display_name("mr-mime"), "Mr-Mime");
        assert_eq!(display_name("ho-oh"), "Ho-Oh");
    }

    #[test]
    fn test_display_name_empty() {
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_creature_from_payload() {
        let raw = r#"{
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "sprites": { "front_default": "https://img.example/1.png" },
            "types": [
                { "slot": 1, "type": { "name": "grass" } },
                { "slot": 2, "type": { "name": "poison" } }
            ],
            "stats": [
                { "base_stat": 45, "stat": { "name": "hp" } },
                { "base_stat": 49, "stat": { "name": "attack" } }
            ]
        }"#;

        let payload: PokemonPayload = serde_json::from_str(raw).unwrap();
        let creature = Creature::from(payload);

        assert_eq!(creature.name, "bulbasaur");
        assert_eq!(creature.height, 7);
        assert_eq!(creature.weight, 69);
        assert_eq!(creature.sprite.as_deref(), Some("https://img.example/1.png"));
        assert_eq!(creature.types, vec!["grass".to_string(), "poison".to_string()]);
        assert_eq!(creature.stats.len(), 2);
        assert_eq!(creature.stats[0].name, "hp");
        assert_eq!(creature.stats[0].value, 45);
    }

    #[test]
    fn test_creature_tolerates_missing_sprite() {
        let raw = r#"{
            "name": "missingno",
            "height": 1,
            "weight": 1,
            "sprites": { "front_default": null },
            "types": [],
            "stats": []
        }"#;

        let payload: PokemonPayload = serde_json::from_str(raw).unwrap();
        let creature = Creature::from(payload);

        assert!(creature.sprite.is_none());
        assert!(creature.types.is_empty());
    }
}
