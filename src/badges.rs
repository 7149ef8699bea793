// Pokedex - Type Badges
// Background colors for type tags and the foreground contrast decision

use crate::error::PokedexError;

/// Foreground used on light badge backgrounds
pub const NEAR_BLACK: &str = "#212121";

/// Foreground used on dark badge backgrounds
pub const NEAR_WHITE: &str = "#f8f8f8";

/// Fallback background for type tags we have no color for
pub const DEFAULT_TYPE_COLOR: &str = "#68A090";

/// Perceived-luminance cutoff: above this the background counts as light
const LUMINANCE_THRESHOLD: f64 = 165.0;

/// Resolved (background, foreground) pair for one type tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub foreground: &'static str,
}

/// Background color for a type tag
pub fn type_color(type_name: &str) -> &'static str {
    match type_name {
        "normal" => "#A8A77A",
        "fire" => "#EE8130",
        "water" => "#6390F0",
        "electric" => "#F7D02C",
        "grass" => "#7AC74C",
        "ice" => "#96D9D6",
        "fighting" => "#C22E28",
        "poison" => "#A33EA1",
        "ground" => "#E2BF65",
        "flying" => "#A98FF3",
        "psychic" => "#F95587",
        "bug" => "#A6B91A",
        "rock" => "#B6A136",
        "ghost" => "#735797",
        "dragon" => "#6F35FC",
        "dark" => "#705746",
        "steel" => "#B7B7CE",
        "fairy" => "#D685AD",
        _ => DEFAULT_TYPE_COLOR,
    }
}

/// Pick a readable text color for the given background.
///
/// The background must be a 6-hex-digit RGB string, with or without a
/// leading `#`. Perceived luminance is `0.299*R + 0.587*G + 0.114*B`;
/// light backgrounds get [`NEAR_BLACK`], dark ones [`NEAR_WHITE`].
pub fn contrast_color(background: &str) -> Result<&'static str, PokedexError> {
    let hex = background.strip_prefix('#').unwrap_or(background);

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PokedexError::InvalidColorFormat(background.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| -> Result<f64, PokedexError> {
        u32::from_str_radix(&hex[range], 16)
            .map(f64::from)
            .map_err(|_| PokedexError::InvalidColorFormat(background.to_string()))
    };

    let luminance = 0.299 * channel(0..2)? + 0.587 * channel(2..4)? + 0.114 * channel(4..6)?;

    if luminance > LUMINANCE_THRESHOLD {
        Ok(NEAR_BLACK)
    } else {
        Ok(NEAR_WHITE)
    }
}

/// Style for one type badge. Table colors are always well-formed, so a
/// parse failure degrades to the light-on-dark pairing.
pub fn badge_style(type_name: &str) -> BadgeStyle {
    let background = type_color(type_name);
    let foreground = contrast_color(background).unwrap_or(NEAR_WHITE);

    BadgeStyle {
        background,
        foreground,
    }
}
