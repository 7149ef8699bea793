// Pokedex - Error Taxonomy
// User-facing failure modes; storage/infrastructure errors stay on anyhow

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PokedexError {
    /// External lookup returned non-success or a malformed payload
    #[error("no Pokemon found matching '{0}'")]
    NotFound(String),

    /// A form or query field normalized to the empty string
    #[error("name must not be empty")]
    EmptyName,

    /// Either step of the two-step evolution lookup failed
    #[error("evolution data unavailable")]
    EvolutionUnavailable,

    /// Badge background was not a 6-hex-digit RGB string
    #[error("invalid color format: '{0}'")]
    InvalidColorFormat(String),
}
