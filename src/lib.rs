// Pokedex - Core Library
// Exposes all modules for use in the CLI tool, web server, and tests

pub mod badges;
pub mod config;
pub mod creature;
pub mod db;
pub mod error;
pub mod evolution;
pub mod pokeapi;
pub mod templates;
pub mod web;

// Re-export commonly used types
pub use badges::{badge_style, contrast_color, type_color, BadgeStyle};
pub use config::{load_known_names, AppConfig};
pub use creature::{display_name, Creature, EvolutionDisplay, StatValue};
pub use db::{
    add_favorite, count_favorites, is_favorite, list_favorites, normalize_name, remove_favorite,
    setup_database, FavoriteEntry,
};
pub use error::PokedexError;
pub use evolution::{flatten_chain, ChainLink};
pub use pokeapi::{PokeClient, DEFAULT_BASE_URL};
pub use web::{router, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
