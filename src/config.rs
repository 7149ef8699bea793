// Pokedex - Startup Configuration
// Read once from the environment, then injected into the handlers as state

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::pokeapi::DEFAULT_BASE_URL;

/// Everything the binaries need to start, resolved from the environment.
/// Constructed once; read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite file holding the favorites table (`POKEDEX_DB`)
    pub db_path: PathBuf,

    /// Listen address for the web server (`POKEDEX_ADDR`)
    pub bind_addr: String,

    /// Root of the external creature-data API (`POKEDEX_API_BASE`)
    pub api_base: String,

    /// Sorted JSON name list used for autocomplete (`POKEDEX_NAMES_FILE`)
    pub names_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("POKEDEX_DB")
                .unwrap_or_else(|_| "pokedex.db".to_string())
                .into(),
            bind_addr: env::var("POKEDEX_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            api_base: env::var("POKEDEX_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            names_path: env::var("POKEDEX_NAMES_FILE")
                .unwrap_or_else(|_| "data/pokemon_names.json".to_string())
                .into(),
        }
    }
}

/// Load the known-name list written by `pokedex fetch-names`.
///
/// The list only seeds autocomplete, so callers treat a failure as an empty
/// list with a hint, never as a startup error.
pub fn load_known_names(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read name list from {:?}", path))?;

    parse_names_json(&raw)
}

pub fn parse_names_json(raw: &str) -> Result<Vec<String>> {
    let mut names: Vec<String> =
        serde_json::from_str(raw).context("Name list is not a JSON string array")?;

    names.sort();

    Ok(names)
}
