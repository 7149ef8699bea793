// Pokedex - PokeAPI Client
// Typed wire payloads plus a thin blocking-per-request HTTP collaborator

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::creature::Creature;
use crate::error::PokedexError;
use crate::evolution::{flatten_chain, ChainLink};

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Outbound calls are bounded; there is no retry and no cancellation
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// WIRE PAYLOADS
// Only the fields we consume; everything else in the response is ignored.
// ============================================================================

/// A `{ name, url }` reference, the API's universal building block
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,

    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct PokemonPayload {
    pub name: String,
    pub height: i64,
    pub weight: i64,

    #[serde(default)]
    pub sprites: SpritesPayload,

    #[serde(default)]
    pub types: Vec<TypeSlot>,

    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpritesPayload {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: i64,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct SpeciesPayload {
    pub evolution_chain: Option<ResourceRef>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceRef {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct EvolutionChainPayload {
    pub chain: ChainLink,
}

#[derive(Debug, Deserialize)]
pub struct NamedListPayload {
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

// ============================================================================
// CLIENT
// ============================================================================

/// Client for the external creature-data API.
///
/// The base URL is injected so tests and local mirrors can point elsewhere.
#[derive(Debug, Clone)]
pub struct PokeClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Look up one creature by its normalized name.
    ///
    /// Transport errors, non-success statuses, and malformed payloads all
    /// collapse into a single `NotFound` outcome carrying the searched name.
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Creature, PokedexError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);

        let payload: PokemonPayload = self
            .get_json(&url)
            .await
            .map_err(|_| PokedexError::NotFound(name.to_string()))?;

        Ok(payload.into())
    }

    /// Resolve the evolution stages for a creature.
    ///
    /// Two-step lookup: the species record points at the chain resource,
    /// which holds the tree the flattener consumes. Any failure along the
    /// way surfaces abstractly as `EvolutionUnavailable`.
    pub async fn fetch_evolution_stages(&self, name: &str) -> Result<Vec<Vec<String>>, PokedexError> {
        let url = format!("{}/pokemon-species/{}", self.base_url, name);

        let species: SpeciesPayload = self
            .get_json(&url)
            .await
            .map_err(|_| PokedexError::EvolutionUnavailable)?;

        let chain_ref = species
            .evolution_chain
            .ok_or(PokedexError::EvolutionUnavailable)?;

        let payload: EvolutionChainPayload = self
            .get_json(&chain_ref.url)
            .await
            .map_err(|_| PokedexError::EvolutionUnavailable)?;

        Ok(flatten_chain(&payload.chain))
    }

    /// Fetch up to `limit` known creature names, sorted. Used by the
    /// one-shot `fetch-names` tool, not on the request path.
    pub async fn fetch_all_names(&self, limit: u32) -> Result<Vec<String>> {
        let url = format!("{}/pokemon?limit={}&offset=0", self.base_url, limit);

        let payload: NamedListPayload = self
            .get_json(&url)
            .await
            .context("Failed to fetch the name list")?;

        let mut names: Vec<String> = payload.results.into_iter().map(|r| r.name).collect();
        names.sort();

        Ok(names)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Request to {} returned {}", url, response.status());
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Malformed payload from {}", url))
    }
}
