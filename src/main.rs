// Pokedex - CLI Tools
// One-shot maintenance commands; the web UI lives in the pokedex-server binary

use std::env;
use std::fs;

use anyhow::{Context, Result};

use pokedex::{AppConfig, PokeClient};

/// Upper bound passed to the bulk list endpoint; one request covers the lot
const NAME_FETCH_LIMIT: u32 = 2000;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "fetch-names" {
        run_fetch_names().await?;
    } else {
        print_usage();
    }

    Ok(())
}

/// Fetch the known creature names and save them locally as sorted JSON,
/// ready for the server to seed autocomplete from at startup.
async fn run_fetch_names() -> Result<()> {
    println!("📇 Pokedex - Name Fetcher");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = AppConfig::from_env();
    let client = PokeClient::new(&config.api_base)?;

    println!("\n🌐 Fetching up to {} names from {} ...", NAME_FETCH_LIMIT, config.api_base);
    let names = client.fetch_all_names(NAME_FETCH_LIMIT).await?;

    if let Some(parent) = config.names_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
    }

    let json = serde_json::to_string_pretty(&names)?;
    fs::write(&config.names_path, json)
        .with_context(|| format!("Failed to write {:?}", config.names_path))?;

    println!("✓ Saved {} names to {:?}", names.len(), config.names_path);

    Ok(())
}

fn print_usage() {
    eprintln!("Pokedex v{}", pokedex::VERSION);
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  pokedex fetch-names    Refresh the local autocomplete name list");
    eprintln!();
    eprintln!("To start the web UI:");
    eprintln!("  cargo run --bin pokedex-server");
}
