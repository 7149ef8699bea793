// Pokedex - Web Server
// Search, detail, and favorites routes over the shared SQLite store

use rusqlite::Connection;

use pokedex::config::{load_known_names, AppConfig};
use pokedex::db;
use pokedex::pokeapi::PokeClient;
use pokedex::web::{router, AppState};

#[tokio::main]
async fn main() {
    println!("🔴 Pokedex - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━");

    let config = AppConfig::from_env();

    // Open the favorites store, creating the schema on first startup
    let conn = Connection::open(&config.db_path).expect("Failed to open database");
    db::setup_database(&conn).expect("Failed to initialize database");
    println!("✓ Database ready: {:?}", config.db_path);

    let favorites = db::count_favorites(&conn).unwrap_or(0);
    println!("✓ Favorites stored: {}", favorites);

    // Autocomplete seeding is best-effort; search works without it
    let known_names = match load_known_names(&config.names_path) {
        Ok(names) => {
            println!("✓ Loaded {} known names for autocomplete", names.len());
            names
        }
        Err(_) => {
            eprintln!("⚠️  No name list at {:?}", config.names_path);
            eprintln!("   Run: cargo run --bin pokedex fetch-names");
            eprintln!("   Search still works without autocomplete.");
            Vec::new()
        }
    };

    let client = PokeClient::new(&config.api_base).expect("Failed to build API client");
    let state = AppState::new(conn, client, known_names);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://{}", config.bind_addr);
    println!("   Search:    http://localhost:3000/");
    println!("   Favorites: http://localhost:3000/favorites");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
