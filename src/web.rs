// Pokedex - Web Layer
// Route table, shared state, and the request handlers

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use rusqlite::Connection;
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::creature::EvolutionDisplay;
use crate::db;
use crate::pokeapi::PokeClient;
use crate::templates;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub client: PokeClient,
    pub known_names: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(conn: Connection, client: PokeClient, known_names: Vec<String>) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            client,
            known_names: Arc::new(known_names),
        }
    }
}

#[derive(Deserialize)]
pub struct LookupParams {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
pub struct NameForm {
    #[serde(default)]
    name: String,
}

/// Build the full route table over the given state
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(search_home))
        .route("/pokemon", get(pokemon_detail))
        .route("/favorites", get(favorites_page))
        .route("/favorites/add", post(favorites_add))
        .route("/favorites/remove", post(favorites_remove))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// GET / - search page
async fn search_home(State(state): State<AppState>) -> Html<String> {
    Html(templates::render_search_page(&state.known_names))
}

/// GET /pokemon?name=X - detail view, or error view when the lookup fails
async fn pokemon_detail(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Response {
    let name = params.name.trim().to_lowercase();

    if name.is_empty() {
        return Redirect::to("/").into_response();
    }

    let creature = match state.client.fetch_pokemon(&name).await {
        Ok(creature) => creature,
        Err(err) => {
            eprintln!("Lookup failed for '{}': {}", name, err);
            return (
                StatusCode::NOT_FOUND,
                Html(templates::render_error_page(&name)),
            )
                .into_response();
        }
    };

    // A single-tier chain means the species simply does not evolve; a fetch
    // failure only degrades this section, never the whole page.
    let evolution = match state.client.fetch_evolution_stages(&name).await {
        Ok(stages) if stages.len() > 1 => EvolutionDisplay::Chain(stages),
        Ok(_) => EvolutionDisplay::NoEvolutions,
        Err(_) => EvolutionDisplay::Unavailable,
    };

    let favorited = {
        let conn = state.db.lock().unwrap();
        match db::is_favorite(&conn, &name) {
            Ok(favorited) => favorited,
            Err(err) => {
                eprintln!("Favorites lookup failed for '{}': {}", name, err);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    };

    Html(templates::render_detail_page(&creature, favorited, &evolution)).into_response()
}

/// GET /favorites - stored favorites, lexicographically ordered
async fn favorites_page(State(state): State<AppState>) -> Response {
    let entries = {
        let conn = state.db.lock().unwrap();
        match db::list_favorites(&conn) {
            Ok(entries) => entries,
            Err(err) => {
                eprintln!("Failed to list favorites: {}", err);
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        }
    };

    Html(templates::render_favorites_page(&entries)).into_response()
}

/// POST /favorites/add - insert, then bounce back to the list
async fn favorites_add(State(state): State<AppState>, Form(form): Form<NameForm>) -> Response {
    if form.name.trim().is_empty() {
        return Redirect::to("/").into_response();
    }

    let conn = state.db.lock().unwrap();
    match db::add_favorite(&conn, &form.name) {
        Ok(_) => Redirect::to("/favorites").into_response(),
        Err(err) => {
            eprintln!("Failed to add favorite '{}': {}", form.name, err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// POST /favorites/remove - delete (no-op when absent), then bounce back
async fn favorites_remove(State(state): State<AppState>, Form(form): Form<NameForm>) -> Response {
    if form.name.trim().is_empty() {
        return Redirect::to("/favorites").into_response();
    }

    let conn = state.db.lock().unwrap();
    match db::remove_favorite(&conn, &form.name) {
        Ok(_) => Redirect::to("/favorites").into_response(),
        Err(err) => {
            eprintln!("Failed to remove favorite '{}': {}", form.name, err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
