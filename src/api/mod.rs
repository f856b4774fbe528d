//! HTTP API.
//!
//! Every endpoint follows the same shape: validate the request, build one
//! filter or pipeline, run it against one collection, shape the JSON.
//! Validation failures are answered before the database is touched.
//!
//! Add a new collection by:
//! 1. Describing it with a [`Resource`] in `database::models`
//! 2. Mounting the generic handlers from [`crud`] in [`router`]

pub mod crud;
pub mod error;
pub mod params;
pub mod pokemons;
pub mod response;
pub mod system;


use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::database::models::{Films, Pokemons};
use crate::database::{Database, DocumentRepository, Resource};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Repository for the collection backing `R`.
    pub fn repository<R: Resource>(&self) -> DocumentRepository {
        DocumentRepository::of::<R>(&self.db)
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/mongodb", get(system::mongodb))
        .route("/health", get(system::health))
        .merge(crud_routes::<Films>("/films"))
        .merge(crud_routes::<Pokemons>("/pokemons"))
        .route("/pokemons/type/:type", get(pokemons::by_type))
        .route("/pokemons/with-min-types/:min", get(pokemons::with_min_types))
        .route("/pokemons/filter", get(pokemons::search))
        .route("/pokemons/top-weight", get(pokemons::top_weight))
        .route("/pokemons/top-height", get(pokemons::top_height))
        .route("/pokemons/without-evolution", get(pokemons::without_evolution))
        .route(
            "/pokemons/top-french-name-length",
            get(pokemons::top_french_name_length),
        )
        .route("/pokemons/stats/hp/average", get(pokemons::hp_average))
        .route("/pokemons/stats/types/top", get(pokemons::top_types))
        .fallback(system::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// List/create on `base`, fetch/update/delete on `base/:id`.
fn crud_routes<R: Resource>(base: &str) -> Router<AppState> {
    Router::new()
        .route(base, get(crud::list::<R>).post(crud::create::<R>))
        .route(
            &format!("{base}/:id"),
            get(crud::fetch::<R>)
                .put(crud::update::<R>)
                .delete(crud::remove::<R>),
        )
}
