//! Library crate for connect4-back, exposing modules for binaries and integration tests.

use axum::Router;
use tower_http::trace::TraceLayer;

/// Runtime configuration.
pub mod config;
/// Cross-origin policy.
pub mod cors;
/// Document store gateway and its backends.
pub mod dao;
mod dto;
mod error;
/// HTTP route trees.
pub mod routes;
/// Request handling logic behind the routes.
pub mod services;
/// Shared application state.
pub mod state;

pub use dto::game::{Game, StartGame};

/// Build the top-level router and attach cross-cutting middleware layers.
pub fn build_router(state: state::SharedState, cors_origins: &[String]) -> Router<()> {
    routes::router(state)
        .layer(cors::cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}
