use axum::Router;

use crate::state::SharedState;

/// Swagger UI and OpenAPI document.
pub mod docs;
/// Game session routes.
pub mod game;
/// Health check route.
pub mod health;
/// Root greeting.
pub mod root;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    root::router()
        .merge(game::router())
        .merge(health::router())
        .merge(docs::router())
        .with_state(state)
}
