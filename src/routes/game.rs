use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::game::{Game, StartGame},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes handling game sessions. Creation is served with and without the trailing slash.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/game", post(start_game))
        .route("/game/", post(start_game))
        .route("/game/{id}", get(get_game))
}

/// Start a new game for the given player and return the stored document.
#[utoipa::path(
    post,
    path = "/game/",
    tag = "game",
    request_body = StartGame,
    responses(
        (status = 200, description = "Game created", body = Game),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn start_game(
    State(state): State<SharedState>,
    Json(payload): Json<StartGame>,
) -> Result<Json<Game>, AppError> {
    let game = game_service::start_game(&state, payload).await?;
    Ok(Json(game))
}

/// Fetch a game by the identifier returned on creation.
#[utoipa::path(
    get,
    path = "/game/{id}",
    tag = "game",
    params(("id" = String, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game found", body = Game),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Game not found")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Game>, AppError> {
    let game = game_service::get_game(&state, id).await?;
    Ok(Json(game))
}
