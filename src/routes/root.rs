use axum::{Json, Router, routing::get};

use crate::{dto::root::Greeting, state::SharedState};

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Static greeting", body = Greeting))
)]
/// Static greeting used as a liveness probe by the frontend.
pub async fn read_root() -> Json<Greeting> {
    Json(Greeting::default())
}

/// Configure the root route.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/", get(read_root))
}
