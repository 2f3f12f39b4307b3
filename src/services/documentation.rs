use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Connect4 Back.
#[openapi(
    paths(
        crate::routes::root::read_root,
        crate::routes::game::start_game,
        crate::routes::game::get_game,
        crate::routes::health::healthcheck,
    ),
    components(
        schemas(
            crate::dto::root::Greeting,
            crate::dto::game::StartGame,
            crate::dto::game::Game,
            crate::dto::health::HealthResponse,
            crate::dto::health::HealthStatus,
        )
    ),
    tags(
        (name = "game", description = "Game session endpoints"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
