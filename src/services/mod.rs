/// OpenAPI documentation generation.
pub mod documentation;
/// Game session creation and lookup.
pub mod game_service;
/// Health check service.
pub mod health_service;
