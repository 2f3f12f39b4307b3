use tracing::warn;

use crate::{
    dto::health::{HealthResponse, HealthStatus},
    state::SharedState,
};

/// Ping the document store and report whether the service can serve games.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.store().health_check().await {
        Ok(()) => HealthStatus::Ok.into(),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthStatus::Degraded.into()
        }
    }
}
