use std::sync::Arc;

use tracing::info;

use crate::dao::store::DocumentStore;

/// Shared handle passed to every request handler.
pub type SharedState = Arc<AppState>;

/// Central application state holding the document store for the lifetime of the process.
pub struct AppState {
    store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(store: Arc<dyn DocumentStore>) -> SharedState {
        Arc::new(Self { store })
    }

    /// Handle to the document store.
    pub fn store(&self) -> Arc<dyn DocumentStore> {
        self.store.clone()
    }

    /// Release the storage connection. Called once the server has stopped accepting requests.
    pub async fn close(&self) {
        info!("closing storage connection");
        self.store.close().await;
    }
}
