//! Connect4 Back binary entrypoint wiring configuration, storage and the REST API.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use connect4_back::{
    build_router,
    config::{AppConfig, StoreBackend},
    dao::{
        memory::MemoryDocumentStore,
        mongodb::{MongoConfig, MongoDocumentStore},
        store::DocumentStore,
    },
    state::AppState,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let store = connect_store(&config).await?;
    let app_state = AppState::new(store);

    let app = build_router(app_state.clone(), &config.cors_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    let served = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum");

    app_state.close().await;
    served
}

/// Open the configured document store; an unreachable database aborts startup.
async fn connect_store(config: &AppConfig) -> anyhow::Result<Arc<dyn DocumentStore>> {
    match config.store {
        StoreBackend::Mongo => {
            let mongo_config = MongoConfig::from_uri(&config.mongo_url, &config.mongo_db)
                .await
                .context("parsing MongoDB settings")?;
            let store = MongoDocumentStore::connect(mongo_config)
                .await
                .context("connecting to MongoDB")?;
            info!(database = %config.mongo_db, "connected to MongoDB");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!("using in-memory store; games will not survive a restart");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
    }
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
