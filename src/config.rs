//! Application-level configuration loading: database location, HTTP port and CORS origins.

use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "CONNECT4_BACK_CONFIG_PATH";

const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017";
const DEFAULT_MONGO_DB: &str = "connect4";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// MongoDB reachable at [`AppConfig::mongo_url`].
    #[default]
    #[serde(alias = "mongodb")]
    Mongo,
    /// Process-local store; data does not survive a restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend `{other}`")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// MongoDB connection URL.
    pub mongo_url: String,
    /// Name of the database holding the game collections.
    pub mongo_db: String,
    /// TCP port the HTTP server binds to.
    pub port: u16,
    /// Origins allowed to make credentialed cross-origin requests.
    pub cors_origins: Vec<String>,
    /// Storage backend.
    pub store: StoreBackend,
}

impl AppConfig {
    /// Load the configuration file (if any) and apply environment overrides on top.
    pub fn load() -> Self {
        let mut config = Self::from_file(&resolve_config_path());
        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Read the JSON configuration at `path`, falling back to built-in defaults.
    fn from_file(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    info!(path = %path.display(), "loaded configuration file");
                    Self::default().merge(raw)
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    fn merge(mut self, raw: RawConfig) -> Self {
        if let Some(url) = raw.mongo_url {
            self.mongo_url = url;
        }
        if let Some(db) = raw.mongo_db {
            self.mongo_db = db;
        }
        if let Some(port) = raw.port {
            self.port = port;
        }
        if let Some(origins) = raw.cors_origins {
            self.cors_origins = origins;
        }
        if let Some(store) = raw.store {
            self.store = store;
        }
        self
    }

    /// Override settings from environment variables resolved through `lookup`.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = lookup("MONGO_DB_URL") {
            self.mongo_url = url;
        }
        if let Some(db) = lookup("MONGO_DB_NAME") {
            self.mongo_db = db;
        }
        if let Some(raw) = lookup("PORT").or_else(|| lookup("SERVER_PORT")) {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(err) => warn!(value = %raw, error = %err, "ignoring invalid port"),
            }
        }
        if let Some(raw) = lookup("CORS_ALLOWED_ORIGINS") {
            self.cors_origins = raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_owned)
                .collect();
        }
        if let Some(raw) = lookup("CONNECT4_STORE") {
            match raw.parse() {
                Ok(store) => self.store = store,
                Err(err) => warn!(error = %err, "ignoring invalid store backend"),
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mongo_url: DEFAULT_MONGO_URL.to_owned(),
            mongo_db: DEFAULT_MONGO_DB.to_owned(),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.map(str::to_owned).to_vec(),
            store: StoreBackend::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    mongo_url: Option<String>,
    mongo_db: Option<String>,
    port: Option<u16>,
    cors_origins: Option<Vec<String>>,
    store: Option<StoreBackend>,
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
