use mongodb::options::ClientOptions;

use super::error::{MongoDaoError, MongoResult};

const APP_NAME: &str = "connect4-back";

/// Parsed driver options plus the database every collection lives in.
#[derive(Clone)]
pub struct MongoConfig {
    /// Driver options parsed from the connection URI.
    pub options: ClientOptions,
    /// Database holding every collection.
    pub database_name: String,
}

impl MongoConfig {
    /// Parse `uri` into driver options without pinging the server.
    pub async fn from_uri(uri: &str, database_name: &str) -> MongoResult<Self> {
        let mut options =
            ClientOptions::parse(uri)
                .await
                .map_err(|source| MongoDaoError::InvalidUri {
                    uri: uri.to_owned(),
                    source,
                })?;
        options.app_name.get_or_insert_with(|| APP_NAME.to_owned());

        Ok(Self {
            options,
            database_name: database_name.to_owned(),
        })
    }
}
