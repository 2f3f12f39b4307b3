mod config;
mod error;
mod store;

pub use config::MongoConfig;
pub use error::{MongoDaoError, MongoResult};
pub use store::MongoDocumentStore;

use crate::dao::storage::StorageError;

impl From<MongoDaoError> for StorageError {
    fn from(err: MongoDaoError) -> Self {
        StorageError::unavailable(err.to_string(), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_uri_is_rejected() {
        let err = MongoConfig::from_uri("nope://", "connect4")
            .await
            .err()
            .unwrap();
        assert!(matches!(err, MongoDaoError::InvalidUri { ref uri, .. } if uri == "nope://"));

        let storage = StorageError::from(err);
        assert!(matches!(storage, StorageError::Unavailable { .. }));
    }
}
