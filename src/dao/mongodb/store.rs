use futures::future::BoxFuture;
use mongodb::{
    Client, Collection, Database,
    bson::{Bson, Document, doc},
    error::{ErrorKind, WriteFailure},
};
use tracing::debug;

use super::{
    config::MongoConfig,
    error::{MongoDaoError, MongoResult},
};
use crate::dao::{
    models::parse_object_id,
    storage::{StorageError, StorageResult},
    store::{DocumentStore, EntityKind},
};

const DUPLICATE_KEY_CODE: i32 = 11000;

/// [`DocumentStore`] backed by a MongoDB database.
#[derive(Clone)]
pub struct MongoDocumentStore {
    client: Client,
    database: Database,
}

impl MongoDocumentStore {
    /// Build the client and make sure the server answers a ping before handing it out.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let client = Client::with_options(config.options)
            .map_err(|source| MongoDaoError::ClientConstruction { source })?;
        let database = client.database(&config.database_name);

        let store = Self { client, database };
        store.ping().await?;
        Ok(store)
    }

    fn collection(&self, kind: EntityKind) -> Collection<Document> {
        self.database.collection::<Document>(kind.collection_name())
    }

    async fn ping(&self) -> MongoResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::Ping { source })?;
        Ok(())
    }

    async fn insert(&self, kind: EntityKind, document: Document) -> StorageResult<String> {
        let collection = kind.collection_name();
        let result = match self.collection(kind).insert_one(&document).await {
            Ok(result) => result,
            Err(source) if is_duplicate_key(&source) => {
                return Err(StorageError::Duplicate {
                    collection,
                    id: duplicate_id(&document),
                });
            }
            Err(source) => return Err(MongoDaoError::Insert { collection, source }.into()),
        };

        match result.inserted_id {
            Bson::ObjectId(id) => {
                debug!(%id, collection, "document inserted");
                Ok(id.to_hex())
            }
            other => Err(StorageError::Malformed {
                collection,
                message: format!("expected an ObjectId `_id`, got {other}"),
            }),
        }
    }

    async fn get(&self, kind: EntityKind, id: String) -> StorageResult<Document> {
        let collection = kind.collection_name();
        let object_id = parse_object_id(&id)?;

        let document = self
            .collection(kind)
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|source| MongoDaoError::Load {
                collection,
                id: id.clone(),
                source,
            })?;

        document.ok_or(StorageError::NotFound { collection, id })
    }
}

/// Hex id of a document rejected as a duplicate, matching the ids handed out by `insert`.
fn duplicate_id(document: &Document) -> String {
    document
        .get("_id")
        .and_then(Bson::as_object_id)
        .map(|id| id.to_hex())
        .unwrap_or_default()
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY_CODE
    )
}

impl DocumentStore for MongoDocumentStore {
    fn insert(
        &self,
        kind: EntityKind,
        document: Document,
    ) -> BoxFuture<'static, StorageResult<String>> {
        let store = self.clone();
        Box::pin(async move { store.insert(kind, document).await })
    }

    fn get(&self, kind: EntityKind, id: String) -> BoxFuture<'static, StorageResult<Document>> {
        let store = self.clone();
        Box::pin(async move { store.get(kind, id).await })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(Into::into) })
    }

    fn close(&self) -> BoxFuture<'static, ()> {
        let client = self.client.clone();
        Box::pin(async move { client.shutdown().await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNREACHABLE_URI: &str = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300";

    async fn unreachable_config() -> MongoConfig {
        MongoConfig::from_uri(UNREACHABLE_URI, "connect4_test")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn connect_fails_when_database_is_unreachable() {
        let err = MongoDocumentStore::connect(unreachable_config().await)
            .await
            .err()
            .unwrap();

        let source = match err {
            MongoDaoError::Ping { source } => source,
            other => panic!("expected a ping failure, got {other:?}"),
        };
        assert!(!is_duplicate_key(&source));

        let storage: StorageError = MongoDaoError::Ping { source }.into();
        assert!(matches!(storage, StorageError::Unavailable { .. }));
    }

    #[test]
    fn duplicate_id_is_rendered_as_hex() {
        let id = mongodb::bson::oid::ObjectId::new();
        assert_eq!(duplicate_id(&doc! { "_id": id }), id.to_hex());
        assert_eq!(duplicate_id(&doc! { "player1": "a" }), "");
    }

    #[tokio::test]
    async fn from_uri_keeps_database_name_and_sets_app_name() {
        let config = unreachable_config().await;
        assert_eq!(config.database_name, "connect4_test");
        assert_eq!(config.options.app_name.as_deref(), Some("connect4-back"));
    }
}
