use futures::future::BoxFuture;
use mongodb::bson::Document;

use crate::dao::storage::StorageResult;

/// Kind of entity persisted by the gateway; each kind maps to one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Game sessions.
    Game,
}

impl EntityKind {
    /// Name of the collection holding documents of this kind.
    pub fn collection_name(self) -> &'static str {
        match self {
            EntityKind::Game => "games",
        }
    }
}

/// Gateway mediating every read and write against the document store.
///
/// Identifiers handed out by [`DocumentStore::insert`] are the hex rendering of the
/// generated ObjectId and are accepted verbatim by [`DocumentStore::get`].
pub trait DocumentStore: Send + Sync {
    /// Insert one document and return the identifier assigned by the store.
    fn insert(
        &self,
        kind: EntityKind,
        document: Document,
    ) -> BoxFuture<'static, StorageResult<String>>;
    /// Fetch one document by identifier, failing with `NotFound` when absent.
    fn get(&self, kind: EntityKind, id: String) -> BoxFuture<'static, StorageResult<Document>>;
    /// Check that the backend is reachable.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Release the underlying connection. Later operations fail as unavailable.
    fn close(&self) -> BoxFuture<'static, ()>;
}
