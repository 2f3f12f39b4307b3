use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use dashmap::{DashMap, mapref::entry::Entry};
use futures::future::BoxFuture;
use mongodb::bson::{Bson, Document, oid::ObjectId};
use thiserror::Error;

use crate::dao::{
    models::parse_object_id,
    storage::{StorageError, StorageResult},
    store::{DocumentStore, EntityKind},
};

#[derive(Debug, Error)]
#[error("in-memory store is closed")]
struct StoreClosed;

/// [`DocumentStore`] keeping documents in process memory. Contents are lost on shutdown.
#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    documents: DashMap<(EntityKind, ObjectId), Document>,
    closed: AtomicBool,
}

impl MemoryDocumentStore {
    /// Create an empty, open store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents held for `kind`.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.inner
            .documents
            .iter()
            .filter(|entry| entry.key().0 == kind)
            .count()
    }

    fn ensure_open(&self) -> StorageResult<()> {
        if self.inner.closed.load(Ordering::Acquire) {
            return Err(StorageError::unavailable(
                StoreClosed.to_string(),
                StoreClosed,
            ));
        }
        Ok(())
    }

    fn insert(&self, kind: EntityKind, mut document: Document) -> StorageResult<String> {
        self.ensure_open()?;
        let collection = kind.collection_name();

        let id = match document.get("_id") {
            None => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
            Some(Bson::ObjectId(id)) => *id,
            Some(other) => {
                return Err(StorageError::Malformed {
                    collection,
                    message: format!("expected an ObjectId `_id`, got {other}"),
                });
            }
        };

        match self.inner.documents.entry((kind, id)) {
            Entry::Occupied(_) => Err(StorageError::Duplicate {
                collection,
                id: id.to_hex(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(document);
                Ok(id.to_hex())
            }
        }
    }

    fn get(&self, kind: EntityKind, id: String) -> StorageResult<Document> {
        self.ensure_open()?;
        let object_id = parse_object_id(&id)?;

        self.inner
            .documents
            .get(&(kind, object_id))
            .map(|entry| entry.value().clone())
            .ok_or(StorageError::NotFound {
                collection: kind.collection_name(),
                id,
            })
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn insert(
        &self,
        kind: EntityKind,
        document: Document,
    ) -> BoxFuture<'static, StorageResult<String>> {
        let result = MemoryDocumentStore::insert(self, kind, document);
        Box::pin(async move { result })
    }

    fn get(&self, kind: EntityKind, id: String) -> BoxFuture<'static, StorageResult<Document>> {
        let result = MemoryDocumentStore::get(self, kind, id);
        Box::pin(async move { result })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let result = self.ensure_open();
        Box::pin(async move { result })
    }

    fn close(&self) -> BoxFuture<'static, ()> {
        self.inner.closed.store(true, Ordering::Release);
        Box::pin(async {})
    }
}
