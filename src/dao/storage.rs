use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be reached or rejected the operation.
    #[error("storage unavailable: {message}")]
    Unavailable {
        /// Human readable description of the failure.
        message: String,
        /// Underlying backend error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// No document with the given identifier exists in the collection.
    #[error("document `{id}` not found in `{collection}`")]
    NotFound {
        /// Collection that was searched.
        collection: &'static str,
        /// Identifier that was looked up.
        id: String,
    },
    /// The identifier is not a valid document id.
    #[error("`{id}` is not a valid document id")]
    InvalidId {
        /// The rejected identifier.
        id: String,
    },
    /// A document with the same identifier already exists.
    #[error("document `{id}` already exists in `{collection}`")]
    Duplicate {
        /// Collection holding the existing document.
        collection: &'static str,
        /// Hex identifier of the existing document.
        id: String,
    },
    /// A stored document does not have the expected shape.
    #[error("malformed document in `{collection}`: {message}")]
    Malformed {
        /// Collection the document was read from.
        collection: &'static str,
        /// What was wrong with the document.
        message: String,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
