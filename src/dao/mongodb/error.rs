use mongodb::error::Error as MongoError;
use thiserror::Error;

/// Result alias for MongoDB operations.
pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

/// Failures raised by the MongoDB driver, with the operation that triggered them.
#[derive(Debug, Error)]
pub enum MongoDaoError {
    /// The connection URI could not be parsed.
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        /// The rejected URI.
        uri: String,
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// The driver refused the parsed options.
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// The server did not answer a ping.
    #[error("MongoDB ping failed")]
    Ping {
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// An insert was rejected.
    #[error("failed to insert document into `{collection}`")]
    Insert {
        /// Target collection.
        collection: &'static str,
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// A lookup by id failed.
    #[error("failed to load document `{id}` from `{collection}`")]
    Load {
        /// Collection that was queried.
        collection: &'static str,
        /// Identifier that was looked up.
        id: String,
        /// Driver error.
        #[source]
        source: MongoError,
    },
}
