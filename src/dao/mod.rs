/// In-memory document store used for tests and local runs.
pub mod memory;
/// Database model definitions.
pub mod models;
/// MongoDB-backed document store.
pub mod mongodb;
/// Storage error types shared by every backend.
pub mod storage;
/// Gateway trait mediating document reads and writes.
pub mod store;
