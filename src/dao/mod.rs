/// Database model definitions.
pub mod models;
/// Persistence layer for the high score record.
pub mod score_store;
/// Storage error types shared by every store.
pub mod storage;
