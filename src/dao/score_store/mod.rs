/// JSON file implementation.
pub mod file;
/// In-memory implementation.
pub mod memory;

use crate::dao::models::HighScoreRecord;
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

pub use self::file::FileScoreStore;
pub use self::memory::MemoryScoreStore;

/// Abstraction over the persistence layer for the single high score record.
pub trait ScoreStore: Send + Sync {
    /// Create the record with a score of zero when none exists yet.
    fn ensure_initialized(&self) -> BoxFuture<'static, StorageResult<()>>;
    /// Load the current record.
    fn read(&self) -> BoxFuture<'static, StorageResult<HighScoreRecord>>;
    /// Replace the stored record in full.
    fn write(&self, record: HighScoreRecord) -> BoxFuture<'static, StorageResult<()>>;
}
