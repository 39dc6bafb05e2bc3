//! In-memory [`ScoreStore`] used by tests and for running without a disk.

use std::{path::PathBuf, sync::Arc};

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{
    models::HighScoreRecord,
    score_store::ScoreStore,
    storage::{StorageError, StorageResult},
};

/// Store keeping the record in process memory. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    record: Arc<RwLock<Option<HighScoreRecord>>>,
}

impl MemoryScoreStore {
    /// Create an empty store; reads fail with [`StorageError::Missing`] until initialized.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `record`.
    pub fn with_record(record: HighScoreRecord) -> Self {
        Self {
            record: Arc::new(RwLock::new(Some(record))),
        }
    }

    /// Current record, if any, without going through the trait.
    pub async fn snapshot(&self) -> Option<HighScoreRecord> {
        *self.record.read().await
    }
}

impl ScoreStore for MemoryScoreStore {
    fn ensure_initialized(&self) -> BoxFuture<'static, StorageResult<()>> {
        let record = self.record.clone();
        Box::pin(async move {
            record.write().await.get_or_insert_with(HighScoreRecord::default);
            Ok(())
        })
    }

    fn read(&self) -> BoxFuture<'static, StorageResult<HighScoreRecord>> {
        let record = self.record.clone();
        Box::pin(async move {
            let guard = record.read().await;
            (*guard).ok_or_else(|| StorageError::Missing {
                path: PathBuf::from(":memory:"),
            })
        })
    }

    fn write(&self, record: HighScoreRecord) -> BoxFuture<'static, StorageResult<()>> {
        let slot = self.record.clone();
        Box::pin(async move {
            *slot.write().await = Some(record);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_reads_missing() {
        let store = MemoryScoreStore::new();
        assert!(matches!(
            store.read().await,
            Err(StorageError::Missing { .. })
        ));
    }

    #[tokio::test]
    async fn initialize_then_write_round_trips() {
        let store = MemoryScoreStore::new();
        store.ensure_initialized().await.unwrap();
        assert_eq!(store.read().await.unwrap(), HighScoreRecord::new(0));

        store.write(HighScoreRecord::new(12)).await.unwrap();
        store.ensure_initialized().await.unwrap();
        assert_eq!(store.snapshot().await, Some(HighScoreRecord::new(12)));
    }
}
