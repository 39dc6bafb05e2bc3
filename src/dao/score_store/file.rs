//! JSON file backed [`ScoreStore`].
//!
//! Writes overwrite the whole document in place. There is no locking and no
//! atomic rename, so concurrent submissions may lose an update.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::future::BoxFuture;
use tokio::fs;
use tracing::{debug, info};

use crate::dao::{
    models::HighScoreRecord,
    score_store::ScoreStore,
    storage::{StorageError, StorageResult},
};

/// Store persisting the record as pretty-printed JSON on local disk.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: Arc<Path>,
}

impl FileScoreStore {
    /// Build a store backed by the file at `path`. Nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::from(path.into()),
        }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn ensure_initialized(&self) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.path.clone();
        Box::pin(async move {
            match fs::try_exists(&path).await {
                Ok(true) => {
                    debug!(path = %path.display(), "high score record already present");
                    Ok(())
                }
                Ok(false) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        fs::create_dir_all(parent).await.map_err(|source| {
                            StorageError::unavailable(
                                format!("failed to create `{}`", parent.display()),
                                source,
                            )
                        })?;
                    }
                    write_record(&path, HighScoreRecord::default()).await?;
                    info!(path = %path.display(), "initialized high score record");
                    Ok(())
                }
                Err(source) => Err(StorageError::unavailable(
                    format!("failed to inspect `{}`", path.display()),
                    source,
                )),
            }
        })
    }

    fn read(&self) -> BoxFuture<'static, StorageResult<HighScoreRecord>> {
        let path = self.path.clone();
        Box::pin(async move {
            let contents = match fs::read(&path).await {
                Ok(contents) => contents,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    return Err(StorageError::Missing {
                        path: path.to_path_buf(),
                    });
                }
                Err(source) => {
                    return Err(StorageError::unavailable(
                        format!("failed to read `{}`", path.display()),
                        source,
                    ));
                }
            };

            serde_json::from_slice(&contents).map_err(|source| StorageError::Corrupt {
                path: path.to_path_buf(),
                source,
            })
        })
    }

    fn write(&self, record: HighScoreRecord) -> BoxFuture<'static, StorageResult<()>> {
        let path = self.path.clone();
        Box::pin(async move { write_record(&path, record).await })
    }
}

async fn write_record(path: &Path, record: HighScoreRecord) -> StorageResult<()> {
    let body = serde_json::to_string_pretty(&record).map_err(|source| {
        StorageError::unavailable("failed to serialize high score record".into(), source)
    })?;
    fs::write(path, body).await.map_err(|source| {
        StorageError::unavailable(format!("failed to write `{}`", path.display()), source)
    })
}
