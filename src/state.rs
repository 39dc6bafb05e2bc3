use std::sync::Arc;

use crate::dao::score_store::ScoreStore;

/// Reference-counted handle to [`AppState`] shared by every handler.
pub type SharedState = Arc<AppState>;

/// Central application state holding the injected score store.
pub struct AppState {
    score_store: Arc<dyn ScoreStore>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(score_store: Arc<dyn ScoreStore>) -> SharedState {
        Arc::new(Self { score_store })
    }

    /// Handle to the store backing the high score record.
    pub fn score_store(&self) -> Arc<dyn ScoreStore> {
        self.score_store.clone()
    }
}
