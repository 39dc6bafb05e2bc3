//! DTO definitions for the high score endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::HighScoreRecord;

/// Current best score returned by both `/highscore` routes.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct HighScoreResponse {
    /// Highest score accepted so far.
    pub best_score: i64,
}

impl From<HighScoreRecord> for HighScoreResponse {
    fn from(record: HighScoreRecord) -> Self {
        Self {
            best_score: record.best_score,
        }
    }
}

/// Score submitted by a client at the end of a run.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitScoreRequest {
    /// Score reached in the run; only recorded when it beats the current best.
    pub score: i64,
}
