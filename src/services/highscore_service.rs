//! Read-modify-write logic for the single high score record.

use tracing::{debug, info, warn};

use crate::{
    dao::{models::HighScoreRecord, score_store::ScoreStore},
    dto::highscore::HighScoreResponse,
    error::ServiceError,
    state::SharedState,
};

/// Return the current best score, or zero when no usable record exists.
pub async fn get_high_score(state: &SharedState) -> HighScoreResponse {
    let store = state.score_store();
    read_or_default(store.as_ref()).await.into()
}

/// Persist `score` when it beats the current best and return the resulting best.
///
/// Negative scores are accepted but can never beat the stored best.
pub async fn submit_score(
    state: &SharedState,
    score: i64,
) -> Result<HighScoreResponse, ServiceError> {
    let store = state.score_store();
    let current = read_or_default(store.as_ref()).await;

    let Some(next) = current.improved_by(score) else {
        debug!(score, best_score = current.best_score, "score does not beat best");
        return Ok(current.into());
    };

    store.write(next).await?;
    info!(
        previous = current.best_score,
        best_score = next.best_score,
        "new high score recorded"
    );
    Ok(next.into())
}

/// Load the record, substituting an empty one when the read fails for any reason.
async fn read_or_default(store: &dyn ScoreStore) -> HighScoreRecord {
    match store.read().await {
        Ok(record) => record,
        Err(err) => {
            warn!(
                kind = err.kind(),
                error = %err,
                "no usable high score record; treating best score as 0"
            );
            HighScoreRecord::default()
        }
    }
}
