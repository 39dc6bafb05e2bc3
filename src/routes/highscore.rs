use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::highscore::{HighScoreResponse, SubmitScoreRequest},
    error::AppError,
    services::highscore_service,
    state::SharedState,
};

/// Endpoints reading and updating the persisted high score.
pub fn router() -> Router<SharedState> {
    Router::new().route("/highscore", get(get_high_score).post(submit_score))
}

#[utoipa::path(
    get,
    path = "/highscore",
    tag = "highscore",
    responses(
        (status = 200, description = "Current best score (0 when the record cannot be read)", body = HighScoreResponse)
    )
)]
/// Return the best score recorded so far.
pub async fn get_high_score(State(state): State<SharedState>) -> Json<HighScoreResponse> {
    Json(highscore_service::get_high_score(&state).await)
}

#[utoipa::path(
    post,
    path = "/highscore",
    tag = "highscore",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Resulting best score, unchanged unless the submission beat it", body = HighScoreResponse),
        (status = 400, description = "Body is not valid JSON"),
        (status = 422, description = "Body is not a valid score payload"),
        (status = 500, description = "New best score could not be written")
    )
)]
/// Submit a score; it replaces the best score only when strictly higher.
pub async fn submit_score(
    State(state): State<SharedState>,
    Json(request): Json<SubmitScoreRequest>,
) -> Result<Json<HighScoreResponse>, AppError> {
    let payload = highscore_service::submit_score(&state, request.score).await?;
    Ok(Json(payload))
}
