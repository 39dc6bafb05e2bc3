use crate::dto::health::HealthResponse;

/// Respond with the static liveness payload.
pub fn health_status() -> HealthResponse {
    HealthResponse::ok()
}
