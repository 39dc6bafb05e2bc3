use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for DropGame Back.
#[openapi(
    info(title = "DropGame Backend"),
    paths(
        crate::routes::health::health,
        crate::routes::highscore::get_high_score,
        crate::routes::highscore::submit_score,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::highscore::HighScoreResponse,
            crate::dto::highscore::SubmitScoreRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "highscore", description = "Best score persistence"),
    )
)]
pub struct ApiDoc;
