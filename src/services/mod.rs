/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// High score read and submission logic.
pub mod highscore_service;
