pub mod health;
pub mod movies;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Upstream diagnostic
        .route("/", get(movies::upstream_diagnostic))
        // Health check
        .route("/health", get(health::health_check))
        // Movies
        .route("/movies", get(movies::details_by_title))
        .route("/movies/popular", get(movies::popular))
        .route("/movies/search", get(movies::search))
        .route("/movies/now-playing", get(movies::now_playing))
        .route("/movies/genre", get(movies::by_genre))
        .route("/movies/credits", get(movies::credits_by_title))
        .with_state(state)
}

/// HTTP mapping for domain failures.
///
/// Handlers return `Result<_, ApiError>` so every failure surfaces with a
/// distinct status code; no route responds 200 with empty data.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::UpstreamStatus(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            DomainError::Upstream(_) => StatusCode::BAD_GATEWAY,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::warn!(status = status.as_u16(), error = %self.0, "request failed");

        (
            status,
            Json(json!({ "success": "error", "error": self.0.to_string() })),
        )
            .into_response()
    }
}
