use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::{RequestError, SearchError};

/// Body returned when the first listing page cannot be fetched
pub const FETCH_FAILED_DETAIL: &str = "Failed to fetch search results.";

/// Body returned when nothing could be extracted
pub const NOT_FOUND_MESSAGE: &str = "No results found";

/// Errors returned by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Query parameters missing or malformed
    #[error("{0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl From<RequestError> for ApiError {
    fn from(e: RequestError) -> Self {
        ApiError::InvalidRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidRequest(msg) => {
                tracing::debug!("Rejected search request: {}", msg);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": msg })),
                )
                    .into_response()
            }
            // Already logged by the search service
            ApiError::Search(SearchError::FetchFailed { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": FETCH_FAILED_DETAIL })),
            )
                .into_response(),
            ApiError::Search(SearchError::NotFound) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": NOT_FOUND_MESSAGE })),
            )
                .into_response(),
        }
    }
}

/// Convenience alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;
