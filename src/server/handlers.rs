use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::models::{SearchEnvelope, SearchRequest};

/// Raw query string of `GET /search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<i64>,
}

impl SearchParams {
    /// Validates the parameters into a search request
    pub fn into_request(self) -> ApiResult<SearchRequest> {
        let query = self.q.ok_or_else(|| {
            ApiError::InvalidRequest("Query parameter 'q' is required".to_string())
        })?;
        Ok(SearchRequest::new(query, self.page)?)
    }
}

/// `GET /search?q=<text>&page=<1..5>`
///
/// Responds with a one-element array holding the search envelope.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<Vec<SearchEnvelope>>> {
    let Query(params) = params.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let request = params.into_request()?;

    let envelopes = state.search.search(&request.query, request.page).await?;
    Ok(Json(envelopes))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
