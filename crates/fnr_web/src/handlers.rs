use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::AppState;
use fnr_core::{CredibilityReport, Error, ModelInfo};

#[derive(Debug, Deserialize)]
pub struct NewsContent {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct NewsUrl {
    pub url: String,
}

/// Maps pipeline errors to HTTP responses: client-fixable input
/// problems become 400s, everything else a 500. Internal causes are
/// logged but not echoed to the caller.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = if self.0.is_client_error() {
            (StatusCode::BAD_REQUEST, self.0.to_string())
        } else {
            error!("analysis failed: {}", self.0);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Server error: {}", self.0))
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to Fake News Radar API" }))
}

pub async fn analyze_content(
    State(state): State<Arc<AppState>>,
    Json(news): Json<NewsContent>,
) -> Result<Json<CredibilityReport>, ApiError> {
    let report = state.analyzer.analyze_text(&news.content).await?;
    Ok(Json(report))
}

pub async fn analyze_url(
    State(state): State<Arc<AppState>>,
    Json(news): Json<NewsUrl>,
) -> Result<Json<CredibilityReport>, ApiError> {
    let report = state.analyzer.analyze_url(&news.url).await?;
    Ok(Json(report))
}

pub async fn model_info(State(state): State<Arc<AppState>>) -> Json<ModelInfo> {
    Json(state.analyzer.model_info())
}
