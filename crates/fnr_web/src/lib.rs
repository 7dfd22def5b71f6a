use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::root))
        .route("/analyze/content", post(handlers::analyze_content))
        .route("/analyze/url", post(handlers::analyze_url))
        .route("/model/info", get(handlers::model_info))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use fnr_core::{CredibilityReport, Error, Result};
}
