//! HTTP API for Apptrack Core.
//!
//! Axum REST surface over the job and profile stores. Handlers recompute the
//! derived views (filter, stats) against a fresh store snapshot on every
//! request; nothing is cached, so responses are never stale relative to the
//! store.
//!
//! All endpoints respond with the uniform [`ApiResponse`] envelope; errors
//! convert to HTTP status codes via the `IntoResponse` implementation on
//! [`crate::error::TrackError`].

pub mod handlers;
pub mod routes;

use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::jobs::JobStore;
use crate::profile::ProfileStore;

/// Application state shared across handlers.
#[derive(Clone, Default)]
pub struct AppState {
    pub jobs: Arc<JobStore>,
    pub profile: Arc<ProfileStore>,
}

impl AppState {
    /// Fresh state with empty stores.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build the API router.
///
/// - Health check endpoint (unversioned)
/// - V1 API routes under `/api/v1/`
/// - CORS, request tracing, and response compression layers
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::v1_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// Standard API response wrapper.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl<T: serde::Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            error_code: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            error_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success("test data");
        assert!(response.success);
        assert_eq!(response.data, Some("test data"));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_api_response_error() {
        let response = ApiResponse::<()>::error("something went wrong");
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.error, Some("something went wrong".to_string()));
    }

    #[test]
    fn test_api_response_serialization_omits_empty_fields() {
        let response = ApiResponse::success(serde_json::json!({"key": "value"}));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["key"], "value");
        assert!(json.get("error").is_none());
        assert!(json.get("error_code").is_none());
    }
}
