use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use yearbook_store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request shape did not match; raised before the store is touched.
    #[error("{0}")]
    Validation(String),

    #[error("storage unavailable: {0}")]
    Storage(#[from] StoreError),

    #[error("worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(msg) => {
                warn!("Rejected request: {}", msg);
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Storage(e) => {
                error!("Store error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Task(e) => {
                error!("spawn_blocking join error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
