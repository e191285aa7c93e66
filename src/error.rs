// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::message::ErrorResponse;
use crate::services::forwarder::ForwardError;

/// Handler error. Upstream failures pass through untouched and all end up as
/// a 502 with a generic body; the cause only goes to the log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Upstream(#[from] ForwardError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        error!(error = %self, %status, "request failed");

        let body = Json(ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("Upstream Error")
                .to_string(),
        });
        (status, body).into_response()
    }
}
