use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use credo_core::{CredentialError, ErrorCode};

/// Wire-level error envelope: `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Domain error leaving the service over HTTP.
///
/// Only the outer code and message are serialized; wrapped causes stay in
/// the logs.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] CredentialError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.code() {
            ErrorCode::CredentialNotFound => StatusCode::NOT_FOUND,
            ErrorCode::AuthFailed => StatusCode::UNAUTHORIZED,
            ErrorCode::EmailAlreadyExists => StatusCode::CONFLICT,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            // The chained cause is diagnostic-only; it never reaches the
            // response body.
            tracing::error!(error = ?self.0, "request failed");
        }

        let body = Json(ErrorResponse {
            error: ErrorBody {
                code: self.0.code().as_str().to_string(),
                message: self.0.message().to_string(),
            },
        });

        (status, body).into_response()
    }
}

/// Fallback for unmatched routes. Transport-level failures carry an
/// `http_`-prefixed code instead of a domain code.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: ErrorBody {
                code: "http_404".to_string(),
                message: "Not Found".to_string(),
            },
        }),
    )
}
