//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::storefront::StorefrontError;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("catalog unavailable")]
    Storefront(#[from] StorefrontError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Storefront(_) => StatusCode::BAD_GATEWAY,
        };

        // Upstream and internal details stay in the logs
        match &self {
            AppError::Internal(e) => tracing::error!(error = %e, "internal server error"),
            AppError::Storefront(e) => tracing::warn!(error = %e, "storefront listing failed"),
        }

        (status, self.to_string()).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
