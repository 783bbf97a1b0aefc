//! Gateway error types.
//!
//! [`ApiError`] is what a handler returns to the caller; [`GatewayError`]
//! covers startup and lifecycle failures.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::config::ConfigError;

/// Request-level error with a fixed plain-text body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Body is not a decodable validation request
    #[error("Invalid request body")]
    InvalidBody,

    /// Method not served on this route
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Gateway lifecycle errors
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Verifier could not be constructed
    #[error("authority setup failed: {0}")]
    Authority(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(String),

    /// Server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(String),

    /// Logging subscriber could not be installed
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}
