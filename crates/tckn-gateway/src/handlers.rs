//! HTTP handlers for the validation endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::debug;

use tckn_validator::{IdentityVerificationApi, ValidationRequest, ValidationResponse};

use crate::domain::ApiError;

/// Path of the validation endpoint
pub const VALIDATE_PATH: &str = "/validate";

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Validation pipeline
    pub api: Arc<dyn IdentityVerificationApi>,
}

impl AppState {
    /// Wrap a validation pipeline
    pub fn new(api: Arc<dyn IdentityVerificationApi>) -> Self {
        Self { api }
    }
}

/// Routes without middleware
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            VALIDATE_PATH,
            post(validate_tckn)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health_check))
}

/// Handle a validation request.
///
/// The body is decoded by hand so a missing or unusual `Content-Type` does
/// not turn into a rejection. Every decodable body gets a 200 with a verdict.
async fn validate_tckn(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ValidationResponse>, ApiError> {
    let request: ValidationRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "undecodable request body");
        ApiError::InvalidBody
    })?;

    let result = state.api.validate(&request).await;
    Ok(Json(ValidationResponse::from_result(&result)))
}

/// `OPTIONS` reaches here only when the CORS layer is disabled
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "tckn-gateway",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
