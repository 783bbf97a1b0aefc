//! # TCKN Gateway
//!
//! HTTP surface for the two-stage TCKN validator.
//!
//! ## Routes
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `POST` | `/validate` | `200 {"valid": bool, "error"?: string}` or `400 Invalid request body` |
//! | `OPTIONS` | `/validate` | `200`, CORS preflight |
//! | other | `/validate` | `405 Method not allowed` |
//! | `GET` | `/health` | `200 {"status": "healthy", ...}` |
//!
//! ## Middleware Stack
//!
//! ```text
//! Request → Tracing (span + x-request-id) → CORS → Handler
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod handlers;
pub mod middleware;
pub mod service;
pub mod telemetry;

pub use domain::{ApiError, ConfigError, CorsConfig, GatewayConfig, GatewayError};
pub use handlers::{AppState, VALIDATE_PATH};
pub use service::GatewayService;
pub use telemetry::init_tracing;
