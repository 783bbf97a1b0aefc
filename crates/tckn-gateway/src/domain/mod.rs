//! Gateway domain: configuration and error types.

pub mod config;
pub mod error;

pub use config::{
    AuthorityConfig, ConfigError, CorsConfig, GatewayConfig, HttpConfig, LoggingConfig,
};
pub use error::{ApiError, GatewayError};
