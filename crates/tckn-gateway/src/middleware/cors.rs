//! CORS middleware.
//!
//! Wrapper around tower-http CORS with gateway configuration.

use crate::domain::config::CorsConfig;
use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer as TowerCorsLayer};

/// Create CORS layer from gateway config, or `None` when CORS is disabled.
///
/// An enabled `CorsLayer` answers every `OPTIONS` request itself, so a
/// disabled config must leave the router unwrapped.
///
/// Expects a config that passed [`GatewayConfig::validate`]; wildcards
/// together with credentials make tower-http panic.
///
/// [`GatewayConfig::validate`]: crate::domain::config::GatewayConfig::validate
pub fn create_cors_layer(config: &CorsConfig) -> Option<TowerCorsLayer> {
    if !config.enabled {
        return None;
    }

    let mut cors = TowerCorsLayer::new();

    // Configure origins
    if config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    // Configure methods
    if config.allowed_methods.iter().any(|m| m == "*") {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<Method> = config
            .allowed_methods
            .iter()
            .filter_map(|m| m.parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    // Configure headers
    if config.allowed_headers.iter().any(|h| h == "*") {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors = cors.max_age(Duration::from_secs(config.max_age));

    if config.allow_credentials {
        cors = cors.allow_credentials(true);
    }

    Some(cors)
}
