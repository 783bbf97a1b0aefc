//! Gateway configuration with validation.
//!
//! Defaults reproduce the deployed service. Environment overrides are read
//! once at startup through [`GatewayConfig::from_env`].

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tckn_validator::NVI_ENDPOINT;

/// Origins allowed to call the gateway from a browser.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 5] = [
    "https://extensions.shopifycdn.com",
    "https://shopiapp-dev.myshopify.com",
    "https://admin.shopify.com",
    "https://shopify.com",
    "http://localhost:3000",
];

const DEFAULT_ALLOWED_METHODS: [&str; 5] = ["POST", "GET", "OPTIONS", "PUT", "DELETE"];

const DEFAULT_ALLOWED_HEADERS: [&str; 14] = [
    "Accept",
    "Content-Type",
    "Content-Length",
    "Accept-Encoding",
    "X-CSRF-Token",
    "Authorization",
    "Cache-Control",
    "Pragma",
    "X-Requested-With",
    "X-HTTP-Method-Override",
    "If-Match",
    "If-None-Match",
    "If-Modified-Since",
    "If-Unmodified-Since",
];

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Civil-registry service configuration
    pub authority: AuthorityConfig,
    /// Log output configuration
    pub logging: LoggingConfig,
}

impl GatewayConfig {
    /// Build configuration from process environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: HTTP port (default: 8080)
    /// - `TCKN_ALLOWED_ORIGINS`: comma-separated CORS origins
    /// - `TCKN_NVI_ENDPOINT`: civil-registry SOAP endpoint
    /// - `TCKN_LOG_LEVEL`: log filter when `RUST_LOG` is unset (default: info)
    /// - `TCKN_JSON_LOGS`: `true`/`1` for JSON log lines (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            config.http.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(origins) = lookup("TCKN_ALLOWED_ORIGINS") {
            config.cors.allowed_origins = parse_list(&origins);
        }

        if let Some(endpoint) = lookup("TCKN_NVI_ENDPOINT").filter(|e| !e.trim().is_empty()) {
            config.authority.endpoint = endpoint.trim().to_string();
        }

        if let Some(level) = lookup("TCKN_LOG_LEVEL").filter(|l| !l.trim().is_empty()) {
            config.logging.level = level.trim().to_string();
        }

        if let Some(json) = lookup("TCKN_JSON_LOGS") {
            config.logging.json = matches!(json.trim(), "1" | "true" | "TRUE" | "yes");
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.authority.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::Invalid(
                "authority endpoint cannot be empty".into(),
            ));
        }
        let url = Url::parse(endpoint).map_err(|e| {
            ConfigError::Invalid(format!("authority endpoint {endpoint:?}: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "authority endpoint {endpoint:?} must use http or https"
            )));
        }

        let cors = &self.cors;
        if cors.enabled && cors.allow_credentials {
            // the CORS layer refuses wildcards alongside credentials
            for (field, values) in [
                ("allowed_origins", &cors.allowed_origins),
                ("allowed_methods", &cors.allowed_methods),
                ("allowed_headers", &cors.allowed_headers),
            ] {
                if values.iter().any(|v| v == "*") {
                    return Err(ConfigError::InvalidCors(format!(
                        "wildcard in {field} cannot be combined with credentials"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8080)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 8080,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    pub allowed_methods: Vec<String>,
    /// Allowed headers
    pub allowed_headers: Vec<String>,
    /// Max age for preflight cache, in seconds
    pub max_age: u64,
    /// Allow credentials
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
            allowed_methods: DEFAULT_ALLOWED_METHODS.iter().map(|s| s.to_string()).collect(),
            allowed_headers: DEFAULT_ALLOWED_HEADERS.iter().map(|s| s.to_string()).collect(),
            max_age: 3600,
            allow_credentials: true,
        }
    }
}

/// Civil-registry service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorityConfig {
    /// SOAP endpoint URL
    pub endpoint: String,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            endpoint: NVI_ENDPOINT.to_string(),
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Port is not a number in 0..=65535
    #[error("invalid port: {0}")]
    InvalidPort(String),
    /// CORS settings the layer cannot honour
    #[error("invalid CORS configuration: {0}")]
    InvalidCors(String),
    /// General configuration error
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Split a comma-separated list, dropping blanks.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
