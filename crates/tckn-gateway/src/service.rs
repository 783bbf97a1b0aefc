//! Gateway service: router assembly and server lifecycle.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::info;

use tckn_validator::{IdentityVerificationApi, NviSoapClient, ValidationService};

use crate::domain::{GatewayConfig, GatewayError};
use crate::handlers::{routes, AppState};
use crate::middleware::{create_cors_layer, TracingLayer};

/// Validation gateway
pub struct GatewayService {
    config: GatewayConfig,
    api: Arc<dyn IdentityVerificationApi>,
}

impl GatewayService {
    /// Create a gateway backed by the civil-registry client named in `config`.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;

        let authority = NviSoapClient::new(config.authority.endpoint.clone())
            .map_err(|e| GatewayError::Authority(e.to_string()))?;
        let api = Arc::new(ValidationService::new(Arc::new(authority)));

        Self::with_api(config, api)
    }

    /// Create a gateway over an existing pipeline.
    pub fn with_api(
        config: GatewayConfig,
        api: Arc<dyn IdentityVerificationApi>,
    ) -> Result<Self, GatewayError> {
        config.validate()?;
        Ok(Self { config, api })
    }

    /// Active configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the HTTP router with middleware.
    pub fn build_router(&self) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(TracingLayer::new())
            .option_layer(create_cors_layer(&self.config.cors));

        routes()
            .layer(middleware)
            .with_state(AppState::new(Arc::clone(&self.api)))
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn start<F>(&self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{addr}: {e}")))?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener
            .local_addr()
            .map_err(|e| GatewayError::Bind(e.to_string()))?;
        info!(
            addr = %local_addr,
            endpoint = %self.config.authority.endpoint,
            "Starting TCKN gateway"
        );

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(async move {
                shutdown.await;
                info!("Received shutdown signal");
            })
            .await
            .map_err(|e| GatewayError::Serve(e.to_string()))?;

        info!("TCKN gateway stopped");
        Ok(())
    }
}
