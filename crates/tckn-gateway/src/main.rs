//! TCKN gateway binary.

use anyhow::{Context, Result};
use tracing::{error, info};

use tckn_gateway::{init_tracing, GatewayConfig, GatewayService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = GatewayConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to initialize logging")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.http.port,
        "TCKN gateway starting"
    );

    let service = GatewayService::new(config).context("failed to build gateway")?;

    if let Err(e) = service.start(shutdown_signal()).await {
        error!(error = %e, "gateway terminated with error");
        return Err(e.into());
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
