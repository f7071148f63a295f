//! Server health check.

use anyhow::bail;
use log::info;
use tzl_core::client::ZoningClient;
use tzl_core::config::ClientConfig;

pub async fn run_health(config: ClientConfig) -> anyhow::Result<()> {
    let client = ZoningClient::new(config)?;
    let url = client.config().health_url();
    info!("GET {}", url);

    let health = client.health().await?;
    if !health.is_healthy() {
        bail!("{} reports status {:?}", url, health.status);
    }
    println!("{}: {}", url, health.status);
    Ok(())
}
