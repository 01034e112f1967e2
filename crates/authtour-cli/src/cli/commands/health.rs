//! Backend health probe.

use anyhow::Result;
use authtour_core::api::AuthClient;
use authtour_core::config::Config;

pub async fn check(config: &Config) -> Result<()> {
    let client = AuthClient::new(config);
    let health = client.healthz().await?;

    println!("{}: {}", client.base_url(), health.status);
    Ok(())
}
