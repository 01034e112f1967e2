//! Interactive demo (default command).

use anyhow::Result;
use authtour_core::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    authtour_tui::run(config).await
}
