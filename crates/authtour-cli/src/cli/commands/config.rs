//! Config management commands.

use anyhow::{Context, Result};
use authtour_core::config::{Config, paths};

pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let config_path = paths::config_path();
    Config::init(&config_path)?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

pub fn set_url(url: &str) -> Result<()> {
    // Reject junk before it lands in the config file
    let parsed = url::Url::parse(url).with_context(|| format!("Invalid URL: {url}"))?;
    anyhow::ensure!(
        matches!(parsed.scheme(), "http" | "https"),
        "Unsupported URL scheme: {}",
        parsed.scheme()
    );

    Config::save_api_base_url(url.trim_end_matches('/'))?;
    println!("Backend base URL set to {url}");
    Ok(())
}
