//! Configuration management for authtour.
//!
//! Loads configuration from ${AUTHTOUR_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured API base URL.
pub const API_BASE_URL_ENV: &str = "AUTHTOUR_API_BASE_URL";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// This ensures new comments/sections from the template are always present,
/// while preserving user's customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::{DocumentMut, Item};

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
        for (key, value) in source.iter() {
            match value {
                Item::Value(v) => {
                    target[key] = Item::Value(v.clone());
                }
                Item::Table(src_table) => {
                    if let Some(Item::Table(target_table)) = target.get_mut(key) {
                        merge_items(target_table, src_table);
                    } else {
                        target[key] = Item::Table(src_table.clone());
                    }
                }
                Item::ArrayOfTables(src_arr) => {
                    target[key] = Item::ArrayOfTables(src_arr.clone());
                }
                Item::None => {}
            }
        }
    }

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

pub mod paths {
    //! Path resolution for authtour configuration and data directories.
    //!
    //! AUTHTOUR_HOME resolution order:
    //! 1. AUTHTOUR_HOME environment variable (if set)
    //! 2. ~/.config/authtour (default)

    use std::path::PathBuf;

    /// Returns the authtour home directory.
    ///
    /// Checks AUTHTOUR_HOME env var first, falls back to ~/.config/authtour
    pub fn authtour_home() -> PathBuf {
        if let Ok(home) = std::env::var("AUTHTOUR_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("authtour"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        authtour_home().join("config.toml")
    }

    /// Returns the path to the stored session token file.
    pub fn session_path() -> PathBuf {
        authtour_home().join("session.json")
    }

    /// Returns the directory for log files.
    pub fn logs_dir() -> PathBuf {
        authtour_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the authentication backend.
    pub api_base_url: String,
}

impl Config {
    /// Documented local-development fallback for the backend base URL.
    pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the effective API base URL.
    ///
    /// Resolution order:
    /// 1. AUTHTOUR_API_BASE_URL env var (if set and non-empty)
    /// 2. api_base_url from the config file (if non-empty)
    /// 3. Default: `http://localhost:8001`
    ///
    /// Trailing slashes are stripped so callers can join paths directly.
    pub fn effective_api_base_url(&self) -> String {
        if let Ok(url) = std::env::var(API_BASE_URL_ENV) {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                return trimmed.trim_end_matches('/').to_string();
            }
        }

        let configured = self.api_base_url.trim();
        if configured.is_empty() {
            Self::DEFAULT_API_BASE_URL.to_string()
        } else {
            configured.trim_end_matches('/').to_string()
        }
    }

    /// Saves only the api_base_url field to the config file.
    ///
    /// Creates the file if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    pub fn save_api_base_url(url: &str) -> Result<()> {
        Self::save_api_base_url_to(&paths::config_path(), url)
    }

    /// Saves only the api_base_url field to a specific config file path.
    ///
    /// Creates the file with the default template if it doesn't exist.
    /// If the file exists, merges user values into the latest template.
    pub fn save_api_base_url_to(path: &Path, url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["api_base_url"] = value(url);

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
