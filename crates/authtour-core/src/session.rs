//! Session token storage and retrieval.
//!
//! Stores the access token in `<home>/session.json` with restricted
//! permissions (0600) under the fixed key `token`. The token is never logged
//! in full. Logout removes the file; there is no server-side logout call.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Stored session structure.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    /// Access token issued by the login endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Stores the access token at the default session path.
pub fn store_token(token: &str) -> Result<()> {
    store_token_at(&paths::session_path(), token)
}

/// Stores the access token at a specific path.
pub fn store_token_at(path: &Path, token: &str) -> Result<()> {
    let session = SessionFile {
        token: Some(token.to_string()),
    };
    let contents =
        serde_json::to_string_pretty(&session).context("Failed to serialize session")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    // Write with restricted permissions
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)
            .with_context(|| format!("Failed to open {} for writing", path.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    #[cfg(not(unix))]
    {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    tracing::debug!(path = %path.display(), "stored session token");
    Ok(())
}

/// Loads the stored access token from the default session path.
pub fn load_token() -> Result<Option<String>> {
    load_token_from(&paths::session_path())
}

/// Loads the stored access token from a specific path.
/// Returns `None` if the file doesn't exist or holds no token.
pub fn load_token_from(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session from {}", path.display()))?;
    let session: SessionFile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse session from {}", path.display()))?;

    Ok(session.token.filter(|t| !t.is_empty()))
}

/// Removes the stored token at the default session path.
/// Returns whether a token was present.
pub fn clear_token() -> Result<bool> {
    clear_token_at(&paths::session_path())
}

/// Removes the stored token at a specific path.
pub fn clear_token_at(path: &Path) -> Result<bool> {
    let had_token = load_token_from(path)?.is_some();
    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    tracing::debug!(path = %path.display(), had_token, "cleared session token");
    Ok(had_token)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_store_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        store_token_at(&path, "tok-abc").unwrap();

        let loaded = load_token_from(&path).unwrap();
        assert_eq!(loaded.as_deref(), Some("tok-abc"));
    }

    #[test]
    fn test_token_stored_under_fixed_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        store_token_at(&path, "tok-abc").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(json["token"], "tok-abc");
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        assert!(load_token_from(&path).unwrap().is_none());
    }

    #[test]
    fn test_clear_reports_presence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        store_token_at(&path, "tok-abc").unwrap();

        assert!(clear_token_at(&path).unwrap());
        assert!(!path.exists());
        // Second clear is a no-op
        assert!(!clear_token_at(&path).unwrap());
    }

    #[test]
    fn test_store_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        store_token_at(&path, "tok-abc").unwrap();
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_permissions_restricted() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        store_token_at(&path, "tok-abc").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
