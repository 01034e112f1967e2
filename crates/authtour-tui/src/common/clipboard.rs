//! System clipboard access.

use anyhow::{Context, Result};

/// Thin wrapper over the system clipboard.
///
/// A fresh handle per copy: some platforms invalidate long-lived handles
/// when other applications take clipboard ownership.
pub struct Clipboard;

impl Clipboard {
    pub fn copy(text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
        clipboard
            .set_text(text.to_string())
            .context("Failed to write clipboard")?;
        Ok(())
    }
}
