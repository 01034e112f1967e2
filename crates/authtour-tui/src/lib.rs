//! Full-screen TUI for the authentication tutorial and live demo.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod markdown;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use authtour_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the interactive tutorial-and-demo loop.
pub async fn run(config: &Config) -> Result<()> {
    // The demo requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The demo requires a terminal.\n\
             Use `authtour signup`, `authtour login`, ... for non-interactive use."
        );
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "Authtour")?;
    writeln!(err, "Backend: {}", config.effective_api_base_url())?;
    err.flush()?;

    let mut runtime = TuiRuntime::new(config.clone())?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
