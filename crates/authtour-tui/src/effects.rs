//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn the signup request.
    SubmitSignup {
        task: TaskId,
        email: String,
        password: String,
    },

    /// Spawn the verification request for the pending registration.
    SubmitVerification {
        task: TaskId,
        email: String,
        code: String,
    },

    /// Spawn the login request.
    SubmitLogin {
        task: TaskId,
        email: String,
        password: String,
    },

    /// Write the access token to durable storage.
    PersistToken { token: String },

    /// Remove the stored access token (local logout).
    ClearStoredToken,

    /// Copy text to the system clipboard.
    CopyToClipboard { text: String },
}
