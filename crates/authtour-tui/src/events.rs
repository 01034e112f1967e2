//! UI event types.
//!
//! Everything that can change state flows through here: terminal input,
//! ticks, task lifecycle notifications, and backend call results delivered
//! via the runtime inbox.

use authtour_core::api::{ApiError, LoginResponse};

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (spinner animation, copy-flash timeout).
    Tick,
    /// Current terminal dimensions, prepended every loop iteration.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(crossterm::event::Event),

    /// An async task slot was claimed.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// An async task finished; the boxed event carries its outcome.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Outcome of a signup request for `email`.
    SignupResult {
        email: String,
        result: Result<(), ApiError>,
    },
    /// Outcome of a verification request.
    VerifyResult { result: Result<(), ApiError> },
    /// Outcome of a login request (carries the token to persist).
    LoginResult {
        result: Result<LoginResponse, ApiError>,
    },

    /// A code block was copied to the clipboard.
    ClipboardCopied,
}
