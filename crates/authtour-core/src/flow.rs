//! Client-side view/session state machine.
//!
//! This is the pure core of the demo: no I/O happens here. The UI layer
//! issues backend calls and feeds their outcomes back through the
//! `resolve_*` transitions; navigation is gated by `can_enter`. Derived
//! state (pending registration, session) is only committed after a
//! successful response, so no partial-state corruption is possible.

use serde::{Deserialize, Serialize};

use crate::api::{ApiError, User};

/// Success text after signup (the client never surfaces a server-echoed
/// verification code; this fixed text is shown instead).
pub const MSG_SIGNUP_OK: &str = "Account created! Check your email for verification code.";
/// Success text after email verification.
pub const MSG_VERIFY_OK: &str = "Email verified successfully! You can now log in.";
/// Success text after login.
pub const MSG_LOGIN_OK: &str = "Login successful!";
/// Text shown after logout.
pub const MSG_LOGOUT_OK: &str = "Logged out successfully";

/// The single-selection UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum View {
    #[default]
    Tutorial,
    Auth,
    Verify,
    Dashboard,
}

impl View {
    /// All views in tab order.
    pub fn all() -> &'static [View] {
        &[View::Tutorial, View::Auth, View::Verify, View::Dashboard]
    }

    /// Tab label, matching the reference UI.
    pub fn label(&self) -> &'static str {
        match self {
            View::Tutorial => "Tutorial",
            View::Auth => "Demo",
            View::Verify => "Verify",
            View::Dashboard => "Dashboard",
        }
    }
}

/// The email address awaiting verification after signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRegistration {
    pub email: String,
}

/// Authenticated user identity held after login.
pub type Session = User;

/// Severity of a status message (drives rendering only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    Info,
    Error,
}

/// Transient human-readable text shown after an action.
/// Replaced wholesale on each action; no history retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Complete client state driving the tutorial-and-demo UI.
///
/// Owned by a single controller; mutated by one user action at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowState {
    pub view: View,
    pub pending: Option<PendingRegistration>,
    pub session: Option<Session>,
    pub status: Option<StatusMessage>,
}

impl FlowState {
    /// Fresh state: tutorial view, no session, no pending registration.
    /// A previously stored token is deliberately not restored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view.
    pub fn view(&self) -> View {
        self.view
    }

    /// Whether a view is reachable right now.
    ///
    /// `Verify` requires a pending registration; `Dashboard` requires a
    /// session. Everything else is freely reachable.
    pub fn can_enter(&self, view: View) -> bool {
        match view {
            View::Tutorial | View::Auth => true,
            View::Verify => self.pending.is_some(),
            View::Dashboard => self.session.is_some(),
        }
    }

    /// Free navigation. Idempotent; a disallowed target is simply a no-op.
    /// Returns whether the view changed.
    pub fn navigate(&mut self, view: View) -> bool {
        if !self.can_enter(view) || self.view == view {
            return false;
        }
        self.view = view;
        true
    }

    /// Called when a backend request is issued: the previous status message
    /// is cleared so exactly one new message lands on completion.
    pub fn begin_request(&mut self) {
        self.status = None;
    }

    /// Outcome of `POST /api/signup` for `email`.
    pub fn resolve_signup(&mut self, email: &str, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.pending = Some(PendingRegistration {
                    email: email.to_string(),
                });
                self.view = View::Verify;
                self.status = Some(StatusMessage::info(MSG_SIGNUP_OK));
            }
            Err(err) => {
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    /// Outcome of `POST /api/verify-email` for the pending registration.
    pub fn resolve_verification(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.pending = None;
                self.view = View::Auth;
                self.status = Some(StatusMessage::info(MSG_VERIFY_OK));
            }
            Err(err) => {
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    /// Outcome of `POST /api/login`. The caller persists the access token
    /// separately; only the identity lands here.
    pub fn resolve_login(&mut self, result: Result<Session, ApiError>) {
        match result {
            Ok(user) => {
                self.session = Some(user);
                self.view = View::Dashboard;
                self.status = Some(StatusMessage::info(MSG_LOGIN_OK));
            }
            Err(err) => {
                self.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    /// Local logout: clears session and pending registration and returns to
    /// the tutorial. No backend call is made. Idempotent.
    pub fn logout(&mut self) {
        self.session = None;
        self.pending = None;
        self.view = View::Tutorial;
        self.status = Some(StatusMessage::info(MSG_LOGOUT_OK));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_rejected(detail: &str) -> ApiError {
        ApiError::ServerRejected {
            status: 400,
            detail: detail.to_string(),
        }
    }

    async fn transport_failed() -> ApiError {
        // A refused connection is the cheapest real transport error.
        reqwest::Client::new()
            .get("http://127.0.0.1:9/unreachable")
            .send()
            .await
            .expect_err("connection should be refused")
            .into()
    }

    fn demo_user() -> Session {
        Session {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            is_verified: true,
            created_at: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_tutorial_without_session() {
        let state = FlowState::new();
        assert_eq!(state.view(), View::Tutorial);
        assert!(state.session.is_none());
        assert!(state.pending.is_none());
        assert!(state.status.is_none());
    }

    #[test]
    fn test_signup_success_sets_pending_and_enters_verify() {
        let mut state = FlowState::new();
        state.navigate(View::Auth);

        state.begin_request();
        state.resolve_signup("a@b.com", Ok(()));

        assert_eq!(state.pending.as_ref().unwrap().email, "a@b.com");
        assert_eq!(state.view(), View::Verify);
        assert_eq!(state.status.as_ref().unwrap().text, MSG_SIGNUP_OK);
    }

    #[test]
    fn test_signup_rejection_stays_in_auth_with_detail() {
        let mut state = FlowState::new();
        state.navigate(View::Auth);

        state.begin_request();
        state.resolve_signup("a@b.com", Err(server_rejected("X")));

        assert_eq!(state.view(), View::Auth);
        assert!(state.pending.is_none());
        let status = state.status.as_ref().unwrap();
        assert_eq!(status.text, "X");
        assert_eq!(status.kind, StatusKind::Error);
    }

    #[tokio::test]
    async fn test_transport_failure_shows_network_error_text() {
        let mut state = FlowState::new();
        state.navigate(View::Auth);

        state.begin_request();
        let err = transport_failed().await;
        state.resolve_signup("a@b.com", Err(err));

        assert_eq!(state.view(), View::Auth);
        assert_eq!(
            state.status.as_ref().unwrap().text,
            "Network error occurred"
        );
    }

    #[test]
    fn test_verify_unreachable_without_pending() {
        let mut state = FlowState::new();
        assert!(!state.can_enter(View::Verify));
        assert!(!state.navigate(View::Verify));
        assert_eq!(state.view(), View::Tutorial);
    }

    #[test]
    fn test_dashboard_unreachable_without_session() {
        let mut state = FlowState::new();
        assert!(!state.can_enter(View::Dashboard));
        assert!(!state.navigate(View::Dashboard));
        assert_eq!(state.view(), View::Tutorial);
    }

    #[test]
    fn test_verification_success_returns_to_auth_and_clears_pending() {
        let mut state = FlowState::new();
        state.navigate(View::Auth);
        state.resolve_signup("a@b.com", Ok(()));

        state.begin_request();
        state.resolve_verification(Ok(()));

        assert_eq!(state.view(), View::Auth);
        assert!(state.pending.is_none());
        assert_eq!(state.status.as_ref().unwrap().text, MSG_VERIFY_OK);
        // Verify is no longer reachable once the registration resolved.
        assert!(!state.can_enter(View::Verify));
    }

    #[test]
    fn test_verification_rejection_stays_in_verify() {
        let mut state = FlowState::new();
        state.navigate(View::Auth);
        state.resolve_signup("a@b.com", Ok(()));

        state.begin_request();
        state.resolve_verification(Err(server_rejected("Invalid verification code")));

        assert_eq!(state.view(), View::Verify);
        assert!(state.pending.is_some());
        assert_eq!(
            state.status.as_ref().unwrap().text,
            "Invalid verification code"
        );
    }

    #[test]
    fn test_login_success_creates_session_and_enters_dashboard() {
        let mut state = FlowState::new();
        state.navigate(View::Auth);

        state.begin_request();
        state.resolve_login(Ok(demo_user()));

        assert_eq!(state.session, Some(demo_user()));
        assert_eq!(state.view(), View::Dashboard);
        assert_eq!(state.status.as_ref().unwrap().text, MSG_LOGIN_OK);
    }

    #[test]
    fn test_login_rejection_stays_in_auth() {
        let mut state = FlowState::new();
        state.navigate(View::Auth);

        state.begin_request();
        state.resolve_login(Err(server_rejected(
            "Please verify your email before logging in",
        )));

        assert_eq!(state.view(), View::Auth);
        assert!(state.session.is_none());
        assert_eq!(
            state.status.as_ref().unwrap().text,
            "Please verify your email before logging in"
        );
    }

    #[test]
    fn test_begin_request_clears_previous_status() {
        let mut state = FlowState::new();
        state.navigate(View::Auth);
        state.resolve_login(Err(server_rejected("Invalid email or password")));
        assert!(state.status.is_some());

        state.begin_request();
        assert!(state.status.is_none());
    }

    #[test]
    fn test_logout_resets_everything() {
        let mut state = FlowState::new();
        state.navigate(View::Auth);
        state.resolve_signup("a@b.com", Ok(()));
        state.resolve_login(Ok(demo_user()));
        assert_eq!(state.view(), View::Dashboard);

        state.logout();

        assert!(state.session.is_none());
        assert!(state.pending.is_none());
        assert_eq!(state.view(), View::Tutorial);
        assert_eq!(state.status.as_ref().unwrap().text, MSG_LOGOUT_OK);
        assert!(!state.can_enter(View::Verify));
        assert!(!state.can_enter(View::Dashboard));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut state = FlowState::new();
        state.resolve_login(Ok(demo_user()));

        state.logout();
        let after_once = state.clone();
        state.logout();

        assert_eq!(state.view(), after_once.view());
        assert_eq!(state.session, after_once.session);
        assert_eq!(state.pending, after_once.pending);
        assert_eq!(state.status, after_once.status);
    }

    #[test]
    fn test_navigation_is_idempotent() {
        let mut state = FlowState::new();
        assert!(state.navigate(View::Auth));
        assert!(!state.navigate(View::Auth));
        assert_eq!(state.view(), View::Auth);
    }
}
