//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime
//! spawns them and sends results to the inbox; they never mutate state.

use authtour_core::api::AuthClient;

use crate::events::UiEvent;

pub async fn submit_signup(client: AuthClient, email: String, password: String) -> UiEvent {
    let result = client.signup(&email, &password).await.map(|ack| {
        // The acknowledgement may carry a server message (and demo backends
        // echo the verification code in it); log it, never display it.
        if let Some(message) = ack.message {
            tracing::debug!(%message, "signup acknowledged");
        }
    });
    UiEvent::SignupResult { email, result }
}

pub async fn submit_verification(client: AuthClient, email: String, code: String) -> UiEvent {
    let result = client.verify_email(&email, &code).await.map(|ack| {
        if let Some(message) = ack.message {
            tracing::debug!(%message, "verification acknowledged");
        }
    });
    UiEvent::VerifyResult { result }
}

pub async fn submit_login(client: AuthClient, email: String, password: String) -> UiEvent {
    let result = client.login(&email, &password).await;
    UiEvent::LoginResult { result }
}
