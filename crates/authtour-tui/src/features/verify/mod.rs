//! Verify tab: verification-code entry for the pending registration.

mod render;
mod state;

pub use render::render;
pub use state::VerifyFormState;
