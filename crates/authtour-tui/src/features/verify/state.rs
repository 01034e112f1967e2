//! Form state for the verify tab.

use crate::common::TextField;

/// Verification code draft.
#[derive(Debug, Default, Clone)]
pub struct VerifyFormState {
    pub code: TextField,
}

impl VerifyFormState {
    pub fn clear(&mut self) {
        self.code.clear();
    }
}
