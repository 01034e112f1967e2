//! Application state composition.
//!
//! ```text
//! AppState
//! ├── flow: FlowState          (view, session, pending registration, status)
//! ├── auth: AuthFormsState     (signup + login drafts, focus)
//! ├── verify: VerifyFormState  (verification code draft)
//! ├── tutorial: TutorialState  (scroll, block selection, copy flash)
//! ├── task_seq / tasks         (async request lifecycle, one slot per kind)
//! └── spinner / viewport       (cosmetics and layout bookkeeping)
//! ```
//!
//! The flow state is the pure controller from authtour-core; everything else
//! is presentation-layer state around it.

use authtour_core::config::Config;
use authtour_core::flow::FlowState;

use crate::common::{TaskSeq, Tasks};
use crate::features::auth::AuthFormsState;
use crate::features::tutorial::TutorialState;
use crate::features::verify::VerifyFormState;

/// TUI application state. Mutated only by the reducer.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The view/session state machine.
    pub flow: FlowState,
    /// Signup and login credential drafts.
    pub auth: AuthFormsState,
    /// Verification code draft.
    pub verify: VerifyFormState,
    /// Tutorial scroll/selection state.
    pub tutorial: TutorialState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
    /// Last known terminal size (set from Frame events).
    pub viewport: (u16, u16),
    /// Loaded configuration.
    pub config: Config,
    /// Effective backend base URL (cached for the header).
    pub base_url: String,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let base_url = config.effective_api_base_url();
        Self {
            should_quit: false,
            flow: FlowState::new(),
            auth: AuthFormsState::default(),
            verify: VerifyFormState::default(),
            tutorial: TutorialState::new(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
            viewport: (0, 0),
            config,
            base_url,
        }
    }

    /// Approximate height of the tutorial content pane, for paging.
    pub fn content_height(&self) -> usize {
        // header (2) + tabs (1) + status (1) + hints (1)
        (self.viewport.1 as usize).saturating_sub(5)
    }
}
