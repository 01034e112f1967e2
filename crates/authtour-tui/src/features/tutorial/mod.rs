//! Tutorial tab: scrollable markdown steps with copyable code blocks.

mod render;
mod state;

pub use render::render;
pub use state::TutorialState;
