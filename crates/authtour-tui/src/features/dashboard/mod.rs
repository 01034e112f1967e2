//! Dashboard tab: account details for the logged-in session.

mod render;

pub use render::render;
