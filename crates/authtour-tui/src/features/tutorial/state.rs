//! Tutorial tab state: scroll position, code-block selection, copy flash.

use std::cell::Cell;
use std::time::{Duration, Instant};

use authtour_core::tutorial::{self, CodeBlock};

/// How long the "copied!" confirmation stays visible.
const COPY_FLASH: Duration = Duration::from_secs(2);

#[derive(Debug)]
pub struct TutorialState {
    /// Scroll offset in rendered lines.
    pub scroll: usize,
    /// Index of the selected code block (across all steps).
    pub selected_block: usize,
    /// When the selected block was last copied; drives the flash.
    copied_at: Option<Instant>,
    /// Code blocks across the whole tutorial, in reading order.
    pub blocks: Vec<CodeBlock>,
    /// Total rendered line count, set during render (depends on width).
    pub line_count: Cell<usize>,
}

impl Default for TutorialState {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorialState {
    pub fn new() -> Self {
        Self {
            scroll: 0,
            selected_block: 0,
            copied_at: None,
            blocks: tutorial::all_code_blocks(),
            line_count: Cell::new(0),
        }
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize, visible: usize) {
        let max = self.line_count.get().saturating_sub(visible);
        self.scroll = (self.scroll + n).min(max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self, visible: usize) {
        self.scroll = self.line_count.get().saturating_sub(visible);
    }

    pub fn select_next_block(&mut self) {
        if !self.blocks.is_empty() {
            self.selected_block = (self.selected_block + 1) % self.blocks.len();
        }
    }

    pub fn select_prev_block(&mut self) {
        if !self.blocks.is_empty() {
            self.selected_block = self
                .selected_block
                .checked_sub(1)
                .unwrap_or(self.blocks.len() - 1);
        }
    }

    /// Content of the selected code block, if any exist.
    pub fn selected_code(&self) -> Option<&str> {
        self.blocks
            .get(self.selected_block)
            .map(|block| block.code.as_str())
    }

    pub fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    /// Whether the copy confirmation is currently showing.
    pub fn copied(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Clears the copy confirmation once the flash duration elapsed.
    /// Called on every tick; purely cosmetic.
    pub fn check_copy_timeout(&mut self) {
        if let Some(at) = self.copied_at
            && at.elapsed() >= COPY_FLASH
        {
            self.copied_at = None;
        }
    }
}
