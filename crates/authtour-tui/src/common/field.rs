//! Single-line text field with grapheme-aware editing.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Editable single-line input. The cursor is a byte offset that always sits
/// on a grapheme boundary.
#[derive(Debug, Default, Clone)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Inserts pasted text, dropping control characters and line breaks.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some((start, _)) = self.value[..self.cursor].grapheme_indices(true).next_back() {
            self.value.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    pub fn move_left(&mut self) {
        if let Some((start, _)) = self.value[..self.cursor].grapheme_indices(true).next_back() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(g) = self.value[self.cursor..].graphemes(true).next() {
            self.cursor += g.len();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Display column of the cursor (for placing the terminal cursor).
    pub fn cursor_col(&self) -> usize {
        self.value[..self.cursor].width()
    }

    /// Masked rendering for password fields: one bullet per grapheme.
    pub fn masked(&self) -> String {
        "•".repeat(self.value.graphemes(true).count())
    }
}
