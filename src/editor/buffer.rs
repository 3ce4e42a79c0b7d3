use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A one-line text buffer with a cursor.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    /// Create a buffer holding `text` with the cursor at the end.
    #[cfg(test)]
    pub fn from_text(text: &str) -> Self {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor byte offset.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a character at the cursor. Control characters are ignored.
    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert pasted text at the cursor; line breaks become spaces.
    pub fn insert_str(&mut self, s: &str) {
        for ch in s.chars() {
            if ch == '\n' || ch == '\r' || ch == '\t' {
                self.insert_char(' ');
            } else {
                self.insert_char(ch);
            }
        }
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        let Some(prev) = self.text[..self.cursor].chars().next_back() else {
            return false;
        };
        self.cursor -= prev.len_utf8();
        self.text.remove(self.cursor);
        true
    }

    /// Delete the character at the cursor (Delete key).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub const fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub const fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Move cursor to the start of the previous word (Ctrl+Left).
    pub fn move_word_left(&mut self) {
        let before = self.text[..self.cursor].trim_end();
        self.cursor = before
            .rfind(|c: char| !c.is_alphanumeric() && c != '_')
            .map_or(0, |i| i + before[i..].chars().next().map_or(1, char::len_utf8));
    }

    /// Move cursor past the current word and the gap after it (Ctrl+Right).
    pub fn move_word_right(&mut self) {
        let after = &self.text[self.cursor..];
        let word_end = after
            .find(|c: char| !c.is_alphanumeric() && c != '_')
            .unwrap_or(after.len());
        let rest = &after[word_end..];
        let gap_end = rest
            .find(|c: char| c.is_alphanumeric() || c == '_')
            .unwrap_or(rest.len());
        self.cursor += word_end + gap_end;
    }

    /// Place the cursor at display column `col`, clamped to the text.
    pub fn move_to_column(&mut self, col: usize) {
        let mut width = 0;
        let mut cursor = self.text.len();
        for (idx, ch) in self.text.char_indices() {
            if width >= col {
                cursor = idx;
                break;
            }
            width += ch.width().unwrap_or(0);
        }
        self.cursor = cursor;
    }

    /// Drop all text.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// The slice of text to show in a field `width` columns wide, and the
    /// cursor's column inside it. Scrolls horizontally so the cursor stays
    /// visible.
    pub fn visible(&self, width: usize) -> (&str, usize) {
        if width == 0 {
            return ("", 0);
        }
        let cursor_col: usize = self.text[..self.cursor]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum();
        // Keep one column free for the cursor itself.
        let mut skip_cols = (cursor_col + 1).saturating_sub(width);
        let mut start = 0;
        for (idx, ch) in self.text.char_indices() {
            if skip_cols == 0 {
                start = idx;
                break;
            }
            let w = ch.width().unwrap_or(0);
            skip_cols = skip_cols.saturating_sub(w);
            start = idx + ch.len_utf8();
        }
        let shown_before: usize = self.text[start..self.cursor]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum();
        (&self.text[start..], shown_before)
    }

    /// Display column in the whole text for a click at `col` inside a field
    /// `width` columns wide.
    pub fn column_for_click(&self, width: usize, col: usize) -> usize {
        let (shown, _) = self.visible(width);
        let hidden = &self.text[..self.text.len() - shown.len()];
        hidden.width() + col
    }
}
