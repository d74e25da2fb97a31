//! Contract between the engine and the host's text widget.

/// The editable document the coordinator reads prefixes from and writes
/// accepted completions into.
///
/// Offsets are byte offsets into `current_text()` and must fall on `char`
/// boundaries.
pub trait TextBuffer {
    fn current_text(&self) -> &str;
    fn caret_offset(&self) -> usize;
    fn replace_range(&mut self, start: usize, end: usize, text: &str);
    fn caret_to(&mut self, offset: usize);
}

/// In-memory [`TextBuffer`] for tests, simulators and hosts without a widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBuffer {
    text: String,
    caret: usize,
}

impl MemoryBuffer {
    /// Buffer holding `text` with the caret at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.len();
        Self { text, caret }
    }

    pub fn with_caret(text: impl Into<String>, caret: usize) -> Self {
        let mut buf = Self::new(text);
        buf.caret_to(caret);
        buf
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Type `s` at the caret.
    pub fn insert(&mut self, s: &str) {
        self.text.insert_str(self.caret, s);
        self.caret += s.len();
    }

    /// Delete the character before the caret. Returns `false` at offset 0.
    pub fn backspace(&mut self) -> bool {
        let Some(c) = self.text[..self.caret].chars().next_back() else {
            return false;
        };
        let start = self.caret - c.len_utf8();
        self.text.replace_range(start..self.caret, "");
        self.caret = start;
        true
    }

    /// Move the caret by `delta` characters, stopping at either end.
    pub fn move_caret(&mut self, delta: isize) {
        let mut caret = self.caret;
        if delta < 0 {
            for c in self.text[..caret].chars().rev().take(delta.unsigned_abs()) {
                caret -= c.len_utf8();
            }
        } else {
            for c in self.text[caret..].chars().take(delta.unsigned_abs()) {
                caret += c.len_utf8();
            }
        }
        self.caret = caret;
    }
}

impl TextBuffer for MemoryBuffer {
    fn current_text(&self) -> &str {
        &self.text
    }

    fn caret_offset(&self) -> usize {
        self.caret
    }

    fn replace_range(&mut self, start: usize, end: usize, text: &str) {
        self.text.replace_range(start..end, text);
        if self.caret > self.text.len() || !self.text.is_char_boundary(self.caret) {
            self.caret = start + text.len();
        }
    }

    fn caret_to(&mut self, offset: usize) {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        self.caret = offset;
    }
}
