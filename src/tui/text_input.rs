use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left};

/// Single-line text field with a grapheme-aware cursor (byte offset)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    buffer: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        TextInput::default()
    }

    /// Field pre-filled with `text`, cursor at the end
    pub fn with_text(text: &str) -> Self {
        let buffer = single_line(text);
        let cursor = buffer.len();
        TextInput { buffer, cursor }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Text left and right of the cursor
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.cursor)
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let c = if is_line_break_or_tab(c) { ' ' } else { c };
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text, newlines and tabs flattened to spaces
    pub fn insert_str(&mut self, s: &str) {
        let s = single_line(s);
        self.buffer.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    /// Delete the grapheme before the cursor. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        match prev_grapheme_boundary(&self.buffer, self.cursor) {
            Some(start) => {
                self.buffer.replace_range(start..self.cursor, "");
                self.cursor = start;
                true
            }
            None => false,
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) -> bool {
        match next_grapheme_boundary(&self.buffer, self.cursor) {
            Some(end) => {
                self.buffer.replace_range(self.cursor..end, "");
                true
            }
            None => false,
        }
    }

    /// Delete back to the start of the previous word (Ctrl-W)
    pub fn delete_word_back(&mut self) -> bool {
        let start = word_boundary_left(&self.buffer, self.cursor);
        if start == self.cursor {
            return false;
        }
        self.buffer.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    /// Delete from the start of the line to the cursor (Ctrl-U)
    pub fn delete_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.buffer.replace_range(..self.cursor, "");
        self.cursor = 0;
        true
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }
}

/// `s` with line breaks and tabs replaced by spaces
pub fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if is_line_break_or_tab(c) { ' ' } else { c })
        .collect()
}

fn is_line_break_or_tab(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_cursor() {
        let mut input = TextInput::new();
        for c in "milk".chars() {
            input.insert_char(c);
        }
        input.move_home();
        input.insert_char('#');
        assert_eq!(input.text(), "#milk");
        assert_eq!(input.split_at_cursor(), ("#", "milk"));
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut input = TextInput::with_text("cafe\u{0301}");
        assert!(input.backspace());
        assert_eq!(input.text(), "caf");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::with_text("a");
        input.move_home();
        assert!(!input.backspace());
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn delete_under_cursor() {
        let mut input = TextInput::with_text("ab");
        input.move_left();
        assert!(input.delete());
        assert_eq!(input.text(), "a");
        assert!(!input.delete());
    }

    #[test]
    fn word_and_line_deletion() {
        let mut input = TextInput::with_text("walk the dog");
        assert!(input.delete_word_back());
        assert_eq!(input.text(), "walk the ");
        assert!(input.delete_to_start());
        assert_eq!(input.text(), "");
        assert!(!input.delete_to_start());
    }

    #[test]
    fn movement_clamps_at_edges() {
        let mut input = TextInput::with_text("牛b");
        input.move_right();
        assert_eq!(input.cursor(), 4);
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.move_end();
        assert_eq!(input.split_at_cursor(), ("牛b", ""));
    }

    #[test]
    fn pasted_newlines_are_flattened() {
        let mut input = TextInput::new();
        input.insert_str("one\ntwo\tthree");
        assert_eq!(input.text(), "one two three");
        assert_eq!(input.cursor(), input.text().len());
    }

    #[test]
    fn typed_and_pasted_breaks_flatten_alike() {
        let mut typed = TextInput::new();
        for c in "a\r\nb\tc".chars() {
            typed.insert_char(c);
        }
        let mut pasted = TextInput::new();
        pasted.insert_str("a\r\nb\tc");
        assert_eq!(typed.text(), "a  b c");
        assert_eq!(typed, pasted);
    }
}
