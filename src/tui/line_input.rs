use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_start_before};

/// Single-line text buffer with a grapheme-aware cursor (byte offset).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    text: String,
    cursor: usize,
}

impl LineInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text; line breaks become spaces.
    pub fn insert_str(&mut self, s: &str) {
        let clean: String = s
            .chars()
            .filter(|&c| c != '\r')
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(start) = prev_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if let Some(end) = next_grapheme_boundary(&self.text, self.cursor) {
            self.text.replace_range(self.cursor..end, "");
        }
    }

    pub fn delete_word_back(&mut self) {
        let start = word_start_before(&self.text, self.cursor);
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn move_left(&mut self) {
        if let Some(pos) = prev_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = pos;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(pos) = next_grapheme_boundary(&self.text, self.cursor) {
            self.cursor = pos;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Text before and after the cursor
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> LineInput {
        let mut input = LineInput::default();
        for c in s.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn typing_and_backspace() {
        let mut input = typed("tea");
        input.backspace();
        assert_eq!(input.text(), "te");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut input = typed("cafe\u{0301}");
        input.backspace();
        assert_eq!(input.text(), "caf");
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = typed("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.text(), "abc");
        assert_eq!(input.split_at_cursor(), ("ab", "c"));
    }

    #[test]
    fn delete_forward_and_home_end() {
        let mut input = typed("xyz");
        input.home();
        input.delete();
        assert_eq!(input.text(), "yz");
        input.end();
        input.delete();
        assert_eq!(input.text(), "yz");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn delete_word_back() {
        let mut input = typed("review pull request");
        input.delete_word_back();
        assert_eq!(input.text(), "review pull ");
        input.delete_word_back();
        assert_eq!(input.text(), "review ");
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut input = typed("a");
        input.insert_str("b\r\nc");
        assert_eq!(input.text(), "ab c");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut input = typed("   ");
        input.clear();
        assert_eq!(input, LineInput::default());
    }
}
