//! Single-line expression buffer with a char-index cursor.
//!
//! The cursor always satisfies `0 <= cursor <= len` in chars; byte
//! offsets are derived at the edit point so multi-byte characters (π)
//! stay intact.

/// The editable expression and its cursor.
#[derive(Debug, Clone, Default)]
pub struct ExprBuffer {
    text: String,
    cursor: usize,
}

impl ExprBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts a string at the cursor, advancing past it.
    pub fn insert_str(&mut self, insertion: &str) {
        if insertion.is_empty() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert_str(byte_idx, insertion);
        self.cursor += insertion.chars().count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Deletes the char before the cursor; no-op at position 0.
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len_chars());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len_chars();
    }

    /// Steps the cursor back by `n`, clamped at 0 (used after inserting
    /// `name()` to land inside the parens).
    pub fn move_back_by(&mut self, n: usize) {
        self.cursor = self.cursor.saturating_sub(n);
    }

    /// Replaces the whole expression, cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.len_chars();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

fn char_to_byte_index(text: &str, col: usize) -> usize {
    if col == 0 {
        return 0;
    }
    text.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_at_cursor() {
        let mut buf = ExprBuffer::default();
        buf.insert_str("2+3");
        buf.move_left();
        buf.insert_char('1');
        assert_eq!(buf.text(), "2+13");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn delete_is_a_noop_at_start() {
        let mut buf = ExprBuffer::default();
        buf.insert_str("42");
        buf.move_home();
        buf.delete_prev_char();
        assert_eq!(buf.text(), "42");
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn delete_removes_the_char_before_the_cursor() {
        let mut buf = ExprBuffer::default();
        buf.insert_str("123");
        buf.move_left();
        buf.delete_prev_char();
        assert_eq!(buf.text(), "13");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn multibyte_chars_stay_intact() {
        let mut buf = ExprBuffer::default();
        buf.insert_str("2*π");
        assert_eq!(buf.cursor(), 3);
        buf.delete_prev_char();
        assert_eq!(buf.text(), "2*");
        buf.insert_str("π+1");
        assert_eq!(buf.text(), "2*π+1");
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut buf = ExprBuffer::default();
        buf.insert_str("ab");
        buf.move_right();
        assert_eq!(buf.cursor(), 2);
        buf.move_home();
        buf.move_left();
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn move_back_by_lands_inside_parens() {
        let mut buf = ExprBuffer::default();
        buf.insert_str("sin()");
        buf.move_back_by(1);
        assert_eq!(buf.cursor(), 4);
        buf.insert_char('0');
        assert_eq!(buf.text(), "sin(0)");
    }
}
