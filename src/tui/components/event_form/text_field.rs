//! Single-line editable text with a byte-offset cursor.

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct TextField {
    pub value: String,
    /// Cursor position as byte offset in value (0..=value.len())
    pub cursor: usize,
}

impl TextField {
    /// A field holding `value` with the cursor at the end.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = prev_char_boundary(&self.value, self.cursor);
        self.value.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let end = next_char_boundary(&self.value, self.cursor);
        self.value.replace_range(self.cursor..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_char_boundary(&self.value, self.cursor);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = next_char_boundary(&self.value, self.cursor);
        }
    }

    /// Text before and after the cursor, for rendering the caret.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut field = TextField::new("Zur");
        field.insert('ü');
        field.insert('h');
        assert_eq!(field.value, "Zurüh");
        field.backspace();
        field.backspace();
        assert_eq!(field.value, "Zur");
        assert_eq!(field.cursor, 3);
    }

    #[test]
    fn test_cursor_movement_and_delete() {
        let mut field = TextField::new("née");
        field.move_left();
        field.move_left();
        field.delete();
        assert_eq!(field.value, "ne");
        field.move_right();
        field.move_right();
        assert_eq!(field.cursor, field.value.len());
    }

    #[test]
    fn test_edges_are_noops() {
        let mut field = TextField::new("");
        field.backspace();
        field.delete();
        field.move_left();
        field.move_right();
        assert_eq!(field, TextField::new(""));
    }

    #[test]
    fn test_split_at_cursor() {
        let mut field = TextField::new("Rome");
        field.move_left();
        assert_eq!(field.split_at_cursor(), ("Rom", "e"));
    }
}
