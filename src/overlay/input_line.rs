/// Single-line text field model. Positions are char indices, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    cursor: usize,
    selection: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

impl EditOp {
    #[must_use]
    pub fn is_deletion(&self) -> bool {
        matches!(self, EditOp::Backspace | EditOp::Delete)
    }
}

impl InputLine {
    pub fn new(text: impl Into<String>) -> Self {
        let mut line = Self::default();
        line.set_text(text);
        line
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the caret sits after the last char with nothing selected.
    pub fn is_cursor_at_end(&self) -> bool {
        self.selection.is_none() && self.cursor == self.char_len()
    }

    /// Replaces the whole text and parks the caret at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_len();
        self.selection = None;
    }

    /// Selects `[start, end)`, clamped to the text. The caret moves to `end`.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.char_len();
        let (start, end) = (start.min(len), end.min(len));
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.cursor = end;
        self.selection = (start != end).then_some((start, end));
    }

    /// Applies an edit and reports whether the text changed.
    pub fn apply(&mut self, op: EditOp) -> bool {
        match op {
            EditOp::Insert(c) => {
                self.delete_selection();
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                true
            }
            EditOp::Backspace => {
                if self.delete_selection() {
                    return true;
                }
                if self.cursor == 0 {
                    return false;
                }
                let at = self.byte_offset(self.cursor - 1);
                self.text.remove(at);
                self.cursor -= 1;
                true
            }
            EditOp::Delete => {
                if self.delete_selection() {
                    return true;
                }
                if self.cursor >= self.char_len() {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.text.remove(at);
                true
            }
            EditOp::Left => {
                match self.selection.take() {
                    Some((start, _)) => self.cursor = start,
                    None => self.cursor = self.cursor.saturating_sub(1),
                }
                false
            }
            EditOp::Right => {
                match self.selection.take() {
                    Some((_, end)) => self.cursor = end,
                    None => self.cursor = (self.cursor + 1).min(self.char_len()),
                }
                false
            }
            EditOp::Home => {
                self.selection = None;
                self.cursor = 0;
                false
            }
            EditOp::End => {
                self.selection = None;
                self.cursor = self.char_len();
                false
            }
        }
    }

    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection.take() else {
            return false;
        };
        let (from, to) = (self.byte_offset(start), self.byte_offset(end));
        self.text.replace_range(from..to, "");
        self.cursor = start;
        true
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
