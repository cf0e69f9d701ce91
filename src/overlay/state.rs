use super::input_line::InputLine;
use crate::domain::models::ThemeMode;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayState {
    pub visible: bool,
    pub input: InputLine,
    /// Names in the order the source returned them.
    pub suggestions: Vec<String>,
    /// `None` means nothing is highlighted. Always a valid index otherwise.
    pub highlighted: Option<usize>,
    pub theme: ThemeMode,
    pub input_focused: bool,

    /// Generation of the most recently issued lookup. Completions carrying
    /// any other value are stale.
    pub generation: u64,
    /// Set when the edit behind the latest lookup removed text.
    pub autocomplete_suppressed: bool,
}

impl OverlayState {
    pub(crate) fn replace_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
        self.highlighted = None;
    }

    pub(crate) fn clear_suggestions(&mut self) {
        self.replace_suggestions(Vec::new());
    }

    pub(crate) fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}
