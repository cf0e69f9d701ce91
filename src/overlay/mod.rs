//! The quick-navigation overlay, independent of any terminal or widget toolkit.
//!
//! [`OverlayController`] owns the [`OverlayState`] and is the only thing that
//! mutates it. Each operation returns at most one [`Effect`] for the runtime
//! to perform: a suggestion lookup or a navigation request. Lookups carry a
//! generation number and their completions are applied only when that number
//! is still the latest, so a slow response for an older query can never
//! overwrite suggestions for a newer one.

pub mod autocomplete;
pub mod destination;
pub mod input_line;
pub mod state;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::error::OverlayError;
use crate::domain::host::PreferenceSource;
use crate::domain::models::{derive_theme, Destination, ThemeMode};

pub use input_line::{EditOp, InputLine};
pub use state::OverlayState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchSuggestions { generation: u64, query: String },
    Navigate(Destination),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// The host must not run its default handling for the key.
    pub suppress_default: bool,
    pub effect: Option<Effect>,
}

impl KeyOutcome {
    fn suppressed(effect: Option<Effect>) -> Self {
        Self {
            suppress_default: true,
            effect,
        }
    }

    fn pass_through(effect: Option<Effect>) -> Self {
        Self {
            suppress_default: false,
            effect,
        }
    }
}

pub struct OverlayController {
    state: OverlayState,
    preferences: Arc<dyn PreferenceSource>,
    destination_template: String,
}

impl fmt::Debug for OverlayController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayController")
            .field("state", &self.state)
            .field("destination_template", &self.destination_template)
            .finish_non_exhaustive()
    }
}

impl OverlayController {
    pub fn new(
        preferences: Arc<dyn PreferenceSource>,
        destination_template: impl Into<String>,
    ) -> Self {
        let mut controller = Self {
            state: OverlayState::default(),
            preferences,
            destination_template: destination_template.into(),
        };
        controller.refresh_theme();
        controller
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    // --- Visibility ---

    /// Flips visibility. Input text and suggestions survive a hide/show cycle.
    pub fn toggle(&mut self) -> bool {
        self.state.visible = !self.state.visible;
        if self.state.visible {
            self.refresh_theme();
            self.state.input_focused = true;
        } else {
            self.state.input_focused = false;
        }
        self.state.visible
    }

    pub fn hide(&mut self) {
        if self.state.visible {
            self.toggle();
        }
    }

    /// Re-reads the host preference and returns the theme now in effect.
    pub fn refresh_theme(&mut self) -> ThemeMode {
        let preference = self.preferences.theme_preference();
        self.state.theme = derive_theme(preference.as_deref());
        self.state.theme
    }

    // --- Input ---

    /// Called when the host's text field already holds `query`.
    pub fn on_input_changed(&mut self, query: &str) -> Option<Effect> {
        if self.state.input.text() != query {
            self.state.input.set_text(query);
        }
        self.state.autocomplete_suppressed = false;
        self.begin_lookup()
    }

    /// Applies a text-editing key to the input, issuing a lookup when the
    /// text actually changed.
    pub fn edit(&mut self, op: EditOp) -> Option<Effect> {
        if !self.state.input.apply(op) {
            return None;
        }
        self.state.autocomplete_suppressed = op.is_deletion();
        self.begin_lookup()
    }

    fn begin_lookup(&mut self) -> Option<Effect> {
        self.state.highlighted = None;
        // Bumped even for empty input so a pending lookup cannot refill the list.
        let generation = self.state.next_generation();

        if self.state.input.is_empty() {
            self.state.clear_suggestions();
            return None;
        }

        Some(Effect::FetchSuggestions {
            generation,
            query: self.state.input.text().to_string(),
        })
    }

    /// Applies a lookup completion. Returns false when it was stale and ignored.
    pub fn apply_suggestions(
        &mut self,
        generation: u64,
        result: Result<Vec<String>, OverlayError>,
    ) -> bool {
        if generation != self.state.generation {
            debug!(
                generation,
                latest = self.state.generation,
                "Discarding stale suggestion lookup"
            );
            return false;
        }

        match result {
            Ok(names) => {
                self.state.replace_suggestions(names);
                self.refresh_theme();
                if !self.state.autocomplete_suppressed {
                    self.autocomplete();
                }
            }
            Err(err) => {
                warn!(error = %err, "Falling back to an empty suggestion list");
                self.state.clear_suggestions();
                self.refresh_theme();
            }
        }
        true
    }

    fn autocomplete(&mut self) {
        let Some(first) = self.state.suggestions.first() else {
            return;
        };
        let input = &self.state.input;
        if !input.is_cursor_at_end() {
            return;
        }
        if let Some(completion) = autocomplete::complete(input.text(), first) {
            let (start, end) = completion.selection;
            self.state.input.set_text(completion.text);
            self.state.input.select(start, end);
        }
    }

    // --- Keyboard navigation ---

    pub fn on_key_down(&mut self, key: OverlayKey) -> KeyOutcome {
        let len = self.state.suggestions.len();
        match key {
            OverlayKey::ArrowDown => {
                if len > 0 {
                    self.state.highlighted = Some(match self.state.highlighted {
                        Some(i) => (i + 1) % len,
                        None => 0,
                    });
                }
                KeyOutcome::suppressed(None)
            }
            OverlayKey::ArrowUp => {
                if len > 0 {
                    self.state.highlighted = Some(match self.state.highlighted {
                        Some(i) => (i + len - 1) % len,
                        None => len - 1,
                    });
                }
                KeyOutcome::suppressed(None)
            }
            OverlayKey::Enter => match self.state.highlighted.filter(|&i| i < len) {
                Some(i) => KeyOutcome::suppressed(self.choose(i)),
                None => KeyOutcome::pass_through(self.submit()),
            },
            OverlayKey::Other => KeyOutcome::pass_through(None),
        }
    }

    /// Mouse selection of a suggestion row. Out-of-range rows are ignored.
    pub fn select_suggestion(&mut self, index: usize) -> Option<Effect> {
        if index >= self.state.suggestions.len() {
            return None;
        }
        self.choose(index)
    }

    /// Navigates with the current text as typed.
    pub fn submit(&mut self) -> Option<Effect> {
        self.resolve_destination(self.state.input.text())
            .map(Effect::Navigate)
    }

    fn choose(&mut self, index: usize) -> Option<Effect> {
        let name = self.state.suggestions[index].clone();
        self.state.input.set_text(name);
        self.state.clear_suggestions();
        // Invalidate any lookup still in flight for the replaced text.
        self.state.next_generation();
        self.submit()
    }

    pub fn resolve_destination(&self, text: &str) -> Option<Destination> {
        let destination = destination::resolve_destination(text, &self.destination_template);
        if destination.is_none() {
            debug!("Ignoring navigation request with blank input");
        }
        destination
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
