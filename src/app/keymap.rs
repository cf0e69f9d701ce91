use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

pub const DEFAULT_TOGGLE_KEY: &str = "ctrl-k";

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    /// Chord that toggles the bar from anywhere.
    pub toggle: KeyEvent,
    /// Bindings active while the bar is hidden.
    pub host: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn new(toggle_key: &str) -> Self {
        let toggle = parse_key_chord(toggle_key).unwrap_or_else(|| {
            warn!(toggle_key, "Unrecognized toggle key, using {DEFAULT_TOGGLE_KEY}");
            parse_key_chord(DEFAULT_TOGGLE_KEY).unwrap_or(key(KeyCode::F(2)))
        });

        let mut host = HashMap::new();
        host.insert(key(KeyCode::Char('q')), Action::Quit);
        host.insert(key(KeyCode::Char('/')), Action::ToggleOverlay);

        Self { toggle, host }
    }

    pub fn is_toggle(&self, event: &KeyEvent) -> bool {
        event.code == self.toggle.code && event.modifiers == self.toggle.modifiers
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.host
            .get(&KeyEvent::new(event.code, event.modifiers))
            .cloned()
    }

    /// Human readable form of the toggle chord, e.g. "Ctrl+K".
    pub fn toggle_label(&self) -> String {
        let mut parts = Vec::new();
        if self.toggle.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.toggle.modifiers.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        if self.toggle.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        parts.push(match self.toggle.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        parts.join("+")
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(DEFAULT_TOGGLE_KEY)
    }
}

/// Parses chords such as "ctrl-k", "alt-shift-p", "f2" or "ctrl-space".
pub fn parse_key_chord(chord: &str) -> Option<KeyEvent> {
    let chord = chord.trim().to_ascii_lowercase();
    if chord.is_empty() {
        return None;
    }

    let mut parts: Vec<&str> = chord.split(['-', '+']).collect();
    let last = parts.pop()?;
    let mut modifiers = KeyModifiers::empty();
    for part in parts {
        match part {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" | "meta" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let code = match last {
        "space" => KeyCode::Char(' '),
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(KeyEvent::new(code, modifiers))
}

fn key(code: impl Into<KeyCode>) -> KeyEvent {
    KeyEvent::new(code.into(), KeyModifiers::empty())
}
