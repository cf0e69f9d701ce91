use super::config::Config;
use super::keymap::KeyMap;
use crate::domain::host::{FixedPreference, PreferenceSource};
use crate::domain::models::ThemeMode;
use crate::overlay::OverlayController;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const STATUS_TTL: Duration = Duration::from_secs(4);

pub struct AppState {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub status_message: Option<String>, // "Opened r/rust"
    pub last_error: Option<String>,
    pub status_clear_time: Option<Instant>,

    // --- Overlay ---
    // None until the host view has been drawn once.
    pub overlay: Option<OverlayController>,
    pub hovered_suggestion: Option<usize>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub config: Arc<Config>,
    pub preferences: Arc<dyn PreferenceSource>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, preferences: Arc<dyn PreferenceSource>) -> Self {
        Self {
            keymap: Arc::new(KeyMap::new(&config.toggle_key)),
            config: Arc::new(config),
            preferences,
            ..Default::default()
        }
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.as_ref().is_some_and(OverlayController::is_visible)
    }

    /// Theme for the whole screen. Before the overlay mounts it is read directly.
    pub fn theme_mode(&self) -> ThemeMode {
        match &self.overlay {
            Some(overlay) => overlay.state().theme,
            None => crate::domain::models::derive_theme(
                self.preferences.theme_preference().as_deref(),
            ),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.last_error = None;
        self.status_clear_time = Some(Instant::now() + STATUS_TTL);
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.status_message = None;
        self.status_clear_time = Some(Instant::now() + STATUS_TTL);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            status_message: None,
            last_error: None,
            status_clear_time: None,
            overlay: None,
            hovered_suggestion: None,
            keymap: Arc::new(KeyMap::default()),
            config: Arc::new(Config::default()),
            preferences: Arc::new(FixedPreference::default()),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("should_quit", &self.should_quit)
            .field("status_message", &self.status_message)
            .field("last_error", &self.last_error)
            .field("overlay", &self.overlay)
            .field("hovered_suggestion", &self.hovered_suggestion)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
