use crate::app::keymap::DEFAULT_TOGGLE_KEY;
use crate::overlay::destination::{DEFAULT_DESTINATION_TEMPLATE, NAME_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_SUGGEST_ENDPOINT: &str = "https://www.reddit.com/api/subreddit_autocomplete.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Key chord that shows or hides the bar, e.g. "ctrl-k".
    pub toggle_key: String,
    /// URL template for navigation; `{name}` is replaced with the community name.
    pub destination_template: String,
    pub suggest_endpoint: String,
    pub request_timeout_ms: u64,
    /// TOML file holding the host's `theme` preference.
    pub preference_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toggle_key: DEFAULT_TOGGLE_KEY.to_string(),
            destination_template: DEFAULT_DESTINATION_TEMPLATE.to_string(),
            suggest_endpoint: DEFAULT_SUGGEST_ENDPOINT.to_string(),
            request_timeout_ms: 3000,
            preference_path: None,
        }
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("jumpbar");
        path
    })
}

pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

impl Config {
    pub fn load() -> Self {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Reads `path`, falling back to defaults when it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring invalid config file");
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        if !self.destination_template.contains(NAME_PLACEHOLDER) {
            warn!(
                template = %self.destination_template,
                "Destination template has no {NAME_PLACEHOLDER} placeholder, using the default"
            );
            self.destination_template = DEFAULT_DESTINATION_TEMPLATE.to_string();
        }
        if self.request_timeout_ms == 0 {
            self.request_timeout_ms = Self::default().request_timeout_ms;
        }
        self
    }

    /// The configured preference file, or `preferences.toml` next to the config.
    pub fn preference_path(&self) -> Option<PathBuf> {
        self.preference_path
            .clone()
            .or_else(|| get_config_dir().map(|dir| dir.join("preferences.toml")))
    }
}
