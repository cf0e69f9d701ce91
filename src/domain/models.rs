use std::fmt;

/// Preference value the host stores when the user picked the dark look.
/// The host uses "1" for light and "2" for dark; anything else reads as light.
pub const DARK_PREFERENCE: &str = "2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Maps the host's stored display preference to a theme. Absent or unknown
/// values fall back to [`ThemeMode::Light`].
#[must_use]
pub fn derive_theme(preference: Option<&str>) -> ThemeMode {
    match preference {
        Some(DARK_PREFERENCE) => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

/// A resolved navigation target: the trimmed community name and the URL built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub name: String,
    pub url: String,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_theme() {
        assert_eq!(derive_theme(None), ThemeMode::Light);
        assert_eq!(derive_theme(Some("2")), ThemeMode::Dark);
        assert_eq!(derive_theme(Some("1")), ThemeMode::Light);
        assert_eq!(derive_theme(Some("dark")), ThemeMode::Light);
        assert_eq!(derive_theme(Some(" 2")), ThemeMode::Light);
        assert_eq!(derive_theme(Some("")), ThemeMode::Light);
    }
}
