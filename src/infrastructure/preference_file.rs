use crate::domain::host::PreferenceSource;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Default, Deserialize)]
struct PreferenceFile {
    theme: Option<toml::Value>,
}

/// Reads the host's `theme` preference from a TOML file on every call, so
/// edits made while the app runs are picked up on the next read.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceSource for FilePreferences {
    fn theme_preference(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let file: PreferenceFile = match toml::from_str(&content) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring unreadable preference file");
                return None;
            }
        };

        // Accept both `theme = "2"` and `theme = 2`.
        match file.theme? {
            toml::Value::String(s) => Some(s),
            toml::Value::Integer(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs_with(content: &str) -> (tempfile::TempDir, FilePreferences) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, content).unwrap();
        (dir, FilePreferences::new(path))
    }

    #[test]
    fn test_reads_string_and_integer() {
        let (_dir, prefs) = prefs_with("theme = \"2\"\n");
        assert_eq!(prefs.theme_preference().as_deref(), Some("2"));

        let (_dir, prefs) = prefs_with("theme = 1\n");
        assert_eq!(prefs.theme_preference().as_deref(), Some("1"));
    }

    #[test]
    fn test_missing_or_invalid_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            FilePreferences::new(dir.path().join("absent.toml")).theme_preference(),
            None
        );

        let (_dir, prefs) = prefs_with("theme = [\n");
        assert_eq!(prefs.theme_preference(), None);

        let (_dir, prefs) = prefs_with("other = \"2\"\n");
        assert_eq!(prefs.theme_preference(), None);
    }

    #[test]
    fn test_rereads_on_every_call() {
        let (dir, prefs) = prefs_with("theme = \"1\"\n");
        assert_eq!(prefs.theme_preference().as_deref(), Some("1"));

        std::fs::write(dir.path().join("preferences.toml"), "theme = \"2\"\n").unwrap();
        assert_eq!(prefs.theme_preference().as_deref(), Some("2"));
    }
}
