use anyhow::Result;

/// Read-only access to the host's stored display preference.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceSource: Send + Sync {
    fn theme_preference(&self) -> Option<String>;
}

/// Hands a destination URL to whatever actually performs navigation.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// A preference that never changes. Used when no preference file is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedPreference(pub Option<String>);

impl PreferenceSource for FixedPreference {
    fn theme_preference(&self) -> Option<String> {
        self.0.clone()
    }
}
