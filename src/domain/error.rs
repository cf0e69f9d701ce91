use thiserror::Error;

/// Failures the overlay recovers from locally. None of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    #[error("suggestion lookup failed: {0}")]
    SuggestionLookupFailed(String),

    #[error("overlay has not been mounted yet")]
    MissingOverlayElement,
}

impl OverlayError {
    pub fn lookup(err: &anyhow::Error) -> Self {
        OverlayError::SuggestionLookupFailed(format!("{err:#}"))
    }
}
