use anyhow::Result;
use async_trait::async_trait;

/// Returns candidate community names for a partial query, most relevant first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self, query: &str) -> Result<Vec<String>>;
}
