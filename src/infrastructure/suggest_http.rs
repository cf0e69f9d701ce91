use crate::domain::suggest::SuggestionSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    subreddits: Vec<AutocompleteEntry>,
}

#[derive(Debug, Deserialize)]
struct AutocompleteEntry {
    name: String,
}

/// Queries the community autocomplete endpoint over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpSuggestionSource {
    client: Client,
    endpoint: String,
}

impl HttpSuggestionSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("jumpbar/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("building http client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn request_url(&self, query: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}query={}",
            self.endpoint,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl SuggestionSource for HttpSuggestionSource {
    async fn suggest(&self, query: &str) -> Result<Vec<String>> {
        let url = self.request_url(query);
        debug!(%url, "Requesting suggestions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("fetching suggestions")?;

        if !response.status().is_success() {
            anyhow::bail!("autocomplete endpoint returned {}", response.status());
        }

        let body = response.text().await.context("reading suggestions")?;
        parse_suggestions(&body)
    }
}

/// Extracts community names, in order, from an autocomplete response body.
pub fn parse_suggestions(body: &str) -> Result<Vec<String>> {
    let response: AutocompleteResponse =
        serde_json::from_str(body).context("parsing suggestions JSON")?;
    Ok(response.subreddits.into_iter().map(|s| s.name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(endpoint: &str) -> HttpSuggestionSource {
        HttpSuggestionSource::new(endpoint, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_request_url_encodes_query() {
        let s = source("https://www.reddit.com/api/subreddit_autocomplete.json");
        assert_eq!(
            s.request_url("rust lang&x"),
            "https://www.reddit.com/api/subreddit_autocomplete.json?query=rust%20lang%26x"
        );
    }

    #[test]
    fn test_request_url_appends_to_existing_query() {
        let s = source("https://example.com/ac?include_over_18=false");
        assert_eq!(
            s.request_url("ru"),
            "https://example.com/ac?include_over_18=false&query=ru"
        );
    }

    #[test]
    fn test_parse_keeps_order() {
        let body = r#"{"subreddits":[{"name":"rust","numSubscribers":1},{"name":"rustjerk"}]}"#;
        assert_eq!(
            parse_suggestions(body).unwrap(),
            vec!["rust".to_string(), "rustjerk".to_string()]
        );
    }

    #[test]
    fn test_parse_missing_list_is_empty() {
        assert!(parse_suggestions("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_malformed_is_error() {
        assert!(parse_suggestions("<html>rate limited</html>").is_err());
        assert!(parse_suggestions(r#"{"subreddits":[{"title":"x"}]}"#).is_err());
    }
}
