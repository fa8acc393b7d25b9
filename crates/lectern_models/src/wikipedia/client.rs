//! MediaWiki action API client.

use crate::wikipedia::dto::{ApiResponse, ExtractResponse, SearchResponse};
use lectern_error::{HttpError, JsonError, LecternResult};
use lectern_interface::ResearchSource;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Number of search hits summarized per query.
pub const DEFAULT_TOP_K_RESULTS: usize = 3;

/// Upper bound on the characters returned per query.
pub const DEFAULT_MAX_CHARS: usize = 4000;

/// Longest search string MediaWiki accepts, in characters.
pub const MAX_QUERY_CHARS: usize = 300;

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("lectern/", env!("CARGO_PKG_VERSION"));

/// Join page summaries as `Page: ...\nSummary: ...` blocks and cap the length.
///
/// Truncation counts characters, so multi-byte text is never split.
///
/// # Examples
///
/// ```
/// use lectern_models::format_summaries;
///
/// let pages = vec![
///     ("Apollo program".to_string(), "Crewed lunar landings.".to_string()),
///     ("Voyager 1".to_string(), "Interstellar spacecraft.".to_string()),
/// ];
/// assert_eq!(
///     format_summaries(&pages, 4000),
///     "Page: Apollo program\nSummary: Crewed lunar landings.\n\n\
///      Page: Voyager 1\nSummary: Interstellar spacecraft."
/// );
/// ```
pub fn format_summaries(pages: &[(String, String)], max_chars: usize) -> String {
    let joined = pages
        .iter()
        .map(|(title, summary)| format!("Page: {}\nSummary: {}", title, summary))
        .collect::<Vec<_>>()
        .join("\n\n");
    joined.chars().take(max_chars).collect()
}

/// Research source backed by Wikipedia page introductions.
///
/// A query runs one full-text search, then fetches the plain-text intro of
/// each of the top hits, one request at a time.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    api_url: String,
    top_k_results: usize,
    max_chars: usize,
}

impl WikipediaClient {
    /// Creates a client for English Wikipedia with default limits.
    pub fn new() -> LecternResult<Self> {
        Self::with_options(
            DEFAULT_LANGUAGE,
            DEFAULT_TOP_K_RESULTS,
            DEFAULT_MAX_CHARS,
            DEFAULT_TIMEOUT,
        )
    }

    /// Creates a client for the given language edition and limits.
    pub fn with_options(
        language: &str,
        top_k_results: usize,
        max_chars: usize,
        timeout: Duration,
    ) -> LecternResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_url: format!("https://{}.wikipedia.org/w/api.php", language),
            top_k_results,
            max_chars,
        })
    }

    /// Point the client at another MediaWiki installation.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Action API endpoint in use.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get_json<T>(&self, params: &[(&str, &str)]) -> LecternResult<T>
    where
        T: DeserializeOwned + ApiResponse,
    {
        let response = self
            .client
            .get(&self.api_url)
            .query(params)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Wikipedia request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::new(format!("Wikipedia returned {}", status)).into());
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| JsonError::new(format!("Failed to parse Wikipedia response: {}", e)))?;

        if let Some(error) = body.api_error() {
            warn!(code = %error.code, info = %error.info, "Wikipedia API rejected request");
            return Err(HttpError::new(format!(
                "Wikipedia API error {}: {}",
                error.code, error.info
            ))
            .into());
        }
        Ok(body)
    }

    async fn search_titles(&self, query: &str) -> LecternResult<Vec<String>> {
        let query: String = query.chars().take(MAX_QUERY_CHARS).collect();
        let limit = self.top_k_results.to_string();
        let response: SearchResponse = self
            .get_json(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query.as_str()),
                ("srlimit", limit.as_str()),
                ("format", "json"),
                ("utf8", "1"),
            ])
            .await?;

        Ok(response
            .query
            .map(|query| query.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default())
    }

    async fn page_summary(&self, title: &str) -> LecternResult<Option<(String, String)>> {
        let response: ExtractResponse = self
            .get_json(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
                ("format", "json"),
                ("utf8", "1"),
            ])
            .await?;

        Ok(response
            .query
            .and_then(|query| query.pages.into_values().next())
            .and_then(|page| match page.extract {
                Some(extract) if !extract.trim().is_empty() => {
                    Some((page.title, extract.trim().to_string()))
                }
                _ => None,
            }))
    }
}

#[async_trait::async_trait]
impl ResearchSource for WikipediaClient {
    fn source_name(&self) -> &'static str {
        "wikipedia"
    }

    #[instrument(skip(self), fields(top_k = self.top_k_results))]
    async fn search(&self, query: &str) -> LecternResult<String> {
        let titles = self.search_titles(query).await?;
        debug!(hits = titles.len(), "Wikipedia search complete");

        let mut pages = Vec::with_capacity(titles.len());
        for title in titles.into_iter().take(self.top_k_results) {
            match self.page_summary(&title).await {
                Ok(Some(page)) => pages.push(page),
                Ok(None) => warn!(title = %title, "Skipping page without an introduction"),
                Err(e) => warn!(title = %title, error = %e, "Skipping page that failed to load"),
            }
        }

        Ok(format_summaries(&pages, self.max_chars))
    }
}
