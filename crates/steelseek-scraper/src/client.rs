//! HTTP client for the public web-search results page.

use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;
use crate::parse::extract_result_headings;
use crate::types::ScrapedCandidate;

/// Upper bound on headings extracted from one results page. Callers
/// typically consume fewer; this caps parse work on bloated markup.
pub const MAX_RESULTS: usize = 5;

const CANDIDATE_SOURCE: &str = "web";

/// Best-effort client for scraping seller candidates out of a search
/// engine's HTML results page.
///
/// One page per query, no retry, no backoff: the caller treats every
/// failure as "no candidates" and a slow page is bounded by the request
/// timeout, so a retry policy would only stretch request latency.
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    /// Creates a `SearchClient` with configured timeout and `User-Agent`.
    ///
    /// `base_url` is the search endpoint queried with a `q` parameter,
    /// e.g. `https://html.duckduckgo.com/html`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetches the results page for `query` and extracts up to
    /// [`MAX_RESULTS`] candidate names from result headings.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidBaseUrl`] — the configured base URL does not parse.
    /// - [`FetchError::UnexpectedStatus`] — any non-2xx response.
    /// - [`FetchError::Http`] — network, TLS, or timeout failure.
    ///
    /// An empty candidate list is NOT an error: a page that parses but
    /// yields no headings returns `Ok(vec![])`.
    pub async fn fetch_candidates(&self, query: &str) -> Result<Vec<ScrapedCandidate>, FetchError> {
        let url = self.search_url(query)?;

        let response = self
            .client
            .get(&url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "fa-IR,fa;q=0.9,en;q=0.8")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let headings = extract_result_headings(&body, MAX_RESULTS);
        tracing::debug!(query, count = headings.len(), "extracted search headings");

        Ok(headings
            .into_iter()
            .map(|name| ScrapedCandidate {
                name,
                source: CANDIDATE_SOURCE.to_string(),
            })
            .collect())
    }

    /// Builds the search URL for the given query.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] if the configured base URL
    /// cannot be parsed.
    fn search_url(&self, query: &str) -> Result<String, FetchError> {
        let mut url =
            reqwest::Url::parse(&self.base_url).map_err(|e| FetchError::InvalidBaseUrl {
                base_url: self.base_url.clone(),
                reason: e.to_string(),
            })?;

        url.query_pairs_mut().append_pair("q", query);

        Ok(url.to_string())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
