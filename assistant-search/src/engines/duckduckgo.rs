//! DuckDuckGo adapter — most scraper-friendly, used for the default engine.
//!
//! Uses the HTML-only version at `https://html.duckduckgo.com/html/`
//! which requires no JavaScript and is tolerant of automated requests.

use async_trait::async_trait;
use url::Url;

use crate::config::SearchConfig;
use crate::engine::ProviderAdapter;
use crate::error::SearchError;
use crate::extract::{extract_results, ExtractionProfile};
use crate::http;
use crate::types::{Provider, SearchResult};

/// Result markup on the HTML-only endpoint. Ads carry `result--ad`.
pub(crate) const PROFILE: ExtractionProfile = ExtractionProfile {
    provider: "DuckDuckGo",
    result: ".result:not(.result--ad)",
    title_link: ".result__title a",
    snippet: ".result__snippet",
    display_url: Some(".result__url"),
    resolve_url: extract_url,
    fallback_source: "DuckDuckGo",
};

/// DuckDuckGo HTML search adapter.
#[derive(Debug, Clone, Default)]
pub struct DuckDuckGoAdapter {
    config: SearchConfig,
}

impl DuckDuckGoAdapter {
    /// Create an adapter using `config` for endpoint, headers and timeout.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

/// Extract the actual URL from DuckDuckGo's redirect wrapper.
///
/// DDG wraps URLs like: `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`
/// We parse out the `uddg` query parameter and URL-decode it.
fn extract_url(href: &str) -> Option<String> {
    // Handle protocol-relative URLs
    let full_href = if href.starts_with("//") {
        format!("https:{href}")
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&full_href).ok()?;

    if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())
            .filter(|target| !target.is_empty())
    } else {
        Some(full_href)
    }
}

#[async_trait]
impl ProviderAdapter for DuckDuckGoAdapter {
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "DuckDuckGo search");
        let html = http::get_html(Provider::DuckDuckGo, &[("q", query)], &self.config).await?;
        parse_duckduckgo_html(&html, self.config.max_results)
    }

    fn provider(&self) -> Provider {
        Provider::DuckDuckGo
    }
}

/// Parse DuckDuckGo HTML response into search results.
///
/// Extracted as a separate function for testability with mock HTML.
pub(crate) fn parse_duckduckgo_html(
    html: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    extract_results(html, &PROFILE, max_results)
}
