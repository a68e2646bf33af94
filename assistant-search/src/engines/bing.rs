//! Bing adapter — first fallback with Microsoft's index.
//!
//! Organic results sit in `li.b_algo` blocks. Links are used as returned;
//! anything that is not an absolute http(s) URL is dropped.

use async_trait::async_trait;
use url::Url;

use crate::config::SearchConfig;
use crate::engine::ProviderAdapter;
use crate::error::SearchError;
use crate::extract::{extract_results, ExtractionProfile};
use crate::http;
use crate::types::{Provider, SearchResult};

pub(crate) const PROFILE: ExtractionProfile = ExtractionProfile {
    provider: "Bing",
    result: "li.b_algo",
    title_link: "h2 a",
    snippet: ".b_caption p",
    display_url: None,
    resolve_url: absolute_http_url,
    fallback_source: "bing.com",
};

/// Bing HTML search adapter.
#[derive(Debug, Clone, Default)]
pub struct BingAdapter {
    config: SearchConfig,
}

impl BingAdapter {
    /// Create an adapter using `config` for endpoint, headers and timeout.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

fn absolute_http_url(href: &str) -> Option<String> {
    let parsed = Url::parse(href).ok()?;
    matches!(parsed.scheme(), "http" | "https").then(|| href.to_string())
}

#[async_trait]
impl ProviderAdapter for BingAdapter {
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "Bing search");
        let html = http::get_html(
            Provider::Bing,
            &[("q", query), ("setlang", "zh-Hans")],
            &self.config,
        )
        .await?;
        parse_bing_html(&html, self.config.max_results)
    }

    fn provider(&self) -> Provider {
        Provider::Bing
    }
}

/// Parse Bing HTML response into search results.
///
/// Extracted as a separate function for testability with mock HTML.
pub(crate) fn parse_bing_html(
    html: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    extract_results(html, &PROFILE, max_results)
}
