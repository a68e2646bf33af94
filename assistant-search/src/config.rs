//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls provider endpoints, timeouts and request
//! headers. The defaults target the public provider endpoints; tests
//! point [`ProviderEndpoints`] at a local mock server instead.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::types::{Provider, MAX_PROVIDER_RESULTS};

/// Result page URLs for each provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderEndpoints {
    /// DuckDuckGo HTML-only search page.
    pub duckduckgo: String,
    /// Bing search page.
    pub bing: String,
    /// Baidu search page.
    pub baidu: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            duckduckgo: "https://html.duckduckgo.com/html/".into(),
            bing: "https://www.bing.com/search".into(),
            baidu: "https://www.baidu.com/s".into(),
        }
    }
}

impl ProviderEndpoints {
    /// Endpoint for `provider`.
    pub fn for_provider(&self, provider: Provider) -> &str {
        match provider {
            Provider::DuckDuckGo => &self.duckduckgo,
            Provider::Bing => &self.bing,
            Provider::Baidu => &self.baidu,
        }
    }

    /// Point every provider at `base` (`{base}/duckduckgo`, `{base}/bing`,
    /// `{base}/baidu`). Used to aim adapters at a mock server.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            duckduckgo: format!("{base}/duckduckgo"),
            bing: format!("{base}/bing"),
            baidu: format!("{base}/baidu"),
        }
    }
}

/// Configuration shared by every provider adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Per-provider HTTP request timeout in seconds.
    pub timeout_seconds: u64,
    /// Maximum number of results extracted from one provider page.
    pub max_results: usize,
    /// `Accept-Language` header sent to every provider.
    pub accept_language: String,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// Provider result page URLs.
    pub endpoints: ProviderEndpoints,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 15,
            max_results: MAX_PROVIDER_RESULTS,
            accept_language: "zh-CN,zh;q=0.9,en;q=0.8".into(),
            user_agent: None,
            endpoints: ProviderEndpoints::default(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `max_results` must be between 1 and 10
    /// - every endpoint must be non-empty
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.max_results == 0 || self.max_results > MAX_PROVIDER_RESULTS {
            return Err(SearchError::Config(format!(
                "max_results must be between 1 and {MAX_PROVIDER_RESULTS}"
            )));
        }
        for provider in Provider::all() {
            if self.endpoints.for_provider(*provider).trim().is_empty() {
                return Err(SearchError::Config(format!(
                    "endpoint for {provider} must not be empty"
                )));
            }
        }
        Ok(())
    }
}
