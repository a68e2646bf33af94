//! Core types for search results, provider identification and the
//! request/response contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a result title, in characters.
pub const MAX_TITLE_CHARS: usize = 100;

/// Maximum length of a result snippet, in characters.
pub const MAX_SNIPPET_CHARS: usize = 250;

/// Maximum number of results a single provider page contributes.
pub const MAX_PROVIDER_RESULTS: usize = 10;

/// A single normalized search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page, at most [`MAX_TITLE_CHARS`] characters.
    pub title: String,
    /// Absolute URL of the result (or the provider's redirect URL).
    pub url: String,
    /// A text snippet summarising the page, at most [`MAX_SNIPPET_CHARS`] characters.
    pub snippet: String,
    /// Short origin label: hostname without `www.`, or a provider label.
    pub source: String,
}

/// Live search providers with a scraping adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// DuckDuckGo HTML endpoint. The most tolerant of automated requests.
    DuckDuckGo,
    /// Bing.
    Bing,
    /// Baidu. Results point at Baidu-hosted redirect URLs.
    Baidu,
}

impl Provider {
    /// Returns the human-readable name of this provider.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Bing => "Bing",
            Self::Baidu => "Baidu",
        }
    }

    /// Returns all providers in fallback priority order after the default.
    pub fn all() -> &'static [Provider] {
        &[Self::DuckDuckGo, Self::Bing, Self::Baidu]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The engine a caller asked for.
///
/// "google" is accepted by callers but is served by DuckDuckGo, since
/// scraping Google directly is blocked too aggressively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineSelector {
    /// Anything other than `bing` or `baidu`, including no engine at all.
    #[default]
    Default,
    /// `bing`
    Bing,
    /// `baidu`
    Baidu,
}

impl EngineSelector {
    /// Parse a caller-supplied engine name. Unknown names select the default.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some(n) if n.eq_ignore_ascii_case("bing") => Self::Bing,
            Some(n) if n.eq_ignore_ascii_case("baidu") => Self::Baidu,
            _ => Self::Default,
        }
    }

    /// The provider that answers first for this selector.
    pub fn primary(&self) -> Provider {
        match self {
            Self::Default => Provider::DuckDuckGo,
            Self::Bing => Provider::Bing,
            Self::Baidu => Provider::Baidu,
        }
    }
}

/// Similarity and difference statements between an AI answer and the
/// retrieved results, plus phrases to emphasise in each.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Points on which the AI answer and the results agree.
    pub similarities: Vec<String>,
    /// Points on which they differ.
    pub differences: Vec<String>,
    /// Phrases to highlight in the AI answer.
    #[serde(rename = "highlightedAI")]
    pub highlighted_ai: Vec<String>,
    /// Phrases to highlight in result snippets.
    #[serde(rename = "highlightedSearch")]
    pub highlighted_search: Vec<String>,
}

/// An inbound search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query. Required and non-empty after trimming.
    #[serde(default)]
    pub query: Option<String>,
    /// Requested engine name (`bing`, `baidu`, anything else for the default).
    #[serde(default)]
    pub engine: Option<String>,
}

impl SearchRequest {
    /// Build a request for `query` using the default engine.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            engine: None,
        }
    }

    /// Select an engine by name.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }
}

/// The response returned for a successful search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Final results: live provider results, or synthesized ones.
    pub results: Vec<SearchResult>,
    /// Comparison of the AI answer with the results.
    #[serde(flatten)]
    pub comparison: ComparisonSummary,
}
