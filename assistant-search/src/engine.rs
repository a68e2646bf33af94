//! Trait definition for pluggable search provider adapters.
//!
//! Each provider (DuckDuckGo, Bing, Baidu) implements [`ProviderAdapter`]
//! to provide a uniform interface for querying and parsing results. The
//! trait is object-safe so the fallback orchestrator can hold adapters as
//! `Arc<dyn ProviderAdapter>` and tests can substitute counting mocks.

use async_trait::async_trait;

use crate::error::SearchError;
use crate::types::{Provider, SearchResult};

/// A pluggable search provider backend.
///
/// Implementors fetch one provider's first result page and extract
/// normalized [`SearchResult`] values. Each adapter handles its own:
///
/// - URL construction with query encoding
/// - HTTP request with appropriate headers
/// - HTML parsing via its extraction profile
/// - Link normalisation (redirect unwrapping, relative link resolution)
///
/// Failures are returned as an explicit [`SearchError`] so the caller can
/// log the failure class; the orchestrator treats any error as "no results".
/// All implementations must be `Send + Sync`.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Fetch and parse up to ten results for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the HTTP request fails, the provider
    /// answers with a non-success status, or the page cannot be parsed.
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;

    /// Returns which [`Provider`] this adapter represents.
    fn provider(&self) -> Provider;
}
