//! # assistant-search
//!
//! Multi-provider web search for the assistant backend.
//!
//! This crate answers a free-text query by scraping public search
//! providers directly (no API keys), normalizing their markup into one
//! result schema, and comparing the results with an AI answer.
//!
//! ## Design
//!
//! - Scrapes DuckDuckGo, Bing and Baidu using per-provider CSS selector profiles
//! - Queries providers one at a time: the requested engine first, then
//!   Bing and Baidu until at least three results are found
//! - Never merges providers: the largest single result set wins
//! - When every provider comes back empty, synthesizes deterministic
//!   results from templates so the caller still gets a usable response
//! - User-Agent rotation for reliability
//!
//! ## Failure handling
//!
//! Provider failures (network, timeouts, HTTP status, unparsable markup)
//! are logged with the provider name and failure class, then treated as
//! an empty result set. The only error a caller normally sees is
//! [`SearchError::Validation`] for an empty query.

pub mod analyze;
pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod extract;
pub mod http;
pub mod orchestrator;
pub mod synthesize;
pub mod types;

pub use analyze::analyze;
pub use config::{ProviderEndpoints, SearchConfig};
pub use engine::ProviderAdapter;
pub use error::{Result, SearchError};
pub use orchestrator::FallbackOrchestrator;
pub use synthesize::synthesize;
pub use types::{
    ComparisonSummary, EngineSelector, Provider, SearchRequest, SearchResponse, SearchResult,
};

/// Retrieve results for `query`, synthesizing them if every provider fails.
///
/// Returns 1 to 10 live results, or 1 to 8 synthesized ones.
pub async fn search_with_fallback(
    query: &str,
    engine: EngineSelector,
    orchestrator: &FallbackOrchestrator,
) -> Vec<SearchResult> {
    let results = orchestrator.search(query, engine).await;
    if !results.is_empty() {
        return results;
    }

    tracing::warn!("all search providers failed or were blocked, using synthesized results");
    synthesize(query)
}

/// Handle one search request end to end.
///
/// Validates the query, runs the provider fallback chain (with synthesis
/// on total failure) and attaches the comparison summary.
///
/// # Errors
///
/// Returns [`SearchError::Validation`] if the query is missing or blank.
/// No provider is contacted in that case.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> assistant_search::Result<()> {
/// use assistant_search::{FallbackOrchestrator, SearchConfig, SearchRequest};
///
/// let orchestrator = FallbackOrchestrator::new(&SearchConfig::default());
/// let request = SearchRequest::new("rust programming").with_engine("bing");
/// let response = assistant_search::search_and_compare(&request, &orchestrator).await?;
/// for result in &response.results {
///     println!("{} ({}): {}", result.title, result.source, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_and_compare(
    request: &SearchRequest,
    orchestrator: &FallbackOrchestrator,
) -> Result<SearchResponse> {
    let query = request
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| SearchError::Validation("query is required".into()))?;

    let engine = EngineSelector::from_name(request.engine.as_deref());
    tracing::trace!(query, ?engine, "search request");

    let results = search_with_fallback(query, engine, orchestrator).await;
    let comparison = analyze(query, &results);

    tracing::debug!(count = results.len(), "search request complete");
    Ok(SearchResponse {
        results,
        comparison,
    })
}
