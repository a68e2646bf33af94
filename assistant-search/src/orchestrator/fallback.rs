//! Sequential fallback chain: primary provider first, then Bing, then Baidu.
//!
//! Providers are tried one at a time until one of them yields at least
//! [`SUFFICIENT_RESULTS`] results. Result sets are never merged: a later
//! provider replaces the current best set only when it returns strictly
//! more results, so the final list always comes from a single provider.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::config::SearchConfig;
use crate::engine::ProviderAdapter;
use crate::engines::{BaiduAdapter, BingAdapter, DuckDuckGoAdapter};
use crate::types::{EngineSelector, Provider, SearchResult, MAX_PROVIDER_RESULTS};

/// A result set this large stops the fallback chain.
pub const SUFFICIENT_RESULTS: usize = 3;

/// Fallback providers in priority order. The primary is skipped.
const FALLBACK_ORDER: &[Provider] = &[Provider::Bing, Provider::Baidu];

/// Chooses a primary provider for the requested engine and falls back to
/// the remaining providers when it returns too few results.
#[derive(Clone)]
pub struct FallbackOrchestrator {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
}

impl FallbackOrchestrator {
    /// Build an orchestrator over the live DuckDuckGo, Bing and Baidu adapters.
    pub fn new(config: &SearchConfig) -> Self {
        let adapters: Vec<Arc<dyn ProviderAdapter>> = vec![
            Arc::new(DuckDuckGoAdapter::new(config.clone())) as Arc<dyn ProviderAdapter>,
            Arc::new(BingAdapter::new(config.clone())),
            Arc::new(BaiduAdapter::new(config.clone())),
        ];
        Self::with_adapters(adapters)
    }

    /// Build an orchestrator over caller-supplied adapters.
    ///
    /// Adapters are looked up by [`ProviderAdapter::provider`]; a provider
    /// with no adapter is treated as returning nothing.
    pub fn with_adapters(adapters: Vec<Arc<dyn ProviderAdapter>>) -> Self {
        Self { adapters }
    }

    fn adapter(&self, provider: Provider) -> Option<&Arc<dyn ProviderAdapter>> {
        self.adapters.iter().find(|a| a.provider() == provider)
    }

    /// Run the fallback chain for `query`.
    ///
    /// Never fails: provider errors and panics count as an empty result set.
    /// The returned set holds 0 to 10 results from a single provider.
    pub async fn search(&self, query: &str, engine: EngineSelector) -> Vec<SearchResult> {
        let primary = engine.primary();
        let mut best = self.attempt(primary, query).await;

        if best.len() < SUFFICIENT_RESULTS {
            tracing::info!(
                %primary,
                count = best.len(),
                "primary provider returned too few results, trying fallbacks"
            );

            for &provider in FALLBACK_ORDER.iter().filter(|p| **p != primary) {
                let candidate = self.attempt(provider, query).await;
                if candidate.len() > best.len() {
                    tracing::debug!(
                        %provider,
                        count = candidate.len(),
                        "fallback provider adopted"
                    );
                    best = candidate;
                }
                if best.len() >= SUFFICIENT_RESULTS {
                    break;
                }
            }
        }

        best
    }

    /// Invoke one provider, absorbing every failure mode into an empty set.
    async fn attempt(&self, provider: Provider, query: &str) -> Vec<SearchResult> {
        let Some(adapter) = self.adapter(provider) else {
            tracing::debug!(%provider, "no adapter registered");
            return Vec::new();
        };

        match AssertUnwindSafe(adapter.fetch(query)).catch_unwind().await {
            Ok(Ok(mut results)) => {
                results.truncate(MAX_PROVIDER_RESULTS);
                tracing::debug!(%provider, count = results.len(), "provider returned results");
                results
            }
            Ok(Err(err)) => {
                tracing::warn!(%provider, kind = err.kind(), error = %err, "provider query failed");
                Vec::new()
            }
            Err(_) => {
                tracing::error!(%provider, kind = "panic", "provider adapter panicked");
                Vec::new()
            }
        }
    }
}
