//! Shared HTTP plumbing with User-Agent rotation for provider requests.
//!
//! Provides a configured [`reqwest::Client`] with browser-like headers,
//! cookie support, and rotating User-Agent strings to avoid bot detection.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::Provider;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings, rotated per request.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15",
];

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Build a [`reqwest::Client`] configured for provider scraping.
///
/// The client has:
/// - Cookie store enabled
/// - Timeout from config
/// - Random User-Agent from built-in rotation list (or custom if configured)
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Network`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Network(format!("failed to build HTTP client: {e}")))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

/// GET a provider result page and return its body.
///
/// Non-success statuses become [`SearchError::Status`]; transport failures
/// become [`SearchError::Timeout`] or [`SearchError::Network`].
pub async fn get_html(
    provider: Provider,
    params: &[(&str, &str)],
    config: &SearchConfig,
) -> Result<String, SearchError> {
    let client = build_client(config)?;
    let endpoint = config.endpoints.for_provider(provider);

    let response = client
        .get(endpoint)
        .query(params)
        .header("Accept", ACCEPT_HTML)
        .header("Accept-Language", config.accept_language.as_str())
        .send()
        .await
        .map_err(|e| transport_error(provider, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Status {
            provider: provider.name().to_string(),
            status: status.as_u16(),
        });
    }

    let html = response
        .text()
        .await
        .map_err(|e| transport_error(provider, &e))?;

    tracing::trace!(%provider, bytes = html.len(), "response received");
    Ok(html)
}

fn transport_error(provider: Provider, err: &reqwest::Error) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout(format!("{provider} request timed out: {err}"))
    } else {
        SearchError::Network(format!("{provider} request failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderEndpoints;
    use wiremock::matchers::{headers, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn random_user_agent_returns_valid_ua() {
        let ua = random_user_agent();
        assert!(USER_AGENTS.contains(&ua));
        assert!(ua.contains("Mozilla/5.0"));
    }

    #[test]
    fn build_client_with_default_config() {
        let config = SearchConfig::default();
        assert!(build_client(&config).is_ok());
    }

    #[test]
    fn build_client_with_custom_ua() {
        let config = SearchConfig {
            user_agent: Some("CustomBot/1.0".into()),
            ..Default::default()
        };
        assert!(build_client(&config).is_ok());
    }

    #[tokio::test]
    async fn get_html_sends_query_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/bing"))
            .and(query_param("q", "rust"))
            // Matchers compare comma-separated header values one by one.
            .and(headers("Accept-Language", vec!["zh-CN", "zh;q=0.9", "en;q=0.8"]))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let config = SearchConfig {
            endpoints: ProviderEndpoints::with_base_url(&server.uri()),
            ..Default::default()
        };
        let body = get_html(Provider::Bing, &[("q", "rust")], &config)
            .await
            .expect("request should succeed");
        assert_eq!(body, "<html></html>");
    }

    #[tokio::test]
    async fn get_html_maps_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/baidu"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let config = SearchConfig {
            endpoints: ProviderEndpoints::with_base_url(&server.uri()),
            ..Default::default()
        };
        let err = get_html(Provider::Baidu, &[("wd", "rust")], &config)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "status");
        assert_eq!(err.to_string(), "Baidu returned HTTP 403");
    }

    #[tokio::test]
    async fn get_html_maps_connection_failure() {
        let config = SearchConfig {
            // Port 9 (discard) is not listening on loopback in test environments.
            endpoints: ProviderEndpoints::with_base_url("http://127.0.0.1:9"),
            timeout_seconds: 2,
            ..Default::default()
        };
        let err = get_html(Provider::DuckDuckGo, &[("q", "rust")], &config)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SearchError::Network(_) | SearchError::Timeout(_)
        ));
    }
}
