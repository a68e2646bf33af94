//! Baidu adapter — last fallback, strongest for Chinese-language queries.
//!
//! Baidu links every result through its own `/link?url=...` redirect. The
//! redirect is made absolute but not followed, so result URLs stay on
//! `www.baidu.com`. The displayed URL under each result supplies the
//! source label.

use async_trait::async_trait;
use url::Url;

use crate::config::SearchConfig;
use crate::engine::ProviderAdapter;
use crate::error::SearchError;
use crate::extract::{extract_results, ExtractionProfile};
use crate::http;
use crate::types::{Provider, SearchResult};

const BAIDU_ORIGIN: &str = "https://www.baidu.com";

pub(crate) const PROFILE: ExtractionProfile = ExtractionProfile {
    provider: "Baidu",
    result: "div.c-container",
    title_link: "h3 a",
    snippet: ".c-abstract, .content-right_8Zs40",
    display_url: Some(".c-showurl, .c-color-gray"),
    resolve_url: resolve_redirect,
    fallback_source: "百度",
};

/// Baidu HTML search adapter.
#[derive(Debug, Clone, Default)]
pub struct BaiduAdapter {
    config: SearchConfig,
}

impl BaiduAdapter {
    /// Create an adapter using `config` for endpoint, headers and timeout.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

/// Make a Baidu result link absolute.
///
/// Relative redirect paths are joined onto the Baidu origin and plain-http
/// Baidu redirects are upgraded to https. Other absolute links pass through.
fn resolve_redirect(href: &str) -> Option<String> {
    if let Some(rest) = href.strip_prefix("http://www.baidu.com/") {
        return Some(format!("{BAIDU_ORIGIN}/{rest}"));
    }
    if let Ok(parsed) = Url::parse(href) {
        return matches!(parsed.scheme(), "http" | "https").then(|| href.to_string());
    }
    let base = Url::parse(BAIDU_ORIGIN).ok()?;
    base.join(href).ok().map(String::from)
}

#[async_trait]
impl ProviderAdapter for BaiduAdapter {
    async fn fetch(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        tracing::trace!(query, "Baidu search");
        let html = http::get_html(Provider::Baidu, &[("wd", query)], &self.config).await?;
        parse_baidu_html(&html, self.config.max_results)
    }

    fn provider(&self) -> Provider {
        Provider::Baidu
    }
}

/// Parse Baidu HTML response into search results.
pub(crate) fn parse_baidu_html(
    html: &str,
    max_results: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    extract_results(html, &PROFILE, max_results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderEndpoints;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MOCK_BAIDU_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div id="content_left">
<div class="result c-container">
  <h3 class="t"><a href="/link?url=abc123">Rust 程序设计语言</a></h3>
  <div class="c-abstract">一门赋予每个人构建可靠且高效软件能力的语言。</div>
  <a class="c-showurl">www.rust-lang.org/zh-CN/</a>
</div>
<div class="result c-container">
  <h3 class="t"><a href="http://www.baidu.com/link?url=def456">Rust 语言圣经</a></h3>
  <div class="c-abstract">Rust 语言中文教程。</div>
</div>
<div class="result c-container">
  <h3 class="t"><a>没有链接的结果</a></h3>
</div>
</div>
</body>
</html>"#;

    #[test]
    fn relative_redirect_becomes_absolute() {
        assert_eq!(
            resolve_redirect("/link?url=abc").as_deref(),
            Some("https://www.baidu.com/link?url=abc")
        );
    }

    #[test]
    fn http_redirect_is_upgraded() {
        assert_eq!(
            resolve_redirect("http://www.baidu.com/link?url=abc").as_deref(),
            Some("https://www.baidu.com/link?url=abc")
        );
    }

    #[test]
    fn direct_links_pass_through() {
        assert_eq!(
            resolve_redirect("https://baike.baidu.com/item/Rust").as_deref(),
            Some("https://baike.baidu.com/item/Rust")
        );
        assert!(resolve_redirect("javascript:void(0)").is_none());
    }

    #[test]
    fn parse_mock_html_returns_results() {
        let results = parse_baidu_html(MOCK_BAIDU_HTML, 10).expect("should parse");
        assert_eq!(results.len(), 2);

        assert_eq!(results[0].title, "Rust 程序设计语言");
        assert_eq!(results[0].url, "https://www.baidu.com/link?url=abc123");
        assert_eq!(results[0].source, "rust-lang.org");
        assert!(results[0].snippet.contains("高效"));

        // No displayed URL: the redirect host is the only label available.
        assert_eq!(results[1].url, "https://www.baidu.com/link?url=def456");
        assert_eq!(results[1].source, "baidu.com");
    }

    #[test]
    fn parse_empty_html_returns_empty() {
        let results = parse_baidu_html("<html><body></body></html>", 10).expect("should parse");
        assert!(results.is_empty());
    }

    #[test]
    fn provider_is_baidu() {
        assert_eq!(BaiduAdapter::default().provider(), Provider::Baidu);
    }

    const FIXTURE_BAIDU_HTML: &str = include_str!("../../test-data/baidu.html");

    #[test]
    fn fixture_results_point_at_baidu_redirects() {
        let results = parse_baidu_html(FIXTURE_BAIDU_HTML, 10).expect("fixture should parse");
        assert_eq!(results.len(), 4);
        for r in &results {
            assert!(r.url.starts_with("https://www.baidu.com/link?url="), "{}", r.url);
            assert!(!r.title.is_empty());
        }
        assert_eq!(results[0].source, "zh.wikipedia.org");
    }

    #[tokio::test]
    async fn fetch_uses_wd_parameter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/baidu"))
            .and(query_param("wd", "rust 教程"))
            .respond_with(ResponseTemplate::new(200).set_body_string(MOCK_BAIDU_HTML))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = BaiduAdapter::new(SearchConfig {
            endpoints: ProviderEndpoints::with_base_url(&server.uri()),
            ..Default::default()
        });
        let results = adapter.fetch("rust 教程").await.expect("should fetch");
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    #[ignore] // Live test — run with `cargo test -- --ignored`
    async fn live_baidu_search() {
        let results = BaiduAdapter::default()
            .fetch("rust 编程")
            .await
            .expect("live search should work");
        assert!(!results.is_empty());
    }
}
