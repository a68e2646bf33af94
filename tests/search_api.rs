//! End-to-end tests for the HTTP search API.
//!
//! The server runs on an ephemeral localhost port with every search
//! provider pointed at a wiremock server, so no external network is used.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use assistant_search::{ProviderEndpoints, SearchConfig};
use myassistant::{SearchServer, ServerConfig};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BING_PAGE: &str = r#"<html><body><ol id="b_results">
<li class="b_algo"><h2><a href="https://en.wikipedia.org/wiki/Rust">Rust - Wikipedia</a></h2><div class="b_caption"><p>Rust is a programming language.</p></div></li>
<li class="b_algo"><h2><a href="https://github.com/rust-lang/rust">rust-lang/rust – GitHub</a></h2><div class="b_caption"><p>Source repository.</p></div></li>
<li class="b_algo"><h2><a href="https://www.rust-lang.org/">Rust Programming Language</a></h2><div class="b_caption"><p>Reliable software.</p></div></li>
</ol></body></html>"#;

async fn start(mock: &MockServer) -> SearchServer {
    let config = ServerConfig {
        host: "127.0.0.1".into(),
        port: 0,
        search: SearchConfig {
            timeout_seconds: 5,
            user_agent: Some("TestBot/1.0".into()),
            endpoints: ProviderEndpoints::with_base_url(&mock.uri()),
            ..Default::default()
        },
    };
    SearchServer::start(&config).await.expect("server should start")
}

async fn mount(mock: &MockServer, route: &str, template: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .expect(calls)
        .mount(mock)
        .await;
}

#[tokio::test]
async fn health_reports_ok() {
    let mock = MockServer::start().await;
    let server = start(&mock).await;

    let body: Value = reqwest::get(format!("http://{}/api/health", server.addr()))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn search_returns_contract_fields() {
    let mock = MockServer::start().await;
    mount(&mock, "/duckduckgo", ResponseTemplate::new(500), 1).await;
    mount(&mock, "/bing", ResponseTemplate::new(200).set_body_string(BING_PAGE), 1).await;
    mount(&mock, "/baidu", ResponseTemplate::new(200), 0).await;
    let server = start(&mock).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/api/search", server.addr()))
        .json(&json!({ "query": "rust" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["source"], "en.wikipedia.org");
    assert_eq!(results[2]["source"], "rust-lang.org");

    assert_eq!(body["similarities"].as_array().unwrap().len(), 3);
    assert_eq!(body["differences"].as_array().unwrap().len(), 3);
    assert_eq!(body["highlightedAI"], json!(["rust"]));
    assert_eq!(
        body["highlightedSearch"],
        json!(["Rust", "rust", "Rust Programming Lan"])
    );
}

#[tokio::test]
async fn empty_query_is_a_client_error() {
    let mock = MockServer::start().await;
    mount(&mock, "/duckduckgo", ResponseTemplate::new(200), 0).await;
    mount(&mock, "/bing", ResponseTemplate::new(200), 0).await;
    mount(&mock, "/baidu", ResponseTemplate::new(200), 0).await;
    let server = start(&mock).await;

    for payload in [json!({ "query": "" }), json!({ "query": "  " }), json!({})] {
        let response = reqwest::Client::new()
            .post(format!("http://{}/api/search", server.addr()))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "query is required");
    }
}

#[tokio::test]
async fn provider_outage_still_returns_results() {
    let mock = MockServer::start().await;
    mount(&mock, "/duckduckgo", ResponseTemplate::new(403), 1).await;
    mount(&mock, "/bing", ResponseTemplate::new(429), 1).await;
    mount(&mock, "/baidu", ResponseTemplate::new(503), 1).await;
    let server = start(&mock).await;

    let response = reqwest::Client::new()
        .post(format!("http://{}/api/search", server.addr()))
        .json(&json!({ "query": "python error handling", "engine": "google" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    let sources: Vec<&str> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["source"].as_str().unwrap())
        .collect();
    assert!((1..=8).contains(&sources.len()));
    assert_eq!(&sources[..3], &["runoob.com", "stackoverflow.com", "github.com"]);
}

#[tokio::test]
async fn malformed_bodies_get_json_errors() {
    let mock = MockServer::start().await;
    mount(&mock, "/duckduckgo", ResponseTemplate::new(200), 0).await;
    mount(&mock, "/bing", ResponseTemplate::new(200), 0).await;
    mount(&mock, "/baidu", ResponseTemplate::new(200), 0).await;
    let server = start(&mock).await;
    let url = format!("http://{}/api/search", server.addr());

    let response = reqwest::Client::new()
        .post(&url)
        .json(&json!({ "query": 5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));

    let response = reqwest::Client::new()
        .post(&url)
        .header("Content-Type", "text/plain")
        .body("rust")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "query is required");
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let mock = MockServer::start().await;
    let server = start(&mock).await;

    let response = reqwest::Client::new()
        .get(format!("http://{}/api/health", server.addr()))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
