//! Integration tests for `SearchClient::fetch_candidates`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use steelseek_scraper::{FetchError, SearchClient};

fn test_client(base_url: &str) -> SearchClient {
    SearchClient::new(base_url, 5, "steelseek-test/0.1").expect("failed to build SearchClient")
}

fn results_page(titles: &[&str]) -> String {
    let items: String = titles
        .iter()
        .map(|t| {
            format!(
                "<div class=\"result\"><h2 class=\"result__title\">\
                 <a class=\"result__a\" href=\"https://example.com\">{t}</a></h2></div>"
            )
        })
        .collect();
    format!("<html><body>{items}</body></html>")
}

#[tokio::test]
async fn fetch_candidates_extracts_headings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html"))
        .and(query_param("q", "میلگرد فروشنده آهن Tehran"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(results_page(&["آهن آلات صدر", "فولاد تجارت"])),
        )
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/html", server.uri()));
    let candidates = client
        .fetch_candidates("میلگرد فروشنده آهن Tehran")
        .await
        .expect("fetch should succeed");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].name, "آهن آلات صدر");
    assert_eq!(candidates[0].source, "web");
    assert_eq!(candidates[1].name, "فولاد تجارت");
}

#[tokio::test]
async fn fetch_candidates_caps_at_five() {
    let server = MockServer::start().await;
    let titles: Vec<String> = (1..=8).map(|i| format!("seller {i}")).collect();
    let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&title_refs)))
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/html", server.uri()));
    let candidates = client.fetch_candidates("rebar").await.expect("fetch");

    assert_eq!(candidates.len(), 5);
    assert_eq!(candidates[4].name, "seller 5");
}

#[tokio::test]
async fn fetch_candidates_empty_page_is_ok_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/html", server.uri()));
    let candidates = client.fetch_candidates("rebar").await.expect("fetch");
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn fetch_candidates_maps_server_error_to_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&format!("{}/html", server.uri()));
    let err = client.fetch_candidates("rebar").await.unwrap_err();
    assert!(
        matches!(err, FetchError::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus(500), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_candidates_unreachable_server_is_http_error() {
    // Nothing listens on this port; connection is refused immediately.
    let client = test_client("http://127.0.0.1:9/html");
    let err = client.fetch_candidates("rebar").await.unwrap_err();
    assert!(
        matches!(err, FetchError::Http(_)),
        "expected Http, got: {err:?}"
    );
}
