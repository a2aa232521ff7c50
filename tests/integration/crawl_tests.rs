//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! fetching and the full crawl-and-report cycle end-to-end.

use link_census::config::{Config, FetcherConfig, UserAgentConfig};
use link_census::crawler::{build_http_client, crawl, fetch_url, FetchResult};
use link_census::output::{build_report, format_report};
use link_census::CensusError;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!("<html><body>\n{}\n</body></html>", body),
        "text/html; charset=utf-8",
    )
}

fn client() -> reqwest::Client {
    build_http_client(&UserAgentConfig::default(), &FetcherConfig::default())
        .expect("Failed to build client")
}

/// Host and port of the mock server as they appear in normalized keys
fn host_key(server: &MockServer) -> String {
    let url = url::Url::parse(&server.uri()).expect("Failed to parse mock URI");
    format!(
        "{}:{}",
        url.host_str().expect("mock URI has a host"),
        url.port().expect("mock URI has a port")
    )
}

#[tokio::test]
async fn test_fetch_html_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header_exists("user-agent"))
        .respond_with(html("<p>Hello</p>"))
        .mount(&mock_server)
        .await;

    let result = fetch_url(&client(), &format!("{}/", mock_server.uri())).await;

    match result {
        FetchResult::Success {
            status_code,
            content_type,
            body,
            ..
        } => {
            assert_eq!(status_code, 200);
            assert!(content_type.contains("text/html"));
            assert!(body.contains("<p>Hello</p>"));
        }
        other => panic!("Expected Success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_non_html_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&mock_server)
        .await;

    let result = fetch_url(&client(), &format!("{}/data.json", mock_server.uri())).await;

    match result {
        FetchResult::ContentMismatch { content_type } => {
            assert!(content_type.starts_with("application/json"));
        }
        other => panic!("Expected ContentMismatch, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client();

    let broken = fetch_url(&client, &format!("{}/broken", mock_server.uri())).await;
    assert_eq!(broken, FetchResult::HttpError { status_code: 500 });

    // Unmatched requests get wiremock's default 404
    let missing = fetch_url(&client, &format!("{}/missing", mock_server.uri())).await;
    assert_eq!(missing, FetchResult::HttpError { status_code: 404 });
}

#[tokio::test]
async fn test_full_crawl_and_report() {
    let mock_server = MockServer::start().await;
    let host = host_key(&mock_server);

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<a href="/about">About</a>
            <a href="/about#team">Team</a>
            <a href="/missing">Missing</a>
            <a href="https://other.example/elsewhere">Elsewhere</a>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(html(
            r#"<nav><a href="/">Home</a></nav>
            <a href="/contact">Contact</a>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("%PDF", "application/pdf"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let table = crawl(&Config::default(), &mock_server.uri())
        .await
        .expect("Crawl failed");

    assert_eq!(table.get(&host), Some(2));
    assert_eq!(table.get(&format!("{}/about", host)), Some(2));
    assert_eq!(table.get(&format!("{}/contact", host)), Some(1));
    assert_eq!(table.get(&format!("{}/missing", host)), Some(1));
    assert!(!table.contains("other.example/elsewhere"));
    assert_eq!(table.total(), 6);

    let report = build_report(&table);
    let expected = format!(
        "Found total of 6 internal links.\n\
         ===================\n\
         All links with 2 inbound references:\n\
         {host}\n\
         {host}/about\n\
         ------------------------\n\
         All links with 1 inbound reference:\n\
         {host}/contact\n\
         {host}/missing\n\
         ------------------------\n",
        host = host
    );
    assert_eq!(format_report(&report), expected);
}

#[tokio::test]
async fn test_unreachable_seed_is_counted() {
    let mock_server = MockServer::start().await;
    let host = host_key(&mock_server);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let table = crawl(&Config::default(), &mock_server.uri())
        .await
        .expect("Crawl failed");

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(&host), Some(1));
}

#[tokio::test]
async fn test_invalid_seed_fails_before_fetching() {
    let result = crawl(&Config::default(), "exa mple").await;
    assert!(matches!(result, Err(CensusError::InvalidSeed { .. })));
}
