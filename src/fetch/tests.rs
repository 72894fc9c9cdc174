// Fetch module tests.

use httptest::{all_of, matchers::*, responders::*, Expectation, Server};

use crate::config::Config;
use crate::error_handling::FetchError;
use crate::fetch::download_log;
use crate::initialization::init_client;

fn test_client() -> reqwest::Client {
    init_client(&Config::default()).expect("Failed to build test client")
}

#[tokio::test]
async fn test_download_returns_body_text() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/access.csv"))
            .respond_with(status_code(200).body("/a.png,01/01/2024 09:00:00,UA,200,1\n")),
    );

    let text = download_log(&test_client(), &server.url_str("/access.csv"))
        .await
        .expect("Download should succeed");
    assert_eq!(text, "/a.png,01/01/2024 09:00:00,UA,200,1\n");
}

#[tokio::test]
async fn test_download_sends_configured_user_agent() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/access.csv"),
            request::headers(contains(("user-agent", "log-auditor/2.1"))),
        ])
        .respond_with(status_code(200).body("")),
    );

    let config = Config {
        user_agent: "log-auditor/2.1".to_string(),
        ..Default::default()
    };
    let client = init_client(&config).expect("Failed to build test client");
    let text = download_log(&client, &server.url_str("/access.csv"))
        .await
        .expect("Download should succeed");
    assert!(text.is_empty());
}

#[tokio::test]
async fn test_download_non_success_status() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing.csv"))
            .respond_with(status_code(404).body("Not Found")),
    );

    let err = download_log(&test_client(), &server.url_str("/missing.csv"))
        .await
        .expect_err("404 should fail");
    match err {
        FetchError::Status { status, url } => {
            assert_eq!(status.as_u16(), 404);
            assert!(url.ends_with("/missing.csv"));
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_download_invalid_utf8_body() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/binary.csv"))
            .respond_with(status_code(200).body(vec![0x2f, 0xff, 0xfe, 0x2c])),
    );

    let err = download_log(&test_client(), &server.url_str("/binary.csv"))
        .await
        .expect_err("Invalid UTF-8 should fail");
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_download_invalid_url() {
    let err = download_log(&test_client(), "not a url")
        .await
        .expect_err("Invalid URL should fail");
    assert!(matches!(err, FetchError::Request(_)));
}
