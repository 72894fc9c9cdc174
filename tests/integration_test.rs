//! Integration tests for the weblog_stats pipeline.
//!
//! These tests drive `run_report()` against a mock HTTP server (`httptest`), so
//! they exercise the download, parse, aggregate, and report stages together
//! without making real network requests.

mod helpers;

use helpers::{config_for, serve_log, SAMPLE_LOG};
use weblog_stats::{describe_failure, run_report, AnalysisError, FetchError};

#[tokio::test]
async fn test_report_without_extra() {
    let (_server, url) = serve_log(200, SAMPLE_LOG);

    let report = run_report(&config_for(&url, false))
        .await
        .expect("Run should succeed");

    assert_eq!(report.records, 3);
    assert_eq!(
        report.lines,
        vec![
            "Image requests account for 66.7% of all requests (2/3)",
            "Most popular browser: Chrome (2 hits)",
        ]
    );
}

#[tokio::test]
async fn test_report_with_extra() {
    let (_server, url) = serve_log(200, SAMPLE_LOG);

    let report = run_report(&config_for(&url, true))
        .await
        .expect("Run should succeed");

    assert_eq!(
        report.lines,
        vec![
            "Image requests account for 66.7% of all requests (2/3)",
            "Most popular browser: Chrome (2 hits)",
            "Hour 09 has 2 hits",
            "Hour 10 has 1 hits",
        ]
    );
}

#[tokio::test]
async fn test_short_rows_do_not_count() {
    let body = format!("{}/img/c.png,01/01/2024 11:00:00,Chrome\n", SAMPLE_LOG);
    let (_server, url) = serve_log(200, body);

    let report = run_report(&config_for(&url, true))
        .await
        .expect("Run should succeed");

    assert_eq!(report.records, 3);
    assert_eq!(
        report.lines[0],
        "Image requests account for 66.7% of all requests (2/3)"
    );
    assert!(!report.lines.iter().any(|l| l.starts_with("Hour 11")));
}

#[tokio::test]
async fn test_unparseable_timestamps_only_affect_hours() {
    let body = "\
/a.jpg,bad-date,Mozilla/5.0 Firefox/99.0,200,1
/b.html,12/25/2023 14:05:09,Mozilla/5.0 Firefox/99.0,200,1
/c.html,12/25/2023 14:35:00,Mozilla/4.0 (compatible; MSIE 8.0),200,1
";
    let (_server, url) = serve_log(200, body);

    let report = run_report(&config_for(&url, true))
        .await
        .expect("Run should succeed");

    assert_eq!(
        report.lines,
        vec![
            "Image requests account for 33.3% of all requests (1/3)",
            "Most popular browser: Firefox (2 hits)",
            "Hour 14 has 2 hits",
        ]
    );
}

#[tokio::test]
async fn test_not_found_is_download_failure() {
    let (_server, url) = serve_log(404, "Not Found");

    let err = run_report(&config_for(&url, false))
        .await
        .expect_err("404 should fail the run");

    assert!(matches!(
        err.downcast_ref::<FetchError>(),
        Some(FetchError::Status { .. })
    ));
    let failure = describe_failure(&err);
    assert_eq!(failure.code, 1);
    assert!(failure.message.starts_with("Error downloading file: HTTP Error 404"));
}

#[tokio::test]
async fn test_invalid_utf8_is_download_failure() {
    let (_server, url) = serve_log(200, vec![b'/', b'a', 0xff, b',', b'\n']);

    let err = run_report(&config_for(&url, false))
        .await
        .expect_err("Invalid UTF-8 should fail the run");

    assert!(matches!(
        err.downcast_ref::<FetchError>(),
        Some(FetchError::Decode(_))
    ));
    assert_eq!(describe_failure(&err).code, 1);
}

#[tokio::test]
async fn test_unreachable_host_is_download_failure() {
    // Port 1 on loopback is not expected to be listening
    let config = config_for("http://127.0.0.1:1/weblog.csv", false);

    let err = run_report(&config)
        .await
        .expect_err("Connection failure should fail the run");

    let failure = describe_failure(&err);
    assert_eq!(failure.code, 1);
    assert!(failure.message.starts_with("Error downloading file: "));
}

#[tokio::test]
async fn test_empty_log_is_no_data() {
    let (_server, url) = serve_log(200, "");

    let err = run_report(&config_for(&url, false))
        .await
        .expect_err("Empty log has no most popular browser");

    assert_eq!(
        err.downcast_ref::<AnalysisError>(),
        Some(&AnalysisError::NoData)
    );
    let failure = describe_failure(&err);
    assert_eq!(failure.code, 2);
    assert_eq!(
        failure.message,
        "Error analyzing log: no records available to determine the most popular browser"
    );
}

#[tokio::test]
async fn test_only_short_rows_is_no_data() {
    let (_server, url) = serve_log(200, "/a.png,01/01/2024 09:00:00,Chrome\n\n");

    let err = run_report(&config_for(&url, true))
        .await
        .expect_err("No accepted rows means no data");

    assert_eq!(describe_failure(&err).code, 2);
}
