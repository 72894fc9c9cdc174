// Shared test helpers for serving logs from a mock HTTP server.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use httptest::{matchers::*, responders::*, Expectation, Server};

use weblog_stats::Config;

/// Three-row log used throughout the tests: two image hits, two Chrome
/// requests, hours 09 (twice) and 10.
#[allow(dead_code)] // Used by other test files
pub const SAMPLE_LOG: &str = "\
/img/a.png,01/01/2024 09:00:00,Mozilla/5.0 Chrome/100.0 Safari/537,200,1024
/index.html,01/01/2024 09:15:00,Mozilla/5.0 Firefox/99.0,200,2048
/img/b.gif,01/01/2024 10:00:00,Mozilla/5.0 Chrome/100.0 Safari/537,200,512
";

/// Starts a mock server that answers one GET on `/weblog.csv` with `status`
/// and `body`. Returns the server (keep it alive for the test) and the log URL.
#[allow(dead_code)] // Used by other test files
pub fn serve_log(status: u16, body: impl Into<Vec<u8>>) -> (Server, String) {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/weblog.csv"))
            .respond_with(status_code(status).body(body.into())),
    );
    let url = server.url_str("/weblog.csv");
    (server, url)
}

/// Builds a run config pointed at `url`.
#[allow(dead_code)] // Used by other test files
pub fn config_for(url: &str, extra: bool) -> Config {
    Config {
        url: url.to_string(),
        extra,
        ..Default::default()
    }
}
