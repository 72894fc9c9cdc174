//! Configuration constants.
//!
//! This module defines the constants used throughout the application, covering
//! the download step, the shape of an accepted log row, and process exit codes.

/// HTTP request timeout in seconds for the log download.
/// The download is a single request with no retries, so this is the only bound
/// on how long a run can hang on an unresponsive server.
pub const HTTP_TIMEOUT_SECS: u64 = 60;

/// Default User-Agent string for the log download request.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("weblog_stats/", env!("CARGO_PKG_VERSION"));

// Log row shape
/// Minimum number of CSV fields a row needs before it becomes a record.
/// Rows with fewer fields are dropped without being counted.
pub const MIN_RECORD_FIELDS: usize = 5;
/// Column holding the request path
pub const FIELD_REQUEST_PATH: usize = 0;
/// Column holding the request timestamp
pub const FIELD_TIMESTAMP: usize = 1;
/// Column holding the User-Agent header value
pub const FIELD_USER_AGENT: usize = 2;

/// Timestamp layout of the log's second column (`MM/DD/YYYY HH:MM:SS`, 24-hour clock).
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// File extensions (matched case-insensitively) that mark a request as an image.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

// Process exit codes
/// Exit code when the log could not be downloaded
pub const EXIT_DOWNLOAD_FAILURE: i32 = 1;
/// Exit code when the log held no usable records
pub const EXIT_NO_DATA: i32 = 2;
