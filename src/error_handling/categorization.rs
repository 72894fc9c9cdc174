//! Failure categorization.
//!
//! This module maps a failed run onto the message printed for the user and the
//! process exit code.

use crate::config::{EXIT_DOWNLOAD_FAILURE, EXIT_NO_DATA};

use super::types::{AnalysisError, FetchError};

/// A user-facing description of a failed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Process exit code
    pub code: i32,
    /// Message printed for the user
    pub message: String,
}

/// Categorizes a run error into a message and exit code.
///
/// The root cause is found by downcasting through any `anyhow` context layers:
/// - `FetchError` -> `Error downloading file: <details>`, exit 1
/// - `AnalysisError` -> `Error analyzing log: <details>`, exit 2
/// - anything else -> the full context chain, exit 1
pub fn describe_failure(error: &anyhow::Error) -> Failure {
    if let Some(fetch) = error.downcast_ref::<FetchError>() {
        return Failure {
            code: EXIT_DOWNLOAD_FAILURE,
            message: format!("Error downloading file: {}", fetch),
        };
    }

    if let Some(analysis) = error.downcast_ref::<AnalysisError>() {
        return Failure {
            code: EXIT_NO_DATA,
            message: format!("Error analyzing log: {}", analysis),
        };
    }

    Failure {
        code: EXIT_DOWNLOAD_FAILURE,
        message: format!("weblog_stats error: {:#}", error),
    }
}
