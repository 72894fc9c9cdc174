//! Error type definitions.
//!
//! This module defines the error types raised by each stage of a run.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while downloading the log file.
///
/// Any of these ends the run with the download failure exit code.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure: bad URL, connection refused, timeout, or a body read error.
    #[error("{0}")]
    Request(#[from] ReqwestError),

    /// The server answered with a non-success status.
    #[error("HTTP Error {status}: {url}")]
    Status {
        /// Status returned by the server
        status: StatusCode,
        /// URL that was requested
        url: String,
    },

    /// The response body is not valid UTF-8 text.
    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

/// Errors raised while reading CSV rows out of the downloaded text.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The CSV reader rejected the input.
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised while aggregating records.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    /// No records were available, so there is no most popular browser.
    #[error("no records available to determine the most popular browser")]
    NoData,
}
