//! HTTP client initialization.
//!
//! This module provides the function that builds the client used for the log
//! download.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, HTTP_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client for the log download.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - A fixed `HTTP_TIMEOUT_SECS` timeout
/// - Default redirect following
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
