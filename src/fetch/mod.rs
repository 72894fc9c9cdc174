//! Log download.
//!
//! The download is a single buffered GET: no retries, no streaming, and no
//! caching. The whole body is read and decoded as UTF-8 before any parsing
//! starts.

use log::{debug, info};

use crate::error_handling::FetchError;

/// Downloads the log file at `url` and returns its contents as text.
///
/// # Arguments
///
/// * `client` - HTTP client built by `initialization::init_client`
/// * `url` - Location of the CSV log
///
/// # Errors
///
/// - `FetchError::Request` if the URL is invalid or the request or body read fails
/// - `FetchError::Status` if the server answers with a non-success status
/// - `FetchError::Decode` if the body is not valid UTF-8
pub async fn download_log(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    debug!("Requesting log from {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status,
            url: response.url().to_string(),
        });
    }

    let body = response.bytes().await?;
    info!("Downloaded {} bytes from {}", body.len(), url);

    let text = String::from_utf8(body.to_vec())?;
    Ok(text)
}

#[cfg(test)]
mod tests;
