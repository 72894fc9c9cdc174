//! Aggregation over a record set.
//!
//! Each pass walks the full record set on its own with a private tally:
//! - image pass: how many requests fetched an image
//! - browser pass: which browser sent the most requests
//! - hour pass (optional): requests per hour of day
//!
//! `aggregate` runs them in that order, matching the order of the report.

mod tally;
mod types;

use log::debug;

use crate::classify::{detect_browser, extract_hour, is_image_request, Browser};
use crate::error_handling::AnalysisError;
use crate::records::RecordSet;

// Re-export public API
pub use tally::FrequencyTally;
pub use types::{AggregateReport, BrowserSummary, HourlyHits, ImageSummary};

/// Counts image requests against all records.
pub fn summarize_images(records: &RecordSet) -> ImageSummary {
    let image_hits = records
        .iter()
        .filter(|record| is_image_request(record.request_path()))
        .count();
    ImageSummary::new(image_hits, records.len())
}

/// Finds the browser with the most requests.
///
/// When several browsers share the highest count, the one that appeared first
/// in the log wins.
///
/// # Errors
///
/// Returns `AnalysisError::NoData` for an empty record set.
pub fn most_popular_browser(records: &RecordSet) -> Result<BrowserSummary, AnalysisError> {
    let tally: FrequencyTally<Browser> = records
        .iter()
        .map(|record| detect_browser(record.user_agent()))
        .collect();
    debug!("Browser tally: {:?}", tally);

    let (browser, hits) = tally.most_common().ok_or(AnalysisError::NoData)?;
    Ok(BrowserSummary { browser, hits })
}

/// Counts requests per hour of day. Records with unparseable timestamps are left out.
pub fn hits_by_hour(records: &RecordSet) -> HourlyHits {
    let tally: FrequencyTally<u8> = records
        .iter()
        .filter_map(|record| extract_hour(record.timestamp()))
        .collect();
    HourlyHits::from_entries(tally.into_entries())
}

/// Runs every pass over `records`.
///
/// The hour pass only runs when `include_hourly` is set.
///
/// # Errors
///
/// Returns `AnalysisError::NoData` if `records` is empty.
pub fn aggregate(
    records: &RecordSet,
    include_hourly: bool,
) -> Result<AggregateReport, AnalysisError> {
    let images = summarize_images(records);
    debug!(
        "Image pass: {}/{} ({:.3}%)",
        images.image_hits, images.total, images.percentage
    );

    let top_browser = most_popular_browser(records)?;
    debug!(
        "Browser pass: {} with {} hits",
        top_browser.browser, top_browser.hits
    );

    let hourly = include_hourly.then(|| hits_by_hour(records));
    if let Some(hourly) = &hourly {
        debug!("Hour pass: {} distinct hours", hourly.entries().len());
    }

    Ok(AggregateReport {
        images,
        top_browser,
        hourly,
    })
}
