//! Report formatting.
//!
//! Turns an `AggregateReport` into the lines printed on stdout.

use crate::analysis::{AggregateReport, BrowserSummary, ImageSummary};

fn image_line(images: &ImageSummary) -> String {
    format!(
        "Image requests account for {:.1}% of all requests ({}/{})",
        images.percentage, images.image_hits, images.total
    )
}

fn browser_line(top: &BrowserSummary) -> String {
    format!("Most popular browser: {} ({} hits)", top.browser, top.hits)
}

fn hour_line(hour: u8, hits: usize) -> String {
    format!("Hour {:02} has {} hits", hour, hits)
}

/// Formats the report lines.
///
/// Always produces the image line and the browser line. With `include_hourly`,
/// one line per hour follows, busiest hour first.
pub fn format_report(report: &AggregateReport, include_hourly: bool) -> Vec<String> {
    let mut lines = vec![
        image_line(&report.images),
        browser_line(&report.top_browser),
    ];

    if include_hourly {
        if let Some(hourly) = &report.hourly {
            lines.extend(
                hourly
                    .ranked()
                    .into_iter()
                    .map(|(hour, hits)| hour_line(hour, hits)),
            );
        }
    }

    lines
}
