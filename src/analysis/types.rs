//! Aggregate result types.

use crate::classify::Browser;

/// Share of requests that fetched an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSummary {
    /// Records whose request path names an image
    pub image_hits: usize,
    /// All accepted records
    pub total: usize,
    /// `image_hits / total * 100`, or 0 when there are no records
    pub percentage: f64,
}

impl ImageSummary {
    pub fn new(image_hits: usize, total: usize) -> Self {
        // Cast is fine for percentage display: counts far below 2^53
        #[allow(clippy::cast_precision_loss)]
        let percentage = if total > 0 {
            (image_hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        Self {
            image_hits,
            total,
            percentage,
        }
    }
}

/// The browser with the most requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserSummary {
    pub browser: Browser,
    pub hits: usize,
}

/// Hits per hour of day, for hours that appear at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourlyHits {
    entries: Vec<(u8, usize)>,
}

impl HourlyHits {
    /// Wraps `(hour, hits)` pairs given in first-seen order.
    pub fn from_entries(entries: Vec<(u8, usize)>) -> Self {
        Self { entries }
    }

    /// `(hour, hits)` pairs in the order each hour was first seen.
    pub fn entries(&self) -> &[(u8, usize)] {
        &self.entries
    }

    /// Hits for `hour`, zero if it never appeared.
    #[cfg(test)]
    pub(crate) fn hits(&self, hour: u8) -> usize {
        self.entries
            .iter()
            .find(|(h, _)| *h == hour)
            .map(|(_, hits)| *hits)
            .unwrap_or(0)
    }

    /// Entries sorted by hits, busiest first. Equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(u8, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the report needs from one aggregation run.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateReport {
    pub images: ImageSummary,
    pub top_browser: BrowserSummary,
    /// Present only when the hourly breakdown was requested
    pub hourly: Option<HourlyHits>,
}
