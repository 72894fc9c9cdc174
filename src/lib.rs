//! weblog_stats library: access log summary reporting
//!
//! This library downloads a web server access log published as CSV, and
//! reports the share of image requests, the most popular browser, and
//! optionally the number of hits per hour of day.
//!
//! # Example
//!
//! ```no_run
//! use weblog_stats::{run_report, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "https://example.com/weblog.csv".to_string(),
//!     extra: true,
//!     ..Default::default()
//! };
//!
//! let report = run_report(&config).await?;
//! for line in &report.lines {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The pipeline stages are also public, so a log already in memory can be
//! analyzed without the download step:
//!
//! ```
//! use weblog_stats::{aggregate, format_report, parse_records};
//!
//! let text = "/logo.png,01/01/2024 09:00:00,Mozilla/5.0 Chrome/100.0,200,512\n";
//! let records = parse_records(text).unwrap();
//! let report = aggregate(&records, false).unwrap();
//! assert_eq!(
//!     format_report(&report, false)[1],
//!     "Most popular browser: Chrome (1 hits)"
//! );
//! ```

pub mod analysis;
pub mod classify;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod records;
pub mod report;

// Re-export public API
pub use analysis::{aggregate, AggregateReport};
pub use classify::{detect_browser, extract_hour, is_image_request, Browser};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{describe_failure, AnalysisError, FetchError, Failure, ParseError};
pub use records::{parse_records, Record, RecordSet};
pub use report::format_report;
pub use run::{run_report, RunReport};

// Internal run module (drives the fetch -> parse -> aggregate -> report pipeline)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::analysis::aggregate;
    use crate::config::Config;
    use crate::fetch::download_log;
    use crate::initialization::init_client;
    use crate::records::parse_records;
    use crate::report::format_report;

    /// Results of a completed run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Report lines, in print order
        pub lines: Vec<String>,
        /// Number of log rows accepted as records
        pub records: usize,
    }

    /// Downloads the log at `config.url` and builds the report.
    ///
    /// Every stage runs to completion before the next starts: the whole body
    /// is downloaded, then parsed, then aggregated, then formatted.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The HTTP client cannot be built
    /// - The download fails (`FetchError` in the chain)
    /// - The log holds no usable records (`AnalysisError::NoData` in the chain)
    ///
    /// Use `describe_failure` to turn the error into a message and exit code.
    pub async fn run_report(config: &Config) -> Result<RunReport> {
        let client = init_client(config).context("Failed to initialize HTTP client")?;

        let raw_text = download_log(&client, &config.url)
            .await
            .context("Failed to download log")?;

        let records = parse_records(&raw_text).context("Failed to parse log")?;
        info!("Accepted {} records", records.len());

        let report = aggregate(&records, config.extra).context("Failed to aggregate records")?;
        let lines = format_report(&report, config.extra);

        Ok(RunReport {
            lines,
            records: records.len(),
        })
    }
}
