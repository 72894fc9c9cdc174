//! Error handling for the download, parse, and analysis stages.
//!
//! This module provides:
//! - Typed errors for each pipeline stage
//! - Mapping of a failed run onto a user-facing message and process exit code
//!
//! Lenient conditions (short CSV rows, unparseable timestamps) are not errors
//! and never reach this module; the stages that meet them skip the input.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{describe_failure, Failure};
pub use types::{AnalysisError, FetchError, InitializationError, ParseError};
