//! Access log records.
//!
//! A record is built from one CSV row of the downloaded log. Only rows with at
//! least `MIN_RECORD_FIELDS` columns become records; shorter rows (including
//! blank lines) are dropped before a record exists.

use csv::{ReaderBuilder, StringRecord};

use crate::config::{FIELD_REQUEST_PATH, FIELD_TIMESTAMP, FIELD_USER_AGENT, MIN_RECORD_FIELDS};
use crate::error_handling::ParseError;

/// One accepted row of the access log.
///
/// Field values are kept verbatim: no trimming and no case normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    request_path: String,
    timestamp: String,
    user_agent: String,
}

impl Record {
    /// Builds a record from a CSV row, or `None` if the row is too short.
    pub fn from_row(row: &StringRecord) -> Option<Self> {
        if row.len() < MIN_RECORD_FIELDS {
            return None;
        }
        Some(Self {
            request_path: row.get(FIELD_REQUEST_PATH)?.to_string(),
            timestamp: row.get(FIELD_TIMESTAMP)?.to_string(),
            user_agent: row.get(FIELD_USER_AGENT)?.to_string(),
        })
    }

    /// Requested path (column 0)
    pub fn request_path(&self) -> &str {
        &self.request_path
    }

    /// Raw timestamp text (column 1)
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// User-Agent header value (column 2)
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Records in the order they appear in the log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Number of accepted records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Parses downloaded log text into records.
///
/// The text is read as headerless CSV with standard quoting rules. Rows may
/// have differing widths; rows shorter than `MIN_RECORD_FIELDS` are skipped
/// silently.
///
/// # Errors
///
/// Returns `ParseError::Csv` if the CSV reader rejects the input.
pub fn parse_records(raw_text: &str) -> Result<RecordSet, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw_text.as_bytes());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        if let Some(record) = Record::from_row(&row) {
            records.push(record);
        }
    }

    log::debug!("Parsed {} records", records.len());
    Ok(RecordSet { records })
}
