//! Output writers for parsed tables.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of rows - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one row per line - requires `json-output` feature
//!
//! Every writer takes the table, an optional sentiment column aligned with
//! its rows (see [`SentimentAnalyzer::analyze_table`](crate::sentiment::SentimentAnalyzer::analyze_table))
//! and an [`OutputConfig`].
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::normalizer::normalize;
//! use chatlens::output::{OutputConfig, to_csv};
//!
//! let table = normalize("12/05/23 14:30 - Alice: Hello!");
//! let csv = to_csv(&table, None, &OutputConfig::new())?;
//!
//! assert_eq!(csv, "Timestamp;Sender;Message\n2023-05-12 14:30:00;Alice;Hello\n");
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

use serde::Serialize;

use crate::error::ChatlensError;
use crate::sentiment::Sentiment;
use crate::table::ChatTable;

/// Timestamp layout used by every writer.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Controls which optional columns are written.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Include the time token as written in the export
    pub include_raw_time: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_raw_time(mut self) -> Self {
        self.include_raw_time = true;
        self
    }
}

/// One output row.
#[derive(Debug, Serialize)]
pub(crate) struct OutputRecord<'a> {
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<&'a str>,
    pub sender: &'a str,
    pub body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/// Pairs table rows with their sentiment, if a column was supplied.
///
/// A column whose length differs from the table is refused rather than
/// silently misaligned.
pub(crate) fn records<'a>(
    table: &'a ChatTable,
    sentiments: Option<&'a [Sentiment]>,
    config: &OutputConfig,
) -> Result<Vec<OutputRecord<'a>>, ChatlensError> {
    if let Some(column) = sentiments {
        if column.len() != table.len() {
            return Err(ChatlensError::invalid_format(
                "output",
                format!(
                    "sentiment column has {} entries for {} rows",
                    column.len(),
                    table.len()
                ),
            ));
        }
    }

    Ok(table
        .iter()
        .enumerate()
        .map(|(i, msg)| OutputRecord {
            timestamp: msg.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            time: config.include_raw_time.then_some(msg.time.as_str()),
            sender: &msg.sender,
            body: &msg.body,
            sentiment: sentiments.map(|column| column[i]),
        })
        .collect())
}
