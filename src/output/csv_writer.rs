//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ChatlensError;
use crate::output::{OutputConfig, OutputRecord, records};
use crate::sentiment::Sentiment;
use crate::table::ChatTable;

/// Writes the table to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, [`Time`], `Sender`, `Message`, [`Sentiment`]
/// - Encoding: UTF-8
pub fn write_csv(
    table: &ChatTable,
    sentiments: Option<&[Sentiment]>,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    let csv = to_csv(table, sentiments, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

/// Converts the table to a CSV string.
pub fn to_csv(
    table: &ChatTable,
    sentiments: Option<&[Sentiment]>,
    config: &OutputConfig,
) -> Result<String, ChatlensError> {
    let rows = records(table, sentiments, config)?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(build_header(config, sentiments.is_some()))?;
    for row in &rows {
        writer.write_record(build_record(row))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatlensError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ChatlensError::utf8(e.utf8_error(), None))
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig, with_sentiment: bool) -> Vec<&'static str> {
    let mut header = vec!["Timestamp"];

    if config.include_raw_time {
        header.push("Time");
    }

    header.push("Sender");
    header.push("Message");

    if with_sentiment {
        header.push("Sentiment");
    }

    header
}

/// Build CSV record for a single row.
fn build_record<'a>(row: &'a OutputRecord<'_>) -> Vec<&'a str> {
    let mut record = vec![row.timestamp.as_str()];

    if let Some(time) = row.time {
        record.push(time);
    }

    record.push(row.sender);
    record.push(row.body);

    if let Some(sentiment) = row.sentiment {
        record.push(sentiment.as_str());
    }

    record
}
