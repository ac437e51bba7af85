//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ChatlensError;
use crate::output::{OutputConfig, records};
use crate::sentiment::Sentiment;
use crate::table::ChatTable;

/// Writes the table to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2023-05-12 14:30:00", "sender": "Alice", "body": "Hello"},
///   {"timestamp": "2023-05-12 14:31:00", "sender": "Bob", "body": "Hi"}
/// ]
/// ```
pub fn write_json(
    table: &ChatTable,
    sentiments: Option<&[Sentiment]>,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    let json = to_json(table, sentiments, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the table to a pretty-printed JSON array.
pub fn to_json(
    table: &ChatTable,
    sentiments: Option<&[Sentiment]>,
    config: &OutputConfig,
) -> Result<String, ChatlensError> {
    let rows = records(table, sentiments, config)?;
    Ok(serde_json::to_string_pretty(&rows)?)
}
