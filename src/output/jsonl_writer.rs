//! JSON Lines (JSONL) output writer.
//!
//! One row per line, convenient for line-oriented tooling and for appending
//! several transcripts into one dataset.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ChatlensError;
use crate::output::{OutputConfig, records};
use crate::sentiment::Sentiment;
use crate::table::ChatTable;

/// Writes the table to a JSONL file.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2023-05-12 14:30:00","sender":"Alice","body":"Hello"}
/// {"timestamp":"2023-05-12 14:31:00","sender":"Bob","body":"Hi"}
/// ```
pub fn write_jsonl(
    table: &ChatTable,
    sentiments: Option<&[Sentiment]>,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    let rows = records(table, sentiments, config)?;
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    for row in &rows {
        let line = serde_json::to_string(row)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts the table to a JSONL string.
pub fn to_jsonl(
    table: &ChatTable,
    sentiments: Option<&[Sentiment]>,
    config: &OutputConfig,
) -> Result<String, ChatlensError> {
    let rows = records(table, sentiments, config)?;
    let mut out = String::new();

    for row in &rows {
        out.push_str(&serde_json::to_string(row)?);
        out.push('\n');
    }

    Ok(out)
}
