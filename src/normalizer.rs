//! Chat normalizer: a whole transcript to a [`ChatTable`].
//!
//! The normalizer splits the document on line feeds, runs every line through
//! the [`LineParser`] and keeps the successes in their original order.
//! Rejected lines are dropped without aborting; only a document that cannot
//! be read or decoded is an error.
//!
//! # Example
//!
//! ```rust
//! use chatlens::normalizer::ChatNormalizer;
//!
//! let transcript = "\
//! 12/05/23 14:30 - Alice: Hello!
//! 12/05/23 14:31 - Bob: <Media omitted>
//! and a continuation line
//! 12/05/23 14:32 - Bob: Hi Alice";
//!
//! let normalizer = ChatNormalizer::new();
//! let (table, report) = normalizer.normalize_with_report(transcript);
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(report.parsed, 2);
//! assert_eq!(report.rejected(), 2);
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::parser::{LineParser, Rejection};
use crate::table::ChatTable;

/// Per-document counts of what happened to each line.
///
/// Blank lines are counted in `blank` only; every other line is either
/// `parsed` or counted under exactly one [`Rejection`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RejectionReport {
    /// Lines in the document, blank ones included.
    pub total_lines: usize,
    /// Lines that became table rows.
    pub parsed: usize,
    /// Empty or whitespace-only lines.
    pub blank: usize,
    counts: BTreeMap<Rejection, usize>,
}

impl RejectionReport {
    fn record(&mut self, rejection: Rejection) {
        *self.counts.entry(rejection).or_insert(0) += 1;
    }

    /// Number of non-blank lines rejected for `kind`.
    pub fn count(&self, kind: Rejection) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total non-blank lines that were rejected.
    pub fn rejected(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts per rejection kind.
    pub fn iter(&self) -> impl Iterator<Item = (Rejection, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }
}

/// A rejected line, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineDiagnostic {
    /// 1-based line number.
    pub line: usize,
    pub rejection: Rejection,
}

/// Drives a [`LineParser`] over whole documents.
#[derive(Debug, Clone, Default)]
pub struct ChatNormalizer {
    parser: LineParser,
}

impl ChatNormalizer {
    /// Creates a normalizer with the default parser configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a normalizer with a custom parser configuration.
    pub fn with_config(config: ParserConfig) -> Result<Self> {
        Ok(Self {
            parser: LineParser::with_config(config)?,
        })
    }

    /// Creates a normalizer around an existing parser.
    pub fn with_parser(parser: LineParser) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &LineParser {
        &self.parser
    }

    /// Normalizes decoded transcript text.
    ///
    /// Never fails: a document where every line is rejected yields an empty
    /// table.
    pub fn normalize(&self, text: &str) -> ChatTable {
        self.normalize_with_report(text).0
    }

    /// Normalizes decoded text and reports how every line was handled.
    pub fn normalize_with_report(&self, text: &str) -> (ChatTable, RejectionReport) {
        let mut rows = Vec::new();
        let mut report = RejectionReport::default();

        for (index, line) in text.split('\n').enumerate() {
            report.total_lines += 1;

            if line.trim().is_empty() {
                report.blank += 1;
                continue;
            }

            match self.parser.parse_line(line) {
                Ok(message) => rows.push(message),
                Err(rejection) => {
                    tracing::trace!(line = index + 1, reason = %rejection, "line rejected");
                    report.record(rejection);
                }
            }
        }

        report.parsed = rows.len();
        tracing::debug!(
            lines = report.total_lines,
            parsed = report.parsed,
            rejected = report.rejected(),
            "transcript normalized"
        );

        (ChatTable::from_rows(rows), report)
    }

    /// Decodes raw bytes as UTF-8 and normalizes them.
    ///
    /// Invalid UTF-8 is a document-level failure; no partial table is built.
    pub fn normalize_bytes(&self, bytes: &[u8]) -> Result<ChatTable> {
        let text = std::str::from_utf8(bytes).map_err(|e| ChatlensError::utf8(e, None))?;
        Ok(self.normalize(text))
    }

    /// Reads, decodes and normalizes a transcript file.
    pub fn normalize_file(&self, path: impl AsRef<Path>) -> Result<ChatTable> {
        let text = read_document(path.as_ref())?;
        Ok(self.normalize(&text))
    }

    /// Recomputes the rejection reason of every rejected, non-blank line.
    pub fn diagnose(&self, text: &str) -> Vec<LineDiagnostic> {
        text.split('\n')
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| {
                self.parser
                    .parse_line(line)
                    .err()
                    .map(|rejection| LineDiagnostic {
                        line: index + 1,
                        rejection,
                    })
            })
            .collect()
    }
}

/// Reads a transcript file and decodes it as UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|e| ChatlensError::utf8(e.utf8_error(), Some(path.to_path_buf())))
}

/// Normalizes `text` with the default configuration.
pub fn normalize(text: &str) -> ChatTable {
    ChatNormalizer::new().normalize(text)
}
