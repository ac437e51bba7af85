//! Line parser: one transcript line to one [`ChatMessage`] or a [`Rejection`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::{LineParser, Rejection};
//!
//! let parser = LineParser::new();
//!
//! let msg = parser.parse_line("12/05/23 14:30 - Alice: Check http://x.com now 😀")?;
//! assert_eq!(msg.sender, "Alice");
//! assert_eq!(msg.body, "Check now 😀");
//! assert_eq!(msg.timestamp.to_string(), "2023-05-12 14:30:00");
//!
//! assert_eq!(
//!     parser.parse_line("12/05/23 14:30 - Bob: <Media omitted>"),
//!     Err(Rejection::MediaOmitted)
//! );
//! assert_eq!(parser.parse_line("hello everyone"), Err(Rejection::NoDateTimeMatch));
//! # Ok::<(), Rejection>(())
//! ```
//!
//! # Known quirk
//!
//! AM/PM markers are recognized but not applied: `2:30 PM` is stored as
//! 02:30. The raw token is kept in [`ChatMessage::time`] for callers that
//! need to tell the two apart.

use serde::Serialize;

use crate::config::ParserConfig;
use crate::error::ChatlensError;
use crate::message::ChatMessage;
use crate::parsing::{DateTimeScanner, MessageCleaner, parse_timestamp, split_sender};

/// Why a line did not produce a message.
///
/// Rejections are expected for any real transcript (continuation lines of
/// multi-line messages, system notices, attachments) and are never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rejection {
    /// The line is blank or lacks a date or a time of day.
    NoDateTimeMatch,
    /// Date and time were found but do not form a valid timestamp.
    UnparseableDate,
    /// No `sender: message` split after the timestamp.
    NoSenderDelimiter,
    /// The message is an attachment placeholder.
    MediaOmitted,
}

impl Rejection {
    /// Returns all rejection kinds.
    pub fn all() -> &'static [Rejection] {
        &[
            Rejection::NoDateTimeMatch,
            Rejection::UnparseableDate,
            Rejection::NoSenderDelimiter,
            Rejection::MediaOmitted,
        ]
    }

    /// Stable kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::NoDateTimeMatch => "no-date-time-match",
            Rejection::UnparseableDate => "unparseable-date",
            Rejection::NoSenderDelimiter => "no-sender-delimiter",
            Rejection::MediaOmitted => "media-omitted",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for Rejection {}

/// Parses single transcript lines.
///
/// Holds the compiled patterns and the configuration; both are immutable, so
/// one parser can be shared across threads and reused for any number of
/// documents.
#[derive(Debug, Clone)]
pub struct LineParser {
    config: ParserConfig,
    scanner: DateTimeScanner,
    cleaner: MessageCleaner,
}

impl LineParser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(ParserConfig::default())
    }

    /// Creates a parser with a custom configuration.
    pub fn with_config(config: ParserConfig) -> Result<Self, ChatlensError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ParserConfig) -> Self {
        Self {
            config,
            scanner: DateTimeScanner::new(),
            cleaner: MessageCleaner::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one line.
    ///
    /// Steps, each with its own rejection:
    /// 1. blank line, missing date or missing time: [`Rejection::NoDateTimeMatch`]
    /// 2. date/time not valid under the configured format: [`Rejection::UnparseableDate`]
    /// 3. no `sender:` after the timestamp: [`Rejection::NoSenderDelimiter`]
    /// 4. message contains the media marker: [`Rejection::MediaOmitted`]
    pub fn parse_line(&self, line: &str) -> Result<ChatMessage, Rejection> {
        if line.trim().is_empty() {
            return Err(Rejection::NoDateTimeMatch);
        }

        let date = self.scanner.find_date(line)?;
        let time = self.scanner.find_time(line)?;
        let timestamp = parse_timestamp(
            &date,
            &time,
            &self.config.century_prefix,
            &self.config.datetime_format,
        )?;

        let region_end = date.end.max(time.end);
        let (sender, message) = split_sender(&line[region_end..])?;

        if message.contains(self.config.media_marker.as_str()) {
            return Err(Rejection::MediaOmitted);
        }

        Ok(ChatMessage {
            timestamp,
            time: time.text.to_string(),
            sender: sender.to_string(),
            body: self.cleaner.clean(message),
        })
    }

    /// Cleans message text the same way parsed bodies are cleaned.
    pub fn clean(&self, message: &str) -> String {
        self.cleaner.clean(message)
    }
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}
