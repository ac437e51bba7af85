//! A single parsed chat message.
//!
//! [`ChatMessage`] is the row type of a [`ChatTable`](crate::ChatTable). Every
//! message that survives line parsing carries a timestamp, a non-empty sender
//! and a cleaned body.
//!
//! # Examples
//!
//! ```
//! use chatlens::ChatMessage;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 5, 12)
//!     .unwrap()
//!     .and_hms_opt(14, 30, 0)
//!     .unwrap();
//! let msg = ChatMessage::new(ts, "Alice", "Check now");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.date().to_string(), "2023-05-12");
//! ```

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A normalized chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Date and time of day, minute precision, no timezone |
/// | `time` | `String` | The time token exactly as written in the export |
/// | `sender` | `String` | Display name or phone number, trimmed |
/// | `body` | `String` | Cleaned message text |
///
/// `time` keeps the original spelling (`"2:30 PM"`, `"14:30:15"`) because the
/// stored `timestamp` drops seconds and ignores AM/PM markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// When the message was sent, as written in the export.
    pub timestamp: NaiveDateTime,

    /// Raw time-of-day token.
    #[serde(default)]
    pub time: String,

    /// Display name or phone number of the author.
    pub sender: String,

    /// Message text with URLs, punctuation and extra whitespace removed.
    pub body: String,
}

impl ChatMessage {
    /// Creates a message; `time` is derived from the timestamp as `HH:MM`.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            time: timestamp.format("%H:%M").to_string(),
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Overrides the raw time token.
    #[must_use]
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Calendar date of the message.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Hour of day (0-23) of the stored timestamp.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Returns `true` if cleaning left nothing in the body.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
