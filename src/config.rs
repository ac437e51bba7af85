//! Configuration types for parsing and sentiment classification.
//!
//! Both structs are plain serde-friendly values with builder methods, so they
//! can be constructed in code or loaded from any serde format.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ParserConfig;
//! use chatlens::parser::LineParser;
//!
//! let config = ParserConfig::new()
//!     .with_media_marker("<Medien weggelassen>");
//!
//! let parser = LineParser::with_config(config)?;
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;

/// Default chrono format used for the combined date and time string.
pub const DEFAULT_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Placeholder WhatsApp writes in place of attachments.
pub const DEFAULT_MEDIA_MARKER: &str = "<Media omitted>";

/// Configuration for the line parser.
///
/// The date format is fixed to day/month/year with a 24-hour clock unless
/// overridden here; there is no locale detection and no fallback format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// chrono format applied to `"{day}/{month}/{year} {hour}:{minute}"`
    /// (default: `%d/%m/%Y %H:%M`)
    pub datetime_format: String,

    /// Lines whose message contains this text are dropped (default: `<Media omitted>`)
    pub media_marker: String,

    /// Prefix turning a two-digit year into four digits (default: `20`)
    pub century_prefix: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            media_marker: DEFAULT_MEDIA_MARKER.to_string(),
            century_prefix: "20".to_string(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the combined date/time format.
    #[must_use]
    pub fn with_datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_marker = marker.into();
        self
    }

    /// Sets the two-digit century prefix.
    #[must_use]
    pub fn with_century_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.century_prefix = prefix.into();
        self
    }

    /// Checks that every field is usable.
    ///
    /// An empty media marker would match every message, so it is refused.
    pub fn validate(&self) -> Result<(), ChatlensError> {
        if self.datetime_format.trim().is_empty() {
            return Err(ChatlensError::invalid_config(
                "datetime_format",
                "must not be empty",
            ));
        }
        if self.media_marker.is_empty() {
            return Err(ChatlensError::invalid_config(
                "media_marker",
                "must not be empty",
            ));
        }
        if self.century_prefix.len() != 2 || !self.century_prefix.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ChatlensError::invalid_config(
                "century_prefix",
                format!("expected two digits, got '{}'", self.century_prefix),
            ));
        }
        Ok(())
    }
}

/// Thresholds converting a polarity score into a sentiment category.
///
/// Scores strictly above `positive_threshold` are positive, strictly below
/// `negative_threshold` negative, everything else neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// Lower bound (exclusive) for positive messages (default: 0.1)
    pub positive_threshold: f64,

    /// Upper bound (exclusive) for negative messages (default: -0.1)
    pub negative_threshold: f64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.1,
            negative_threshold: -0.1,
        }
    }
}

impl SentimentConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the positive threshold.
    #[must_use]
    pub fn with_positive_threshold(mut self, threshold: f64) -> Self {
        self.positive_threshold = threshold;
        self
    }

    /// Sets the negative threshold.
    #[must_use]
    pub fn with_negative_threshold(mut self, threshold: f64) -> Self {
        self.negative_threshold = threshold;
        self
    }

    /// Checks that both thresholds are finite and ordered.
    pub fn validate(&self) -> Result<(), ChatlensError> {
        if !self.positive_threshold.is_finite() || !self.negative_threshold.is_finite() {
            return Err(ChatlensError::invalid_config(
                "thresholds",
                "must be finite numbers",
            ));
        }
        if self.negative_threshold > self.positive_threshold {
            return Err(ChatlensError::invalid_config(
                "negative_threshold",
                format!(
                    "{} is above the positive threshold {}",
                    self.negative_threshold, self.positive_threshold
                ),
            ));
        }
        Ok(())
    }
}
