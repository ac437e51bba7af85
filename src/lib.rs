//! # Chatlens
//!
//! A Rust library for turning exported WhatsApp chat transcripts into a clean,
//! typed table of messages, ready for statistics and sentiment analysis.
//!
//! ## Overview
//!
//! A transcript is plain UTF-8 text, one message per line:
//!
//! ```text
//! 12/05/23 14:30 - Alice: Hello there!
//! ```
//!
//! Each line is parsed into a [`ChatMessage`] (timestamp, sender, cleaned
//! body). Lines that are not messages are dropped with a typed
//! [`Rejection`](parser::Rejection) reason: continuation lines, system
//! notices, impossible dates and media placeholders.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let transcript = "\
//! 12/05/23 14:30 - Alice: Check http://x.com now 😀
//! 12/05/23 14:31 - Bob: <Media omitted>
//! 12/05/23 14:32 - Bob: Nice!";
//!
//! let table = normalize(transcript);
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get(0).unwrap().body, "Check now 😀");
//!
//! let sentiments = SentimentAnalyzer::new(LexiconClassifier::new()).analyze_table(&table);
//! assert_eq!(sentiments, vec![Sentiment::Neutral, Sentiment::Positive]);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`LineParser`](parser::LineParser) and [`Rejection`](parser::Rejection)
//! - [`parsing`] - Building blocks: date/time scanning, sender split, body cleaning
//! - [`normalizer`] - [`ChatNormalizer`](normalizer::ChatNormalizer), whole documents to tables
//! - [`table`] / [`message`] - [`ChatTable`] and [`ChatMessage`]
//! - [`sentiment`] - [`PolarityClassifier`](sentiment::PolarityClassifier) contract and analyzer
//! - [`stats`] - Per-sender, daily, hourly and word statistics
//! - [`output`] / [`format`] - CSV, JSON and JSONL writers
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`SentimentConfig`](config::SentimentConfig)
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`cli`] - CLI argument types (requires the `cli` feature)
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod normalizer;
pub mod output;
pub mod parser;
pub mod parsing;
pub mod sentiment;
pub mod stats;
pub mod table;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::ChatMessage;
pub use table::ChatTable;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ChatMessage, ChatTable};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::config::{ParserConfig, SentimentConfig};
    pub use crate::normalizer::{ChatNormalizer, RejectionReport, normalize};
    pub use crate::parser::{LineParser, Rejection};

    // Analysis
    pub use crate::sentiment::{
        ClassifierError, LexiconClassifier, PolarityClassifier, Sentiment, SentimentAnalyzer,
    };
    pub use crate::stats::{ChatStats, SentimentDistribution, word_frequencies};

    // Output
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
    pub use crate::output::OutputConfig;
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, to_jsonl, write_json, write_jsonl};
}
