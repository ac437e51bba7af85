//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format option, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;

/// Parse an exported WhatsApp chat into a clean table and summarize it.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt -f jsonl -o rows.jsonl --sentiment
    chatlens chat.txt --stats --top-words 20
    chatlens chat.txt --report --diagnose
    chatlens chat.txt --media-marker '<Medien ausgeschlossen>'")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Path to output file [default: chat_table.<format extension>]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Add a sentiment column using the built-in word-list classifier
    #[arg(short, long)]
    pub sentiment: bool,

    /// Print activity statistics
    #[arg(long)]
    pub stats: bool,

    /// Number of most frequent words shown with --stats
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top_words: usize,

    /// Print how many lines were dropped and why
    #[arg(long)]
    pub report: bool,

    /// Print the line number and reason of every dropped line
    #[arg(long)]
    pub diagnose: bool,

    /// Include the time exactly as written in the export
    #[arg(long)]
    pub raw_time: bool,

    /// Attachment placeholder text to drop
    #[arg(long, value_name = "TEXT")]
    pub media_marker: Option<String>,

    /// chrono format for "day/month/year hour:minute"
    #[arg(long, value_name = "FORMAT")]
    pub datetime_format: Option<String>,

    /// Two digits prefixed to two-digit years
    #[arg(long, value_name = "DIGITS")]
    pub century: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the parser configuration from the command-line overrides.
    pub fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::new();
        if let Some(marker) = &self.media_marker {
            config = config.with_media_marker(marker.clone());
        }
        if let Some(format) = &self.datetime_format {
            config = config.with_datetime_format(format.clone());
        }
        if let Some(prefix) = &self.century {
            config = config.with_century_prefix(prefix.clone());
        }
        config
    }

    /// Output path, defaulting to `chat_table.<ext>`.
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let format: crate::format::OutputFormat = self.format.into();
            PathBuf::from(format!("chat_table.{}", format.extension()))
        })
    }

    /// Log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Output format for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}
