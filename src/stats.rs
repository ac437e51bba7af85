//! Descriptive statistics over a [`ChatTable`].
//!
//! These are the numbers a dashboard plots: message totals, per-sender
//! activity, daily and hourly time series, word frequencies and the
//! sentiment split. Rendering is left to the caller.
//!
//! # Example
//!
//! ```rust
//! use chatlens::normalizer::normalize;
//! use chatlens::stats::{ChatStats, word_frequencies};
//!
//! let table = normalize("\
//! 12/05/23 14:30 - Alice: pizza tonight
//! 12/05/23 14:31 - Bob: pizza sounds good
//! 13/05/23 09:00 - Alice: morning");
//!
//! let stats = ChatStats::from_table(&table);
//! assert_eq!(stats.total_messages, 3);
//! assert_eq!(stats.unique_senders, 2);
//! assert_eq!(stats.messages_per_sender()[0], ("Alice".to_string(), 2));
//!
//! let words = word_frequencies(&table, 1);
//! assert_eq!(words, vec![("pizza".to_string(), 2)]);
//! ```

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use crate::sentiment::Sentiment;
use crate::table::ChatTable;

/// Common English words left out of word counts.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "do", "for", "from", "have", "he",
    "her", "his", "i", "if", "in", "is", "it", "its", "me", "my", "of", "on", "or", "our", "she",
    "so", "that", "the", "their", "them", "then", "there", "they", "this", "to", "u", "was", "we",
    "were", "what", "will", "with", "you", "your",
];

/// Activity statistics for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    pub total_messages: usize,
    pub unique_senders: usize,
    /// First and last calendar day with a message.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Messages per calendar day.
    pub daily_counts: BTreeMap<NaiveDate, usize>,
    /// Messages per hour of day, index 0 is midnight.
    pub hourly_counts: [usize; 24],
    sender_counts: HashMap<String, usize>,
}

impl ChatStats {
    /// Computes statistics in one pass over the table.
    pub fn from_table(table: &ChatTable) -> Self {
        let mut stats = ChatStats {
            total_messages: table.len(),
            ..Self::default()
        };

        for message in table {
            *stats
                .sender_counts
                .entry(message.sender.clone())
                .or_insert(0) += 1;
            *stats.daily_counts.entry(message.date()).or_insert(0) += 1;
            stats.hourly_counts[message.hour() as usize] += 1;
        }

        stats.unique_senders = stats.sender_counts.len();
        stats.date_range = stats
            .daily_counts
            .keys()
            .next()
            .copied()
            .zip(stats.daily_counts.keys().next_back().copied());
        stats
    }

    /// Senders with their message counts, most active first, ties by name.
    pub fn messages_per_sender(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = self
            .sender_counts
            .iter()
            .map(|(sender, count)| (sender.clone(), *count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts
    }

    /// Messages sent by `sender`.
    pub fn count_for(&self, sender: &str) -> usize {
        self.sender_counts.get(sender).copied().unwrap_or(0)
    }

    /// The calendar day with the most messages (earliest on ties).
    pub fn busiest_day(&self) -> Option<(NaiveDate, usize)> {
        self.daily_counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(day, count)| (*day, *count))
    }
}

/// Most frequent words across all bodies.
///
/// Words are lowercased and split on whitespace; stop words and bare numbers
/// are skipped. Sorted by count descending, then alphabetically.
pub fn word_frequencies(table: &ChatTable, limit: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for body in table.bodies() {
        for word in body.split_whitespace() {
            let word = word.to_lowercase();
            if STOP_WORDS.contains(&word.as_str()) || word.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted.truncate(limit);
    sorted
}

/// How many messages fell into each sentiment category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn from_sentiments(sentiments: &[Sentiment]) -> Self {
        let mut dist = Self::default();
        for sentiment in sentiments {
            match sentiment {
                Sentiment::Positive => dist.positive += 1,
                Sentiment::Negative => dist.negative += 1,
                Sentiment::Neutral => dist.neutral += 1,
            }
        }
        dist
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }

    /// Share of `sentiment` in percent, `0.0` for an empty distribution.
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let count = match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        };
        count as f64 / total as f64 * 100.0
    }
}
