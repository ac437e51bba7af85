//! Sentiment classification of message bodies.
//!
//! Scoring text is not this crate's job: a [`PolarityClassifier`] supplied by
//! the caller returns a polarity in `[-1, 1]`, and [`SentimentAnalyzer`]
//! turns it into a [`Sentiment`] category. The analyzer is fail-safe: a
//! classifier error or panic, or a score that is not a finite number within
//! range, becomes [`Sentiment::Neutral`] and is never propagated.
//!
//! # Example
//!
//! ```rust
//! use chatlens::sentiment::{ClassifierError, Sentiment, SentimentAnalyzer};
//!
//! let analyzer = SentimentAnalyzer::new(|text: &str| {
//!     if text.is_empty() {
//!         Err(ClassifierError::new("nothing to score"))
//!     } else {
//!         Ok(0.8)
//!     }
//! });
//!
//! assert_eq!(analyzer.analyze("great"), Sentiment::Positive);
//! assert_eq!(analyzer.analyze(""), Sentiment::Neutral);
//! ```

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SentimentConfig;
use crate::error::ChatlensError;
use crate::table::ChatTable;

/// Three-way sentiment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("classifier failed: {message}")]
pub struct ClassifierError {
    message: String,
}

impl ClassifierError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Scores text polarity in `[-1, 1]`.
pub trait PolarityClassifier {
    fn polarity(&self, text: &str) -> Result<f64, ClassifierError>;
}

impl<F> PolarityClassifier for F
where
    F: Fn(&str) -> Result<f64, ClassifierError>,
{
    fn polarity(&self, text: &str) -> Result<f64, ClassifierError> {
        self(text)
    }
}

/// Maps classifier scores to categories, absorbing every failure.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer<C> {
    classifier: C,
    config: SentimentConfig,
}

impl<C: PolarityClassifier> SentimentAnalyzer<C> {
    /// Wraps `classifier` with the default thresholds (±0.1).
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            config: SentimentConfig::default(),
        }
    }

    /// Wraps `classifier` with custom thresholds.
    pub fn with_config(classifier: C, config: SentimentConfig) -> Result<Self, ChatlensError> {
        config.validate()?;
        Ok(Self { classifier, config })
    }

    pub fn config(&self) -> &SentimentConfig {
        &self.config
    }

    /// Classifies one message body.
    pub fn analyze(&self, text: &str) -> Sentiment {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.classifier.polarity(text)));
        match outcome {
            Ok(Ok(score)) if score.is_finite() && (-1.0..=1.0).contains(&score) => {
                self.categorize(score)
            }
            Ok(Ok(score)) => {
                tracing::warn!(score, "polarity out of range, treating as neutral");
                Sentiment::Neutral
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "classification failed, treating as neutral");
                Sentiment::Neutral
            }
            Err(_) => {
                tracing::warn!("classifier panicked, treating as neutral");
                Sentiment::Neutral
            }
        }
    }

    /// Converts a polarity score to a category using the thresholds.
    pub fn categorize(&self, score: f64) -> Sentiment {
        if score > self.config.positive_threshold {
            Sentiment::Positive
        } else if score < self.config.negative_threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Classifies every body of `table`, one entry per row.
    pub fn analyze_table(&self, table: &ChatTable) -> Vec<Sentiment> {
        table.bodies().map(|body| self.analyze(body)).collect()
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "best", "better", "brilliant", "congrats", "congratulations", "cool",
    "enjoy", "excellent", "fantastic", "fun", "glad", "good", "great", "happy", "haha", "lol",
    "love", "lovely", "nice", "perfect", "thanks", "thank", "wonderful", "yay", "yes",
];

const NEGATIVE_WORDS: &[&str] = &[
    "angry", "annoying", "awful", "bad", "boring", "sad", "hate", "horrible", "hurt", "late",
    "mad", "miss", "no", "poor", "problem", "sick", "sorry", "stupid", "terrible", "tired",
    "ugly", "upset", "worse", "worst", "wrong",
];

/// Minimal word-list classifier.
///
/// Polarity is `(positive - negative) / (positive + negative)` over the
/// lowercased words of the text, `0.0` when no listed word occurs. Good
/// enough for a quick overview; plug in a real model for anything else.
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
            negative: NEGATIVE_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Adds words to the lists.
    #[must_use]
    pub fn with_words<'a>(
        mut self,
        positive: impl IntoIterator<Item = &'a str>,
        negative: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        self.positive
            .extend(positive.into_iter().map(|w| w.to_lowercase()));
        self.negative
            .extend(negative.into_iter().map(|w| w.to_lowercase()));
        self
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityClassifier for LexiconClassifier {
    fn polarity(&self, text: &str) -> Result<f64, ClassifierError> {
        let (mut pos, mut neg) = (0u32, 0u32);
        for word in text.split_whitespace() {
            let word = word.to_lowercase();
            if self.positive.contains(&word) {
                pos += 1;
            } else if self.negative.contains(&word) {
                neg += 1;
            }
        }

        let total = pos + neg;
        if total == 0 {
            return Ok(0.0);
        }
        Ok((f64::from(pos) - f64::from(neg)) / f64::from(total))
    }
}
