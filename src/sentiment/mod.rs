//! Sentiment scoring and bucketing.
//!
//! A comment's sentiment is a compound polarity score in `[-1, 1]` produced
//! by an injected [`PolarityScorer`], bucketed by [`classify_sentiment`]
//! into [`SentimentCategory::Positive`], [`SentimentCategory::Neutral`] or
//! [`SentimentCategory::Negative`].
//!
//! # Submodules
//!
//! - [`scorer`]: the scorer trait, score struct and the unavailable error
//! - [`vader`]: [`VaderScorer`], the full VADER analyzer
//! - [`lexicon`]: [`LexiconScorer`], a VADER-style scorer over a small
//!   built-in or user-supplied lexicon
//! - [`words`]: valence, booster and negation tables

pub mod lexicon;
pub mod scorer;
pub mod vader;
pub mod words;

pub use lexicon::LexiconScorer;
pub use scorer::{PolarityScorer, PolarityScores, ScoringError};
pub use vader::VaderScorer;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symmetric dead band around zero. Scores strictly above `+SENTIMENT_THRESHOLD`
/// are positive, strictly below `-SENTIMENT_THRESHOLD` negative.
pub const SENTIMENT_THRESHOLD: f64 = 0.05;

/// Bucketed sentiment of a comment.
///
/// Variants are declared in score order, so the derived `Ord` follows the
/// score: `Negative < Neutral < Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SentimentCategory {
    Negative,
    Neutral,
    Positive,
}

impl SentimentCategory {
    /// All buckets in report order.
    pub const ALL: [SentimentCategory; 3] = [
        SentimentCategory::Positive,
        SentimentCategory::Neutral,
        SentimentCategory::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentCategory::Negative => "Negative",
            SentimentCategory::Neutral => "Neutral",
            SentimentCategory::Positive => "Positive",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compound polarity score of a comment.
///
/// # Errors
///
/// Returns [`ScoringError::Unavailable`] when the scorer cannot score.
pub fn sentiment_score<S>(scorer: &S, comment: &str) -> Result<f64, ScoringError>
where
    S: PolarityScorer + ?Sized,
{
    Ok(scorer.polarity(comment)?.compound)
}

/// Bucket a compound score.
pub fn classify_sentiment(score: f64) -> SentimentCategory {
    if score > SENTIMENT_THRESHOLD {
        SentimentCategory::Positive
    } else if score < -SENTIMENT_THRESHOLD {
        SentimentCategory::Negative
    } else {
        SentimentCategory::Neutral
    }
}
