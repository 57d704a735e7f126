//! The polarity scorer seam.
//!
//! Classification never reaches for a process-wide analyzer. Callers build a
//! scorer once and pass a reference to it into every classifier, so tests can
//! substitute a deterministic stub.

use serde::{Deserialize, Serialize};

/// Polarity breakdown for one piece of text.
///
/// `compound` is the normalized aggregate in `[-1.0, 1.0]`; `neg`, `neu` and
/// `pos` are the proportions of the text that fall in each bucket.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// The only failure the classifiers surface.
///
/// Malformed input is never an error: it is normalized to an empty string.
/// The one condition worth reporting is a scorer that cannot produce a score
/// at all, so the caller can choose between skipping a comment and aborting
/// the batch.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("sentiment scorer unavailable: {0}")]
    Unavailable(String),
}

/// A text-polarity model.
///
/// Implementations must be deterministic and must accept any string,
/// including the empty string, which scores a compound of exactly `0.0`.
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> Result<PolarityScores, ScoringError>;
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for &T {
    fn polarity(&self, text: &str) -> Result<PolarityScores, ScoringError> {
        (**self).polarity(text)
    }
}

impl<T: PolarityScorer + ?Sized> PolarityScorer for Box<T> {
    fn polarity(&self, text: &str) -> Result<PolarityScores, ScoringError> {
        (**self).polarity(text)
    }
}
