//! VADER polarity scoring.
//!
//! [`VaderScorer`] delegates to the `vader_sentiment` analyzer, which ships
//! the full VADER valence and emoji lexicons along with its idiom, negation
//! and "least" rules. It is the scorer the binary uses unless `--lexicon`
//! names a replacement lexicon file.

use super::scorer::{PolarityScorer, PolarityScores, ScoringError};
use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Polarity scorer backed by the full VADER lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderScorer;

impl VaderScorer {
    pub fn new() -> Self {
        Self
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity(&self, text: &str) -> Result<PolarityScores, ScoringError> {
        if text.trim().is_empty() {
            return Ok(PolarityScores::default());
        }

        let analyzer = SentimentIntensityAnalyzer::new();
        let raw = analyzer.polarity_scores(text);
        let field = |key: &str| -> Result<f64, ScoringError> {
            raw.get(key)
                .copied()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ScoringError::Unavailable(format!("VADER returned no {key} score")))
        };

        let scores = PolarityScores {
            neg: field("neg")?,
            neu: field("neu")?,
            pos: field("pos")?,
            compound: field("compound")?,
        };
        debug!(compound = scores.compound, "Scored text");
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{SENTIMENT_THRESHOLD, SentimentCategory, classify_sentiment};

    fn compound(text: &str) -> f64 {
        VaderScorer::new().polarity(text).unwrap().compound
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(VaderScorer::new().polarity("").unwrap(), PolarityScores::default());
        assert_eq!(compound("  \n "), 0.0);
    }

    #[test]
    fn test_single_word_compounds() {
        // valence / sqrt(valence^2 + 15)
        assert!((compound("love") - 0.6369).abs() < 1e-3);
        assert!(compound("criminal") < -SENTIMENT_THRESHOLD);
        assert!(compound("genius") > SENTIMENT_THRESHOLD);
    }

    #[test]
    fn test_political_vocabulary_is_scored() {
        for text in [
            "Donald Trump is a criminal",
            "Joe Biden is a disgrace",
            "MAGA people are so ignorant",
        ] {
            assert!(compound(text) < -SENTIMENT_THRESHOLD, "{text}");
        }
        assert!(compound("Kamala Harris is a genius") > SENTIMENT_THRESHOLD);
    }

    #[test]
    fn test_negation_and_neutral_text() {
        assert_eq!(classify_sentiment(compound("this is not good")), SentimentCategory::Negative);
        assert_eq!(
            classify_sentiment(compound("the senate votes on tuesday")),
            SentimentCategory::Neutral
        );
    }

    #[test]
    fn test_proportions_sum_to_one() {
        let scores = VaderScorer::new().polarity("I love this but the ending was awful").unwrap();
        assert!((scores.neg + scores.neu + scores.pos - 1.0).abs() < 1e-2);
        assert!((-1.0..=1.0).contains(&scores.compound));
    }
}
