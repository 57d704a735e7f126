//! Political lean classification.
//!
//! A comment's lean combines two signals: whether it mentions a phrase tied
//! to one party, and the sign of its sentiment.
//!
//! | Phrase found | score > 0.05 | score < -0.05 | otherwise |
//! |--------------|--------------|---------------|-----------|
//! | Republican   | Republican   | Democrat      | Neutral-Republican |
//! | Democrat     | Democrat     | Republican    | Neutral-Democrat   |
//! | neither      | Neutral      | Neutral       | Neutral   |
//!
//! Negative sentiment around one party's phrases is read as a comment from
//! the opposing side. Whether that matches what the labels are meant to
//! express has not been confirmed, so the rule is kept exactly as the
//! production pipeline applies it.
//!
//! Republican phrases are checked first: a comment mentioning both parties is
//! labelled from the Republican row.
//!
//! Phrase lists are configuration, loaded from YAML:
//!
//! ```yaml
//! republican:
//!   - Donald Trump
//!   - MAGA
//! democrat:
//!   - Kamala Harris
//! ```

use crate::sentiment::{PolarityScorer, SENTIMENT_THRESHOLD, ScoringError, sentiment_score};
use crate::utils::truncate_for_log;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Inferred political affiliation of one comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PoliticalCategory {
    Democrat,
    Republican,
    #[serde(rename = "Neutral-Democrat")]
    NeutralDemocrat,
    #[serde(rename = "Neutral-Republican")]
    NeutralRepublican,
    Neutral,
}

impl PoliticalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoliticalCategory::Democrat => "Democrat",
            PoliticalCategory::Republican => "Republican",
            PoliticalCategory::NeutralDemocrat => "Neutral-Democrat",
            PoliticalCategory::NeutralRepublican => "Neutral-Republican",
            PoliticalCategory::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for PoliticalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword phrases associated with each party.
///
/// Matching is a case-insensitive substring test against the comment, so
/// `"MAGA"` also matches inside `"#MAGA2024"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseSets {
    #[serde(default)]
    pub republican: Vec<String>,
    #[serde(default)]
    pub democrat: Vec<String>,
}

impl Default for PhraseSets {
    fn default() -> Self {
        let owned =
            |phrases: &[&str]| -> Vec<String> { phrases.iter().map(|p| p.to_string()).collect() };
        Self {
            republican: owned(&[
                "Donald Trump",
                "MAGA",
                "conservative values",
                "GOP agenda",
                "Republican ideals",
                "right-wing",
            ]),
            democrat: owned(&[
                "Kamala Harris",
                "Joe Biden",
                "liberal agenda",
                "progressive policies",
                "Democrat values",
                "left-wing",
            ]),
        }
    }
}

impl PhraseSets {
    /// Parse phrase sets from a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Load phrase sets from a YAML file.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let phrases = Self::from_yaml_str(&source)?;
        info!(
            republican = phrases.republican.len(),
            democrat = phrases.democrat.len(),
            "Loaded phrase sets"
        );
        Ok(phrases)
    }
}

/// Lower-cased, non-blank phrases ready for matching.
///
/// Surrounding whitespace is part of the phrase: `" gop "` only matches the
/// standalone word.
fn normalize_phrases(party: &str, phrases: &[String]) -> Vec<String> {
    phrases
        .iter()
        .filter_map(|p| {
            if p.trim().is_empty() {
                warn!(party, "Ignoring blank phrase");
                None
            } else {
                Some(p.to_lowercase())
            }
        })
        .collect()
}

/// Labels comments with a [`PoliticalCategory`].
///
/// Holds a borrowed scorer handle and the phrase lists; classification has
/// no other state, so one classifier can label any number of comments in any
/// order.
#[derive(Debug)]
pub struct LeanClassifier<'a, S: ?Sized> {
    scorer: &'a S,
    republican: Vec<String>,
    democrat: Vec<String>,
}

impl<'a, S> LeanClassifier<'a, S>
where
    S: PolarityScorer + ?Sized,
{
    pub fn new(scorer: &'a S, phrases: &PhraseSets) -> Self {
        Self {
            scorer,
            republican: normalize_phrases("republican", &phrases.republican),
            democrat: normalize_phrases("democrat", &phrases.democrat),
        }
    }

    /// Label a comment.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Unavailable`] if the scorer cannot score the
    /// comment. Any text, including the empty string, is otherwise accepted.
    pub fn classify_lean(&self, comment: &str) -> Result<PoliticalCategory, ScoringError> {
        let score = sentiment_score(self.scorer, comment)?;
        let lowered = comment.to_lowercase();
        let mentions = |phrases: &[String]| phrases.iter().any(|p| lowered.contains(p.as_str()));

        let category = if mentions(&self.republican) {
            by_polarity(
                score,
                PoliticalCategory::Republican,
                PoliticalCategory::Democrat,
                PoliticalCategory::NeutralRepublican,
            )
        } else if mentions(&self.democrat) {
            by_polarity(
                score,
                PoliticalCategory::Democrat,
                PoliticalCategory::Republican,
                PoliticalCategory::NeutralDemocrat,
            )
        } else {
            PoliticalCategory::Neutral
        };
        debug!(score, %category, comment = %truncate_for_log(comment, 80), "Classified lean");
        Ok(category)
    }
}

fn by_polarity(
    score: f64,
    positive: PoliticalCategory,
    negative: PoliticalCategory,
    neutral: PoliticalCategory,
) -> PoliticalCategory {
    if score > SENTIMENT_THRESHOLD {
        positive
    } else if score < -SENTIMENT_THRESHOLD {
        negative
    } else {
        neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{LexiconScorer, PolarityScores, VaderScorer};

    struct Fixed(f64);

    impl PolarityScorer for Fixed {
        fn polarity(&self, _text: &str) -> Result<PolarityScores, ScoringError> {
            Ok(PolarityScores {
                compound: self.0,
                ..Default::default()
            })
        }
    }

    struct Offline;

    impl PolarityScorer for Offline {
        fn polarity(&self, _text: &str) -> Result<PolarityScores, ScoringError> {
            Err(ScoringError::Unavailable("offline".to_string()))
        }
    }

    fn classify(score: f64, comment: &str) -> PoliticalCategory {
        let scorer = Fixed(score);
        LeanClassifier::new(&scorer, &PhraseSets::default())
            .classify_lean(comment)
            .unwrap()
    }

    #[test]
    fn test_republican_phrase_positive_is_republican() {
        assert_eq!(classify(0.6, "I love MAGA so much!"), PoliticalCategory::Republican);
    }

    #[test]
    fn test_republican_phrase_negative_is_democrat() {
        assert_eq!(classify(-0.6, "Donald Trump again"), PoliticalCategory::Democrat);
    }

    #[test]
    fn test_republican_phrase_neutral() {
        assert_eq!(classify(0.05, "gop agenda"), PoliticalCategory::NeutralRepublican);
        assert_eq!(classify(-0.05, "GOP AGENDA"), PoliticalCategory::NeutralRepublican);
    }

    #[test]
    fn test_democrat_phrase_mirrors() {
        assert_eq!(classify(0.3, "Joe Biden"), PoliticalCategory::Democrat);
        assert_eq!(classify(-0.3, "Kamala Harris is terrible"), PoliticalCategory::Republican);
        assert_eq!(classify(0.0, "left-wing"), PoliticalCategory::NeutralDemocrat);
    }

    #[test]
    fn test_no_phrase_is_neutral_regardless_of_score() {
        for score in [-1.0, -0.3, 0.0, 0.3, 1.0] {
            assert_eq!(classify(score, "The weather is nice today"), PoliticalCategory::Neutral);
        }
        assert_eq!(classify(0.0, ""), PoliticalCategory::Neutral);
    }

    #[test]
    fn test_republican_phrase_wins_tie() {
        let text = "Donald Trump and Kamala Harris debate";
        assert_eq!(classify(0.4, text), PoliticalCategory::Republican);
        assert_eq!(classify(-0.4, text), PoliticalCategory::Democrat);
        assert_eq!(classify(0.0, text), PoliticalCategory::NeutralRepublican);
    }

    #[test]
    fn test_republican_only_never_neutral_or_neutral_democrat() {
        let allowed = [
            PoliticalCategory::Republican,
            PoliticalCategory::Democrat,
            PoliticalCategory::NeutralRepublican,
        ];
        for step in -20..=20 {
            let score = step as f64 / 20.0;
            let category = classify(score, "the right-wing media");
            assert!(allowed.contains(&category), "{category} at {score}");
        }
    }

    #[test]
    fn test_substring_match_inside_words() {
        assert_eq!(classify(0.0, "#maga2024"), PoliticalCategory::NeutralRepublican);
    }

    #[test]
    fn test_phrase_with_punctuation_only_matches_raw_text() {
        let raw = "So much right-wing noise";
        assert_eq!(classify(0.0, raw), PoliticalCategory::NeutralRepublican);
        let cleaned = crate::text::clean(raw);
        assert_eq!(classify(0.0, &cleaned), PoliticalCategory::Neutral);
    }

    #[test]
    fn test_with_lexicon_scorer() {
        let scorer = LexiconScorer::new();
        let classifier = LeanClassifier::new(&scorer, &PhraseSets::default());
        assert_eq!(
            classifier.classify_lean("I love MAGA so much!").unwrap(),
            PoliticalCategory::Republican
        );
        assert_eq!(
            classifier.classify_lean("Kamala Harris is terrible").unwrap(),
            PoliticalCategory::Republican
        );
        assert_eq!(
            classifier.classify_lean("The weather is nice today").unwrap(),
            PoliticalCategory::Neutral
        );
    }

    #[test]
    fn test_with_vader_scorer() {
        let scorer = VaderScorer::new();
        let classifier = LeanClassifier::new(&scorer, &PhraseSets::default());
        let cases = [
            ("Donald Trump is a criminal", PoliticalCategory::Democrat),
            ("Joe Biden is a disgrace", PoliticalCategory::Republican),
            ("MAGA people are so ignorant", PoliticalCategory::Democrat),
            ("Kamala Harris is a genius", PoliticalCategory::Democrat),
        ];
        for (comment, expected) in cases {
            assert_eq!(classifier.classify_lean(comment).unwrap(), expected, "{comment}");
        }
    }

    #[test]
    fn test_padded_phrase_keeps_its_whitespace() {
        let phrases = PhraseSets {
            republican: vec![" GOP ".to_string()],
            democrat: vec![],
        };
        let scorer = Fixed(0.0);
        let classifier = LeanClassifier::new(&scorer, &phrases);
        assert_eq!(classifier.classify_lean("I saw a gopher").unwrap(), PoliticalCategory::Neutral);
        assert_eq!(
            classifier.classify_lean("the gop agenda").unwrap(),
            PoliticalCategory::NeutralRepublican
        );
    }

    #[test]
    fn test_unavailable_scorer_surfaces_error() {
        let classifier = LeanClassifier::new(&Offline, &PhraseSets::default());
        assert!(matches!(
            classifier.classify_lean("Donald Trump"),
            Err(ScoringError::Unavailable(_))
        ));
    }

    #[test]
    fn test_custom_phrases_from_yaml() {
        let phrases = PhraseSets::from_yaml_str(
            "republican:\n  - Red Wave\n  - \"  \"\ndemocrat:\n  - Blue Wall\n",
        )
        .unwrap();
        let scorer = Fixed(0.5);
        let classifier = LeanClassifier::new(&scorer, &phrases);
        assert_eq!(classifier.classify_lean("the RED WAVE").unwrap(), PoliticalCategory::Republican);
        assert_eq!(classifier.classify_lean("blue wall").unwrap(), PoliticalCategory::Democrat);
        assert_eq!(classifier.classify_lean("MAGA").unwrap(), PoliticalCategory::Neutral);
        assert_eq!(classifier.classify_lean("anything at all").unwrap(), PoliticalCategory::Neutral);
    }

    #[test]
    fn test_yaml_missing_party_defaults_to_empty() {
        let phrases = PhraseSets::from_yaml_str("democrat:\n  - Joe Biden\n").unwrap();
        assert!(phrases.republican.is_empty());
        assert_eq!(phrases.democrat, vec!["Joe Biden".to_string()]);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(
            serde_json::to_string(&PoliticalCategory::NeutralRepublican).unwrap(),
            "\"Neutral-Republican\""
        );
        assert_eq!(PoliticalCategory::NeutralDemocrat.to_string(), "Neutral-Democrat");
        let parsed: PoliticalCategory = serde_json::from_str("\"Neutral-Democrat\"").unwrap();
        assert_eq!(parsed, PoliticalCategory::NeutralDemocrat);
    }
}
