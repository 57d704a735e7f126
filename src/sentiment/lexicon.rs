//! Lexicon-based polarity scoring.
//!
//! [`LexiconScorer`] follows the VADER approach: each word found in a
//! valence lexicon contributes its valence, adjusted by the words around it,
//! and the sum is squashed into `[-1, 1]`.
//!
//! # Adjustments
//!
//! - **Boosters** ("very", "slightly", ...) within three words before a
//!   lexicon word shift its valence by `B_INCR`/`B_DECR`, decaying with
//!   distance (x1, x0.95, x0.9).
//! - **Negation** ("not", "never", anything ending in `n't`) within three
//!   words flips and damps the valence by [`N_SCALAR`].
//! - **ALL-CAPS** words in otherwise mixed-case text gain [`C_INCR`].
//! - **"but"** halves the weight of everything before it and scales
//!   everything after it by 1.5.
//! - **`!` and `?`** add emphasis in the direction of the sum.
//!
//! Scoring is deterministic. Text without any lexicon word, including the
//! empty string, scores a compound of exactly `0.0`.

use super::scorer::{PolarityScorer, PolarityScores, ScoringError};
use super::words::{BOOSTERS, C_INCR, LEXICON, N_SCALAR, NEGATIONS};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Normalization constant approximating the maximum expected sum.
const ALPHA: f64 = 15.0;
const EXCLAMATION_INCR: f64 = 0.292;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_MAX: f64 = 0.96;

/// A deterministic valence-lexicon sentiment scorer.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<String, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl LexiconScorer {
    /// Build a scorer over the built-in lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(
            LEXICON
                .iter()
                .map(|(word, valence)| (word.to_string(), *valence))
                .collect(),
        )
    }

    fn with_lexicon(lexicon: HashMap<String, f64>) -> Self {
        Self {
            lexicon,
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Parse a lexicon in `token<TAB>valence[<TAB>...]` form.
    ///
    /// Extra tab-separated columns are ignored, so the four-column VADER
    /// lexicon file loads as is. Blank lines and lines starting with `# `
    /// (hash then space) are skipped, so emoticon tokens such as `#-)` load
    /// as entries. Tokens are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Unavailable`] naming the first line that has
    /// no valence or whose valence is not a number.
    pub fn from_lexicon_str(source: &str) -> Result<Self, ScoringError> {
        let mut lexicon = HashMap::new();
        for (idx, line) in source.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with("# ") {
                continue;
            }
            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default().trim();
            let valence = fields
                .next()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite());
            match (token.is_empty(), valence) {
                (false, Some(valence)) => {
                    lexicon.insert(token.to_lowercase(), valence);
                }
                _ => {
                    return Err(ScoringError::Unavailable(format!(
                        "malformed lexicon entry on line {}: {:?}",
                        idx + 1,
                        line
                    )));
                }
            }
        }
        if lexicon.is_empty() {
            return Err(ScoringError::Unavailable("lexicon has no entries".to_string()));
        }
        Ok(Self::with_lexicon(lexicon))
    }

    /// Load a lexicon file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::Unavailable`] if the file cannot be read or
    /// does not parse.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScoringError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            ScoringError::Unavailable(format!("cannot read lexicon {}: {}", path.display(), e))
        })?;
        let scorer = Self::from_lexicon_str(&source)?;
        info!(entries = scorer.len(), "Loaded sentiment lexicon");
        Ok(scorer)
    }

    /// Number of entries in the valence lexicon.
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    fn valence_of(&self, word: &str) -> Option<f64> {
        self.lexicon.get(&word.to_lowercase()).copied()
    }

    fn is_negation(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.negations.contains(lower.as_str()) || lower.contains("n't")
    }

    fn booster_shift(&self, word: &str, valence: f64, cap_diff: bool) -> f64 {
        let lower = word.to_lowercase();
        let Some(&base) = self.boosters.get(lower.as_str()) else {
            return 0.0;
        };
        let mut shift = if valence < 0.0 { -base } else { base };
        if cap_diff && is_all_caps(word) {
            shift += if valence > 0.0 { C_INCR } else { -C_INCR };
        }
        shift
    }

    fn word_valence(&self, words: &[&str], i: usize, cap_diff: bool) -> f64 {
        let word = words[i];
        let Some(mut valence) = self.valence_of(word) else {
            return 0.0;
        };

        if cap_diff && is_all_caps(word) {
            valence += if valence > 0.0 { C_INCR } else { -C_INCR };
        }

        for distance in 1..=3usize {
            if i < distance {
                break;
            }
            let prior = words[i - distance];
            if self.valence_of(prior).is_some() {
                continue;
            }
            let mut shift = self.booster_shift(prior, valence, cap_diff);
            shift *= match distance {
                2 => 0.95,
                3 => 0.9,
                _ => 1.0,
            };
            valence += shift;
            if self.is_negation(prior) {
                valence *= N_SCALAR;
            }
        }

        valence
    }

    fn score_words(&self, text: &str) -> Vec<f64> {
        let words: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        let caps = words.iter().filter(|w| is_all_caps(w)).count();
        let cap_diff = caps > 0 && caps < words.len();

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            let lower = words[i].to_lowercase();
            let kind_of = lower == "kind"
                && words
                    .get(i + 1)
                    .is_some_and(|next| next.eq_ignore_ascii_case("of"));
            if self.boosters.contains_key(lower.as_str()) || kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.word_valence(&words, i, cap_diff));
        }

        if let Some(but_idx) = words.iter().position(|w| w.eq_ignore_ascii_case("but")) {
            for (idx, s) in sentiments.iter_mut().enumerate() {
                if idx < but_idx {
                    *s *= 0.5;
                } else if idx > but_idx {
                    *s *= 1.5;
                }
            }
        }
        sentiments
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<PolarityScores, ScoringError> {
        let sentiments = self.score_words(text);
        if sentiments.is_empty() {
            return Ok(PolarityScores::default());
        }

        let emphasis = punctuation_emphasis(text);
        let mut sum: f64 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = normalize(sum);

        let (mut pos_sum, mut neg_sum, mut neu_count) = (0.0_f64, 0.0_f64, 0.0_f64);
        for &s in &sentiments {
            if s > 0.0 {
                pos_sum += s + 1.0;
            } else if s < 0.0 {
                neg_sum += s - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }
        let total = pos_sum + neg_sum.abs() + neu_count;

        let scores = PolarityScores {
            neg: round_to(neg_sum.abs() / total, 3),
            neu: round_to(neu_count / total, 3),
            pos: round_to(pos_sum / total, 3),
            compound: round_to(compound, 4),
        };
        debug!(compound = scores.compound, words = sentiments.len(), "Scored text");
        Ok(scores)
    }
}

/// Squash an unbounded valence sum into `[-1, 1]`.
fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * EXCLAMATION_INCR;
    let questions = text.matches('?').count();
    let questions = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_MAX,
    };
    exclamations + questions
}

/// Strip surrounding punctuation unless that would leave an emoticon-sized
/// stub (two characters or fewer), in which case the token is kept whole.
fn strip_punctuation(token: &str) -> &str {
    let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
    if stripped.chars().count() <= 2 {
        token
    } else {
        stripped
    }
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
