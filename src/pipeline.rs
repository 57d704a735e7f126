//! The labelling pipeline, in production order.
//!
//! 1. **Categorize**: label each raw comment's lean from its *raw* text, so
//!    phrases containing punctuation (`"right-wing"`) still match.
//! 2. **Preprocess**: [`clean`] each comment and drop the ones that clean to
//!    nothing.
//! 3. **Analyze**: score the *cleaned* text and bucket the score.
//!
//! Every stage maps comments independently and preserves input order. The
//! only failure is an unavailable scorer; [`FailurePolicy`] decides whether
//! that skips the comment or aborts the batch.

use crate::lean::LeanClassifier;
use crate::models::{CategorizedComment, CommentRecord, RawComment};
use crate::sentiment::{PolarityScorer, ScoringError, classify_sentiment, sentiment_score};
use crate::text::clean;
use clap::ValueEnum;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// What to do with a comment whose score cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FailurePolicy {
    /// Log the failure and leave the comment out.
    #[default]
    Skip,
    /// Stop the batch at the first failure.
    Abort,
}

/// Per-run counters, logged at the end of a run and included in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PipelineStats {
    pub input: usize,
    pub categorized: usize,
    pub dropped_empty: usize,
    pub skipped: usize,
    pub scored: usize,
}

/// Apply `policy` to one stage result.
fn apply_policy<T>(
    result: Result<T, ScoringError>,
    policy: FailurePolicy,
    index: usize,
    subreddit: &str,
    skipped: &mut usize,
) -> Result<Option<T>, ScoringError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if policy == FailurePolicy::Skip => {
            warn!(index, %subreddit, error = %e, "Scoring failed; skipping comment");
            *skipped += 1;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Stage 1: label each raw comment with its political lean.
///
/// Returns the labelled comments and the number skipped.
#[instrument(level = "info", skip_all, fields(count = raws.len()))]
pub fn categorize<S>(
    classifier: &LeanClassifier<'_, S>,
    raws: Vec<RawComment>,
    policy: FailurePolicy,
) -> Result<(Vec<CategorizedComment>, usize), ScoringError>
where
    S: PolarityScorer + ?Sized,
{
    let mut skipped = 0;
    let mut out = Vec::with_capacity(raws.len());
    for (index, raw) in raws.into_iter().enumerate() {
        let category = classifier.classify_lean(&raw.comment);
        if let Some(category) = apply_policy(category, policy, index, &raw.subreddit, &mut skipped)? {
            out.push(CategorizedComment {
                subreddit: raw.subreddit,
                comment: raw.comment,
                category,
            });
        }
    }
    info!(categorized = out.len(), skipped, "Categorized comments");
    Ok((out, skipped))
}

/// Stage 2: clean comment text and drop comments that become empty.
///
/// Returns the cleaned comments and the number dropped.
#[instrument(level = "info", skip_all, fields(count = records.len()))]
pub fn preprocess(records: Vec<CategorizedComment>) -> (Vec<CategorizedComment>, usize) {
    let before = records.len();
    let cleaned: Vec<CategorizedComment> = records
        .into_iter()
        .filter_map(|mut record| {
            record.comment = clean(&record.comment);
            (!record.comment.is_empty()).then_some(record)
        })
        .collect();
    let dropped = before - cleaned.len();
    info!(kept = cleaned.len(), dropped, "Cleaned comments");
    (cleaned, dropped)
}

/// Stage 3: score each comment and bucket the score.
///
/// Returns the final records and the number skipped.
#[instrument(level = "info", skip_all, fields(count = records.len()))]
pub fn analyze_sentiment<S>(
    scorer: &S,
    records: Vec<CategorizedComment>,
    policy: FailurePolicy,
) -> Result<(Vec<CommentRecord>, usize), ScoringError>
where
    S: PolarityScorer + ?Sized,
{
    let mut skipped = 0;
    let mut out = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let score = sentiment_score(scorer, &record.comment);
        if let Some(sentiment) = apply_policy(score, policy, index, &record.subreddit, &mut skipped)? {
            out.push(CommentRecord {
                subreddit: record.subreddit,
                comment: record.comment,
                category: record.category,
                sentiment,
                sentiment_category: classify_sentiment(sentiment),
            });
        }
    }
    info!(scored = out.len(), skipped, "Analyzed sentiment");
    Ok((out, skipped))
}

/// Output of a full pipeline run, including each stage's records.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub categorized: Vec<CategorizedComment>,
    pub cleaned: Vec<CategorizedComment>,
    pub records: Vec<CommentRecord>,
    pub stats: PipelineStats,
}

/// Run all three stages.
///
/// # Errors
///
/// Only with [`FailurePolicy::Abort`], when the scorer is unavailable.
#[instrument(level = "info", skip_all, fields(count = raws.len(), ?policy))]
pub fn run<S>(
    classifier: &LeanClassifier<'_, S>,
    scorer: &S,
    raws: Vec<RawComment>,
    policy: FailurePolicy,
) -> Result<PipelineOutput, ScoringError>
where
    S: PolarityScorer + ?Sized,
{
    let input = raws.len();
    let (categorized, skipped_lean) = categorize(classifier, raws, policy)?;
    let (cleaned, dropped_empty) = preprocess(categorized.clone());
    let (records, skipped_sentiment) = analyze_sentiment(scorer, cleaned.clone(), policy)?;

    let stats = PipelineStats {
        input,
        categorized: categorized.len(),
        dropped_empty,
        skipped: skipped_lean + skipped_sentiment,
        scored: records.len(),
    };
    info!(?stats, "Pipeline complete");
    Ok(PipelineOutput {
        categorized,
        cleaned,
        records,
        stats,
    })
}
