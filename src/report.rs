//! Aggregates over labelled comments.
//!
//! A [`Report`] holds the numbers a reader needs to compare how each side is
//! talked about:
//!
//! - sentiment breakdown of Democrat and Republican comments
//! - the ten most common non-stop-words on each side
//! - a 20-bin histogram of sentiment scores
//! - sentiment counts per category and per subreddit
//!
//! Rendering lives in [`crate::outputs`].

use crate::lean::PoliticalCategory;
use crate::models::CommentRecord;
use crate::pipeline::PipelineStats;
use crate::sentiment::SentimentCategory;
use crate::stopwords;
use itertools::Itertools;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, instrument};

pub const TOP_WORDS: usize = 10;
pub const HISTOGRAM_BINS: usize = 20;

/// Number of comments in each sentiment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn add(&mut self, category: SentimentCategory) {
        match category {
            SentimentCategory::Positive => self.positive += 1,
            SentimentCategory::Neutral => self.neutral += 1,
            SentimentCategory::Negative => self.negative += 1,
        }
    }

    pub fn get(&self, category: SentimentCategory) -> usize {
        match category {
            SentimentCategory::Positive => self.positive,
            SentimentCategory::Neutral => self.neutral,
            SentimentCategory::Negative => self.negative,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Share of `category` in percent, `None` when there are no comments.
    pub fn percent(&self, category: SentimentCategory) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.get(category) as f64 * 100.0 / total as f64)
    }

    fn from_records<'a>(records: impl IntoIterator<Item = &'a CommentRecord>) -> Self {
        let mut counts = Self::default();
        for record in records {
            counts.add(record.sentiment_category);
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Sentiment counts for one group (a category label or a subreddit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCounts {
    pub group: String,
    pub counts: SentimentCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub stats: PipelineStats,
    pub total: usize,
    pub democrat: SentimentCounts,
    pub republican: SentimentCounts,
    pub democrat_top_words: Vec<WordCount>,
    pub republican_top_words: Vec<WordCount>,
    pub histogram: Vec<HistogramBin>,
    pub by_category: Vec<GroupCounts>,
    pub by_subreddit: Vec<GroupCounts>,
}

impl Report {
    /// Aggregate labelled records.
    #[instrument(level = "info", skip_all, fields(count = records.len()))]
    pub fn build(records: &[CommentRecord], stats: PipelineStats, generated_at: String) -> Self {
        let of = move |category: PoliticalCategory| {
            records.iter().filter(move |r| r.category == category)
        };

        let report = Self {
            generated_at,
            stats,
            total: records.len(),
            democrat: SentimentCounts::from_records(of(PoliticalCategory::Democrat)),
            republican: SentimentCounts::from_records(of(PoliticalCategory::Republican)),
            democrat_top_words: top_words(of(PoliticalCategory::Democrat), TOP_WORDS),
            republican_top_words: top_words(of(PoliticalCategory::Republican), TOP_WORDS),
            histogram: histogram(records.iter().map(|r| r.sentiment), HISTOGRAM_BINS),
            by_category: group_counts(records, |r| r.category.to_string()),
            by_subreddit: group_counts(records, |r| r.subreddit.clone()),
        };
        debug!(
            democrat = report.democrat.total(),
            republican = report.republican.total(),
            "Built report"
        );
        report
    }
}

/// Sentiment counts grouped by `key`, groups in lexical order.
fn group_counts<F>(records: &[CommentRecord], key: F) -> Vec<GroupCounts>
where
    F: Fn(&CommentRecord) -> String,
{
    let mut groups: BTreeMap<String, SentimentCounts> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().add(record.sentiment_category);
    }
    groups
        .into_iter()
        .map(|(group, counts)| GroupCounts { group, counts })
        .collect()
}

/// The `limit` most frequent non-stop-words. Ties keep first-seen order.
pub fn top_words<'a>(
    records: impl IntoIterator<Item = &'a CommentRecord>,
    limit: usize,
) -> Vec<WordCount> {
    let stop: HashSet<&str> = stopwords::ENGLISH.iter().copied().collect();
    let mut seen: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut order = 0usize;

    for record in records {
        for word in record.comment.split_whitespace() {
            if stop.contains(word) {
                continue;
            }
            let entry = seen.entry(word).or_insert_with(|| {
                order += 1;
                (0, order)
            });
            entry.0 += 1;
        }
    }

    seen.into_iter()
        .sorted_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        })
        .take(limit)
        .map(|(word, (count, _))| WordCount {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Equal-width histogram over the data range.
///
/// A single distinct value gets a range widened by 0.5 on each side. The
/// last bin includes its upper edge. No values, no bins.
pub fn histogram(values: impl IntoIterator<Item = f64>, bins: usize) -> Vec<HistogramBin> {
    let values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for v in values {
        let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::classify_sentiment;

    fn record(
        subreddit: &str,
        comment: &str,
        category: PoliticalCategory,
        sentiment: f64,
    ) -> CommentRecord {
        CommentRecord {
            subreddit: subreddit.to_string(),
            comment: comment.to_string(),
            category,
            sentiment,
            sentiment_category: classify_sentiment(sentiment),
        }
    }

    fn sample() -> Vec<CommentRecord> {
        vec![
            record("politics", "trump rally was great", PoliticalCategory::Republican, 0.6),
            record("politics", "the rally was a mess", PoliticalCategory::Democrat, -0.4),
            record("news", "biden speech tonight", PoliticalCategory::NeutralDemocrat, 0.0),
            record("news", "biden won the debate", PoliticalCategory::Democrat, 0.5),
            record("conservative", "trump trump trump", PoliticalCategory::Republican, 0.0),
            record("worldnews", "nice weather", PoliticalCategory::Neutral, 0.4),
        ]
    }

    #[test]
    fn test_party_breakdowns() {
        let report = Report::build(&sample(), PipelineStats::default(), "now".to_string());
        assert_eq!(report.total, 6);
        assert_eq!(
            report.democrat,
            SentimentCounts {
                positive: 1,
                neutral: 0,
                negative: 1
            }
        );
        assert_eq!(
            report.republican,
            SentimentCounts {
                positive: 1,
                neutral: 1,
                negative: 0
            }
        );
        assert_eq!(report.democrat.percent(SentimentCategory::Positive), Some(50.0));
        assert_eq!(SentimentCounts::default().percent(SentimentCategory::Positive), None);
    }

    #[test]
    fn test_top_words_skip_stop_words_and_rank_by_count() {
        let report = Report::build(&sample(), PipelineStats::default(), "now".to_string());
        let words: Vec<(&str, usize)> = report
            .republican_top_words
            .iter()
            .map(|w| (w.word.as_str(), w.count))
            .collect();
        assert_eq!(words, vec![("trump", 4), ("rally", 1), ("great", 1)]);

        let dem: Vec<&str> = report.democrat_top_words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(dem, vec!["rally", "mess", "biden", "debate"]);
    }

    #[test]
    fn test_top_words_limit() {
        let records = vec![record(
            "x",
            "alpha beta gamma delta",
            PoliticalCategory::Democrat,
            0.0,
        )];
        let words = top_words(&records, 2);
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "alpha");
        assert_eq!(words[1].word, "beta");
    }

    #[test]
    fn test_group_counts_sorted_by_label() {
        let report = Report::build(&sample(), PipelineStats::default(), "now".to_string());
        let groups: Vec<&str> = report.by_category.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(groups, vec!["Democrat", "Neutral", "Neutral-Democrat", "Republican"]);

        let subs: Vec<(&str, usize)> = report
            .by_subreddit
            .iter()
            .map(|g| (g.group.as_str(), g.counts.total()))
            .collect();
        assert_eq!(
            subs,
            vec![("conservative", 1), ("news", 2), ("politics", 2), ("worldnews", 1)]
        );
    }

    #[test]
    fn test_histogram_covers_range() {
        let bins = histogram(vec![-1.0, 0.0, 0.0, 1.0], 20);
        assert_eq!(bins.len(), 20);
        assert_eq!(bins[0].start, -1.0);
        assert_eq!(bins[19].end, 1.0);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[10].count, 2);
        assert_eq!(bins[19].count, 1);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 4);
    }

    #[test]
    fn test_histogram_single_value_and_empty() {
        let bins = histogram(vec![0.3, 0.3], 20);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
        assert!((bins[0].start - (-0.2)).abs() < 1e-9);
        assert!((bins[19].end - 0.8).abs() < 1e-9);
        assert!(histogram(Vec::new(), 20).is_empty());
    }

    #[test]
    fn test_empty_report() {
        let report = Report::build(&[], PipelineStats::default(), "now".to_string());
        assert_eq!(report.total, 0);
        assert!(report.histogram.is_empty());
        assert!(report.by_category.is_empty());
        assert!(report.democrat_top_words.is_empty());
    }
}
