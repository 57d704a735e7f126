//! Markdown rendering and writing of a [`Report`].
//!
//! Every aggregate is rendered as a table so the file reads well in any
//! Markdown viewer and diffs cleanly between runs.

use crate::report::{GroupCounts, Report, SentimentCounts, WordCount};
use crate::sentiment::SentimentCategory;
use crate::utils::upcase;
use std::error::Error;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

/// Render a report as a Markdown document.
pub fn report_to_markdown(report: &Report, run: &str) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# Comment Lean Report: {} {}\n", report.generated_at, upcase(run));
    let stats = &report.stats;
    let _ = writeln!(
        md,
        "{} comments collected, {} categorized, {} empty after cleaning, {} skipped, **{} analyzed**.\n",
        stats.input, stats.categorized, stats.dropped_empty, stats.skipped, stats.scored
    );

    breakdown_section(&mut md, "Democrat Sentiment Breakdown", &report.democrat);
    breakdown_section(&mut md, "Republican Sentiment Breakdown", &report.republican);
    words_section(&mut md, "Most Common Words - Democrats", &report.democrat_top_words);
    words_section(&mut md, "Most Common Words - Republicans", &report.republican_top_words);

    let _ = writeln!(md, "## Overall Sentiment Distribution\n");
    if report.histogram.is_empty() {
        let _ = writeln!(md, "_No comments._\n");
    } else {
        let _ = writeln!(md, "| Score range | Comments |");
        let _ = writeln!(md, "|---|---:|");
        for bin in &report.histogram {
            let _ = writeln!(md, "| {:.2} to {:.2} | {} |", bin.start, bin.end, bin.count);
        }
        md.push('\n');
    }

    groups_section(&mut md, "Sentiment Distribution by Category", "Category", &report.by_category);
    groups_section(&mut md, "Sentiment Distribution by Subreddit", "Subreddit", &report.by_subreddit);

    let _ = writeln!(md, "## Sentiment Comparison by Category\n");
    let _ = writeln!(md, "| Sentiment | Democrat | Republican |");
    let _ = writeln!(md, "|---|---:|---:|");
    for sentiment in SentimentCategory::ALL {
        let _ = writeln!(
            md,
            "| {} | {} | {} |",
            sentiment,
            report.democrat.get(sentiment),
            report.republican.get(sentiment)
        );
    }

    md
}

/// Write a rendered report to `{dir}/{name}`.
///
/// The directory must already exist; a failed write is logged and returned.
#[instrument(level = "info", skip(md, markdown_output_dir), fields(dir = %markdown_output_dir.display()))]
pub async fn write_markdown(
    md: &str,
    markdown_output_dir: &Path,
    name: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = markdown_output_dir.join(name);
    if let Err(e) = tokio::fs::write(&path, md).await {
        error!(path = %path.display(), error = %e, "Failed writing Markdown");
        return Err(e.into());
    }
    info!(path = %path.display(), bytes = md.len(), "Wrote Markdown report");
    Ok(path)
}

fn breakdown_section(md: &mut String, title: &str, counts: &SentimentCounts) {
    let _ = writeln!(md, "## {}\n", title);
    if counts.total() == 0 {
        let _ = writeln!(md, "_No comments._\n");
        return;
    }
    let _ = writeln!(md, "| Sentiment | Comments | Share |");
    let _ = writeln!(md, "|---|---:|---:|");
    for sentiment in SentimentCategory::ALL {
        let count = counts.get(sentiment);
        if count == 0 {
            continue;
        }
        let share = counts.percent(sentiment).unwrap_or_default();
        let _ = writeln!(md, "| {} | {} | {:.1}% |", sentiment, count, share);
    }
    md.push('\n');
}

fn words_section(md: &mut String, title: &str, words: &[WordCount]) {
    let _ = writeln!(md, "## {}\n", title);
    if words.is_empty() {
        let _ = writeln!(md, "_No words found._\n");
        return;
    }
    let _ = writeln!(md, "| Word | Count |");
    let _ = writeln!(md, "|---|---:|");
    for w in words {
        let _ = writeln!(md, "| {} | {} |", w.word, w.count);
    }
    md.push('\n');
}

fn groups_section(md: &mut String, title: &str, label: &str, groups: &[GroupCounts]) {
    let _ = writeln!(md, "## {}\n", title);
    if groups.is_empty() {
        let _ = writeln!(md, "_No comments._\n");
        return;
    }
    let _ = writeln!(md, "| {} | Positive | Neutral | Negative |", label);
    let _ = writeln!(md, "|---|---:|---:|---:|");
    for g in groups {
        let _ = writeln!(
            md,
            "| {} | {} | {} | {} |",
            g.group.replace('|', "\\|"),
            g.counts.positive,
            g.counts.neutral,
            g.counts.negative
        );
    }
    md.push('\n');
}
