//! # subreddit_lean
//!
//! Reads collected subreddit comments, labels each one by political lean and
//! sentiment, and writes the labelled records plus a summary report.
//!
//! ## Usage
//!
//! ```sh
//! subreddit_lean -i comments.json -j ./json -m ./markdown
//! ```
//!
//! ## Flow
//!
//! 1. **Loading**: read every input file (concurrently, order preserved)
//! 2. **Labelling**: categorize, clean and score ([`subreddit_lean::pipeline`])
//! 3. **Output**: write stage records and the report as JSON, and the report
//!    as Markdown

use chrono::Local;
use clap::Parser;
use futures::stream::{self, StreamExt, TryStreamExt};
use std::error::Error;
use std::path::PathBuf;
use subreddit_lean::cli::Cli;
use subreddit_lean::lean::{LeanClassifier, PhraseSets};
use subreddit_lean::models::RawComment;
use subreddit_lean::outputs::{json, markdown};
use subreddit_lean::pipeline;
use subreddit_lean::report::Report;
use subreddit_lean::sentiment::{LexiconScorer, PolarityScorer, VaderScorer};
use subreddit_lean::utils::{ensure_writable_dir, time_of_day};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

const PARALLEL_LOADS: usize = 4;

#[instrument(level = "info", skip_all, fields(path = %path.display()))]
async fn load_comments(path: PathBuf) -> Result<Vec<RawComment>, Box<dyn Error>> {
    let source = tokio::fs::read_to_string(&path).await.map_err(|e| {
        error!(error = %e, "Failed to read input");
        e
    })?;
    let comments: Vec<RawComment> = serde_json::from_str(&source)?;
    info!(count = comments.len(), "Loaded comments");
    Ok(comments)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("subreddit_lean starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    for dir in [&args.json_output_dir, &args.markdown_output_dir] {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir.display(),
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Configuration ----
    let phrases = match &args.phrases {
        Some(path) => PhraseSets::load(path)?,
        None => PhraseSets::default(),
    };
    let scorer: Box<dyn PolarityScorer> = match &args.lexicon {
        Some(path) => {
            let lexicon = LexiconScorer::from_file(path)?;
            info!(lexicon_entries = lexicon.len(), "Using custom sentiment lexicon");
            Box::new(lexicon)
        }
        None => {
            info!("Using VADER sentiment scorer");
            Box::new(VaderScorer::new())
        }
    };
    let classifier = LeanClassifier::new(&scorer, &phrases);

    // ---- Load inputs ----
    let batches: Vec<Vec<RawComment>> = stream::iter(args.inputs.clone())
        .map(load_comments)
        .buffered(PARALLEL_LOADS)
        .try_collect()
        .await?;
    let raws: Vec<RawComment> = batches.into_iter().flatten().collect();
    info!(count = raws.len(), files = args.inputs.len(), "Total comments to label");

    // ---- Label ----
    let output = match pipeline::run(&classifier, &scorer, raws, args.on_scoring_error) {
        Ok(output) => output,
        Err(e) => {
            error!(error = %e, "Scorer unavailable; aborting batch");
            return Err(e.into());
        }
    };

    // ---- Report ----
    let now = Local::now();
    let local_date = now.date_naive().to_string();
    let run = time_of_day();
    let generated_at = format!("{} {}", local_date, now.time().format("%H:%M:%S"));
    let report = Report::build(&output.records, output.stats, generated_at);

    // ---- JSON output ----
    let json_dir = args.json_output_dir.as_path();
    json::write_json(&output.categorized, json_dir, &local_date, &run, "categorized_comments").await?;
    json::write_json(&output.cleaned, json_dir, &local_date, &run, "cleaned_categorized_comments")
        .await?;
    json::write_json(&output.records, json_dir, &local_date, &run, "sentiment_categorized_comments")
        .await?;
    json::write_json(&report, json_dir, &local_date, &run, "report").await?;

    // ---- Markdown output ----
    let md = markdown::report_to_markdown(&report, &run);
    let md_name = format!("{}_{}.md", local_date, run);
    markdown::write_markdown(&md, &args.markdown_output_dir, &md_name).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        scored = output.stats.scored,
        skipped = output.stats.skipped,
        "Execution complete"
    );

    Ok(())
}
