//! Command-line interface definitions.
//!
//! All options can be provided via command-line flags; the configuration
//! file paths can also come from environment variables.

use crate::pipeline::FailurePolicy;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for `subreddit_lean`.
///
/// # Examples
///
/// ```sh
/// # Label one file of collected comments
/// subreddit_lean -i comments.json -j ./json -m ./markdown
///
/// # Several inputs, custom phrase lists, stop on the first scoring failure
/// subreddit_lean -i politics.json -i news.json -j ./json -m ./markdown \
///     --phrases phrases.yaml --on-scoring-error abort
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON file(s) of collected comments: `[{"subreddit": ..., "comment": ...}]`
    #[arg(short, long = "input", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory for JSON records and the JSON report
    #[arg(short, long)]
    pub json_output_dir: PathBuf,

    /// Output directory for the Markdown report
    #[arg(short, long)]
    pub markdown_output_dir: PathBuf,

    /// YAML file with `republican:` and `democrat:` phrase lists
    #[arg(long, env = "LEAN_PHRASES")]
    pub phrases: Option<PathBuf>,

    /// Sentiment lexicon (`token<TAB>valence` per line) used instead of VADER
    #[arg(long, env = "LEAN_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// What to do when a comment cannot be scored
    #[arg(long, value_enum, default_value_t = FailurePolicy::Skip)]
    pub on_scoring_error: FailurePolicy,
}
