//! JSON output.
//!
//! Each run writes its stage outputs and report under a dated directory:
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── evening_categorized_comments.json
//!     ├── evening_cleaned_categorized_comments.json
//!     ├── evening_sentiment_categorized_comments.json
//!     └── evening_report.json
//! ```

use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `value` as pretty JSON to `{json_output_dir}/{date}/{run}_{name}.json`.
///
/// Creates the dated directory if needed and returns the written path.
#[instrument(level = "info", skip(value, json_output_dir), fields(dir = %json_output_dir.display()))]
pub async fn write_json<T: Serialize + ?Sized>(
    value: &T,
    json_output_dir: &Path,
    date: &str,
    run: &str,
    name: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(value)?;

    let dir = json_output_dir.join(date);
    if let Err(e) = fs::create_dir_all(&dir).await {
        error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = dir.join(format!("{}_{}.json", run, name));
    fs::write(&path, json).await?;
    info!(path = %path.display(), "Wrote JSON file");
    Ok(path)
}
