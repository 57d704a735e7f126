//! Utility functions for run naming, log formatting, and file system checks.
//!
//! - Time classification for naming each run's outputs
//! - String truncation and capitalization for logs and report headings
//! - File system validation for output directories

use chrono::{Local, NaiveTime, Timelike};
use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Classify a time of day into morning, afternoon, or evening.
///
/// - **Morning**: 00:00 - 08:00
/// - **Afternoon**: 08:00 - 16:00
/// - **Evening**: 16:00 - 24:00
pub fn time_of_day_at(time: NaiveTime) -> &'static str {
    match time.hour() {
        0..=7 => "morning",
        8..=15 => "afternoon",
        _ => "evening",
    }
}

/// Classify the current local time; used to name a run's output files.
#[instrument]
pub fn time_of_day() -> String {
    let tod = Local::now().time();
    let which = time_of_day_at(tod);
    tracing::debug!(%tod, %which, "Computed time_of_day");
    which.to_string()
}

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` bytes are cut at the nearest char boundary at or
/// below `max`, with `"…(+N bytes)"` appended.
///
/// # Examples
///
/// ```
/// use subreddit_lean::utils::truncate_for_log;
///
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Capitalize the first character of a string.
///
/// Used for report headings (e.g., "morning" -> "Morning").
pub fn upcase(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then creates and immediately
/// deletes a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // "é" is two bytes; cutting at 3 would split the second one.
        assert_eq!(truncate_for_log("ééé", 3), "é…(+4 bytes)");
    }

    #[test]
    fn test_upcase() {
        assert_eq!(upcase("hello"), "Hello");
        assert_eq!(upcase("world"), "World");
        assert_eq!(upcase(""), "");
        assert_eq!(upcase("a"), "A");
    }

    #[test]
    fn test_time_of_day_boundaries() {
        let at = |h, m| time_of_day_at(NaiveTime::from_hms_opt(h, m, 0).unwrap());
        assert_eq!(at(0, 0), "morning");
        assert_eq!(at(6, 30), "morning");
        assert_eq!(at(7, 59), "morning");
        assert_eq!(at(8, 0), "afternoon");
        assert_eq!(at(15, 59), "afternoon");
        assert_eq!(at(16, 0), "evening");
        assert_eq!(at(23, 59), "evening");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_writable_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        assert!(!nested.join("..__probe_write__").exists());
    }
}
