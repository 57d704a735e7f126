//! Comment text normalization.
//!
//! Scraped comments arrive with links, markdown punctuation, emoji and mixed
//! case. Before a comment is scored for sentiment it is reduced to lower-case
//! ASCII words separated by whitespace:
//!
//! 1. URL-like substrings (anything starting with `http` up to the next
//!    whitespace) are removed.
//! 2. Every character that is not an ASCII letter or whitespace is removed.
//! 3. The result is lower-cased and trimmed.
//!
//! A comment may clean down to the empty string. The pipeline drops those
//! from aggregation; that is not an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").expect("valid URL regex"));
static NON_ALPHA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z\s]").expect("valid character-class regex"));

/// Normalize a comment for sentiment scoring and aggregation.
///
/// # Examples
///
/// ```
/// use subreddit_lean::text::clean;
///
/// assert_eq!(clean("Check http://example.com NOW!!"), "check  now");
/// ```
pub fn clean(text: &str) -> String {
    let without_urls = URL_RE.replace_all(text, "");
    let letters_only = NON_ALPHA_RE.replace_all(&without_urls, "");
    letters_only.to_lowercase().trim().to_string()
}

/// View an arbitrary JSON value as comment text.
///
/// Strings pass through; `null`, numbers, booleans, arrays and objects all
/// become the empty string so that malformed rows never abort a run.
pub fn coerce_text(value: &Value) -> &str {
    value.as_str().unwrap_or("")
}
