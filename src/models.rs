//! Record types passed between pipeline stages.
//!
//! - [`RawComment`]: a comment as collected, before any labelling
//! - [`CategorizedComment`]: a comment with its political lean
//! - [`CommentRecord`]: the final row, with sentiment score and bucket
//!
//! The final row has the persisted columns
//! `subreddit, comment, category, sentiment, sentiment_category`.

use crate::lean::PoliticalCategory;
use crate::sentiment::SentimentCategory;
use crate::text::coerce_text;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept any JSON value for a comment body. Non-strings become `""`.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_text(&value).to_string())
}

/// A comment as collected from a subreddit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub subreddit: String,
    /// The comment body. Missing, `null` or non-string bodies read as `""`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub comment: String,
}

/// A comment labelled with its political lean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedComment {
    pub subreddit: String,
    pub comment: String,
    pub category: PoliticalCategory,
}

/// A fully labelled comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub subreddit: String,
    pub comment: String,
    pub category: PoliticalCategory,
    /// Compound polarity score in `[-1.0, 1.0]`.
    pub sentiment: f64,
    pub sentiment_category: SentimentCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_comment_non_string_body_is_empty() {
        let raw: Vec<RawComment> = serde_json::from_str(
            r#"[
                {"subreddit": "politics", "comment": 123},
                {"subreddit": "news", "comment": null},
                {"subreddit": "liberal"},
                {"subreddit": "conservative", "comment": {"body": "x"}},
                {"subreddit": "worldnews", "comment": "MAGA"}
            ]"#,
        )
        .unwrap();
        let bodies: Vec<&str> = raw.iter().map(|r| r.comment.as_str()).collect();
        assert_eq!(bodies, vec!["", "", "", "", "MAGA"]);
    }

    #[test]
    fn test_comment_record_columns() {
        let record = CommentRecord {
            subreddit: "politics".to_string(),
            comment: "i love maga so much".to_string(),
            category: PoliticalCategory::Republican,
            sentiment: 0.6369,
            sentiment_category: SentimentCategory::Positive,
        };
        let value = serde_json::to_value(&record).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["category", "comment", "sentiment", "sentiment_category", "subreddit"]
        );
        assert_eq!(value["category"], "Republican");
        assert_eq!(value["sentiment_category"], "Positive");
    }

    #[test]
    fn test_categorized_comment_deserialization() {
        let json = r#"{"subreddit": "news", "comment": "x", "category": "Neutral-Republican"}"#;
        let record: CategorizedComment = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, PoliticalCategory::NeutralRepublican);
    }
}
