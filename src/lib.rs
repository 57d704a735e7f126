//! # subreddit_lean
//!
//! Labels social-media comments by political lean and sentiment, and
//! summarizes the labels as JSON and Markdown reports.
//!
//! ## Architecture
//!
//! The binary runs a three-stage pipeline over collected comments:
//! 1. **Categorize**: label each raw comment Democrat, Republican,
//!    Neutral-Democrat, Neutral-Republican or Neutral ([`lean`])
//! 2. **Preprocess**: normalize the text and drop comments that end up empty
//!    ([`text`])
//! 3. **Analyze**: score the cleaned text and bucket it Positive, Neutral or
//!    Negative ([`sentiment`])
//!
//! then aggregates the results ([`report`]) and writes them out ([`outputs`]).
//!
//! Classification is a pure function of the comment text and the injected
//! [`PolarityScorer`](sentiment::PolarityScorer).
//!
//! ```
//! use subreddit_lean::lean::{LeanClassifier, PhraseSets, PoliticalCategory};
//! use subreddit_lean::sentiment::VaderScorer;
//!
//! let scorer = VaderScorer::new();
//! let classifier = LeanClassifier::new(&scorer, &PhraseSets::default());
//! assert_eq!(
//!     classifier.classify_lean("I love MAGA so much!").unwrap(),
//!     PoliticalCategory::Republican
//! );
//! ```

pub mod cli;
pub mod lean;
pub mod models;
pub mod outputs;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod stopwords;
pub mod text;
pub mod utils;
