//! Output generation for JSON and Markdown.
//!
//! # Submodules
//!
//! - [`json`]: writes stage records and the report as JSON
//! - [`markdown`]: renders a [`Report`](crate::report::Report) as Markdown tables
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── evening_categorized_comments.json
//!     ├── evening_cleaned_categorized_comments.json
//!     ├── evening_sentiment_categorized_comments.json
//!     └── evening_report.json
//!
//! markdown_output_dir/
//! └── 2025-05-06_evening.md
//! ```

pub mod json;
pub mod markdown;
