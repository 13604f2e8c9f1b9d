//! skillpath-report — rendering of assessment reports.
//!
//! Turns an `AssessmentReport` into human-readable markdown or a
//! self-contained HTML page.

pub mod html;
pub mod markdown;

pub use html::{generate_html, write_html_report};
pub use markdown::generate_markdown;
