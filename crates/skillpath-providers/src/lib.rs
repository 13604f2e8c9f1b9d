//! skillpath-providers — content generation backends.
//!
//! Implements the `ContentSource` trait for the Gemini API and a built-in
//! static source, plus the generate-or-fallback services the CLI consumes.

pub mod config;
pub mod fallback;
pub mod gemini;
pub mod mock;
pub mod service;

pub use config::{create_source, load_config, SkillpathConfig, SourceConfig};
pub use service::{QuizService, RoadmapService};
pub use skillpath_core::error::SourceError;
