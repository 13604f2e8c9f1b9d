//! skillpath-core — Deterministic evaluation and learner-modeling engine.
//!
//! This crate defines the quiz data model, the structure validator, the
//! scoring engine, the learner profiler, and the roadmap generator. All of
//! it is synchronous and pure: content generation lives behind the
//! [`traits::ContentSource`] trait implemented in `skillpath-providers`.

pub mod error;
pub mod evaluator;
pub mod model;
pub mod profiler;
pub mod report;
pub mod roadmap;
pub mod traits;
pub mod validator;
