//! Assessment report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::evaluator::EvaluationResult;
use crate::profiler::LearnerProfile;
use crate::roadmap::Roadmap;

/// A complete assessment: evaluation, derived profile, and study plan,
/// stamped with an id and creation time so runs can be kept side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Subject the learner was assessed on.
    pub topic: String,
    /// Hours per week the learner committed to.
    pub weekly_hours: u32,
    /// Scored quiz outcome.
    pub evaluation: EvaluationResult,
    /// Profile derived from the evaluation.
    pub profile: LearnerProfile,
    /// Study plan built from the profile.
    pub roadmap: Roadmap,
}

impl AssessmentReport {
    pub fn new(
        topic: impl Into<String>,
        weekly_hours: u32,
        evaluation: EvaluationResult,
        profile: LearnerProfile,
        roadmap: Roadmap,
    ) -> Self {
        AssessmentReport {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            topic: topic.into(),
            weekly_hours,
            evaluation,
            profile,
            roadmap,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AssessmentReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
