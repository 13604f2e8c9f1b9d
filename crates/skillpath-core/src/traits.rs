//! Core trait definition for quiz and roadmap generation backends.
//!
//! Implemented by the `skillpath-providers` crate. Backends return raw
//! JSON payloads; validation and normalization stay in this crate so a
//! misbehaving backend can never corrupt an assessment.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::profiler::{Strength, Weakness};

/// Trait for backends that generate quiz and roadmap content.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Human-readable source name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Generate a quiz payload. The returned JSON has not been validated.
    async fn generate_quiz(&self, request: &QuizRequest) -> anyhow::Result<Value>;

    /// Generate a roadmap payload. The returned JSON has not been validated.
    async fn generate_roadmap(&self, request: &RoadmapRequest) -> anyhow::Result<Value>;
}

/// Request for quiz generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    /// Subject to assess.
    pub topic: String,
    /// Number of questions the quiz must carry.
    pub question_count: u32,
}

/// Request for roadmap generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapRequest {
    /// Subject to plan for.
    pub topic: String,
    /// Skill level string from the learner profile.
    pub skill_level: String,
    /// Topics the learner is already strong in.
    #[serde(default)]
    pub strengths: Vec<Strength>,
    /// Topics the plan should concentrate on.
    #[serde(default)]
    pub weaknesses: Vec<Weakness>,
    /// Hours per week the learner committed to.
    pub weekly_hours: u32,
}

/// Extract a JSON object from a markdown-formatted backend response.
///
/// Handles:
/// - ```json fenced blocks (first one wins)
/// - Generic ``` blocks (if no json-specific block is found)
/// - Raw responses, trimmed to the outermost `{...}` span
///
/// Returns `None` when nothing in the response parses as JSON.
pub fn extract_json_from_markdown(response: &str) -> Option<Value> {
    let mut json_blocks = Vec::new();
    let mut generic_blocks = Vec::new();
    let mut in_block = false;
    let mut is_json_block = false;
    let mut current_block = String::new();

    for line in response.lines() {
        let trimmed = line.trim();

        if !in_block && trimmed.starts_with("```") {
            in_block = true;
            let lang = trimmed.trim_start_matches('`').trim().to_lowercase();
            is_json_block = lang == "json";
            current_block.clear();
            continue;
        }

        if in_block && trimmed == "```" {
            in_block = false;
            if is_json_block {
                json_blocks.push(current_block.clone());
            } else {
                generic_blocks.push(current_block.clone());
            }
            current_block.clear();
            continue;
        }

        if in_block {
            if !current_block.is_empty() {
                current_block.push('\n');
            }
            current_block.push_str(line);
        }
    }

    // Truncated (unclosed) blocks still count; the parse below decides.
    if in_block && !current_block.is_empty() {
        if is_json_block {
            json_blocks.push(current_block);
        } else {
            generic_blocks.push(current_block);
        }
    }

    for block in json_blocks.iter().chain(generic_blocks.iter()) {
        if let Ok(value) = serde_json::from_str::<Value>(block) {
            return Some(value);
        }
    }

    // No fenced blocks parsed; try the outermost brace span of the raw text.
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&response[start..=end]).ok()
}
