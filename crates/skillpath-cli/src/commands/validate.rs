//! The `skillpath validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use skillpath_core::validator::{quiz_warnings, EXPECTED_QUESTION_COUNT};

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&quiz_path)
        .with_context(|| format!("failed to read quiz from {}", quiz_path.display()))?;
    let payload: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse quiz JSON: {}", quiz_path.display()))?;

    let question_count = payload
        .get("questions")
        .and_then(|q| q.as_array())
        .map(|q| q.len())
        .unwrap_or(0);
    println!("Quiz: {} ({} questions)", quiz_path.display(), question_count);

    let warnings = quiz_warnings(&payload, EXPECTED_QUESTION_COUNT);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Quiz is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
