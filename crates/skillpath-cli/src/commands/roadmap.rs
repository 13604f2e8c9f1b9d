//! The `skillpath roadmap` command.
//!
//! Builds the structured roadmap directly from a declared skill level, with
//! no quiz in the loop.

use std::path::PathBuf;

use anyhow::{Context, Result};

use skillpath_core::model::Priority;
use skillpath_core::profiler::Weakness;
use skillpath_core::roadmap::build_roadmap;

pub fn execute(
    topic: String,
    skill_level: String,
    hours: u32,
    focus: Vec<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(hours >= 1, "hours must be at least 1");

    let weaknesses: Vec<Weakness> = focus
        .iter()
        .map(|topic| Weakness {
            topic: topic.clone(),
            proficiency_percent: 0,
            note: "Requested focus area".into(),
            priority: Priority::High,
        })
        .collect();

    let roadmap = build_roadmap(&topic, &skill_level, &weaknesses, hours);

    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(&roadmap)?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write roadmap to {}", path.display()))?;
            println!("Roadmap saved to: {}", path.display());
        }
        None => {
            println!("{}", roadmap.title);
            println!();
            println!("{}", roadmap.overview);
            println!();
            for week in &roadmap.weeks {
                println!("Week {}: {} — {}", week.week, week.title, week.tagline);
                println!("  Focus: {}", week.focus_areas.join(", "));
                println!("  Milestone: {}", week.milestone);
            }
            println!();
            println!("Tips:");
            for tip in &roadmap.success_tips {
                println!("  - {tip}");
            }
        }
    }

    Ok(())
}
