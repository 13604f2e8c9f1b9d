//! The `skillpath grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use skillpath_core::evaluator::evaluate;
use skillpath_core::model::{Pace, Quiz, Submission};
use skillpath_core::profiler::derive_profile;
use skillpath_core::report::AssessmentReport;
use skillpath_providers::config::load_config_from;
use skillpath_providers::{create_source, RoadmapService};
use skillpath_report::html::write_html_report;
use skillpath_report::markdown::generate_markdown;

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    quiz_path: PathBuf,
    answers_path: PathBuf,
    topic: Option<String>,
    hours: Option<u32>,
    output: PathBuf,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let topic = topic.unwrap_or_else(|| config.default_topic.clone());
    let weekly_hours = hours.unwrap_or(config.default_weekly_hours);

    let quiz_json = std::fs::read_to_string(&quiz_path)
        .with_context(|| format!("failed to read quiz from {}", quiz_path.display()))?;
    let quiz: Quiz = serde_json::from_str(&quiz_json)
        .with_context(|| format!("failed to parse quiz: {}", quiz_path.display()))?;

    let submission_json = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers from {}", answers_path.display()))?;
    let submission: Submission = serde_json::from_str(&submission_json)
        .with_context(|| format!("failed to parse answers: {}", answers_path.display()))?;

    let evaluation = evaluate(&quiz, &submission.answers, submission.elapsed_seconds);
    let profile = derive_profile(&evaluation, weekly_hours);

    let roadmap_service = match config.sources.get(&config.default_source) {
        Some(source_config) => RoadmapService::new(create_source(source_config)?),
        None => RoadmapService::offline(),
    };
    let roadmap = roadmap_service
        .build_roadmap(&topic, &profile, weekly_hours)
        .await;

    let report = AssessmentReport::new(&topic, weekly_hours, evaluation, profile, roadmap);
    tracing::info!(report_id = %report.id, topic, "assessment graded");

    print_summary(&report);

    std::fs::create_dir_all(&output)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "html", "markdown"]
    } else {
        format.split(',').collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                println!("Report saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(&report, &path)?;
                println!("HTML report: {}", path.display());
            }
            "markdown" | "md" => {
                let path = output.join(format!("report-{timestamp}.md"));
                std::fs::write(&path, generate_markdown(&report))?;
                println!("Markdown report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}

fn print_summary(report: &AssessmentReport) {
    let eval = &report.evaluation;
    let profile = &report.profile;

    let mut table = Table::new();
    table.set_header(vec!["", "Correct", "Total", "Score"]);
    table.add_row(vec![
        Cell::new("Overall"),
        Cell::new(eval.total_correct),
        Cell::new(eval.total_questions),
        Cell::new(format!("{:.1}%", eval.overall_score)),
    ]);
    for (label, bucket) in [
        ("Beginner", eval.score_by_difficulty.beginner),
        ("Intermediate", eval.score_by_difficulty.intermediate),
        ("Advanced", eval.score_by_difficulty.advanced),
    ] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(bucket.correct),
            Cell::new(bucket.total),
            Cell::new(format!("{:.1}%", bucket.percent())),
        ]);
    }
    println!("{table}");

    let pace = match eval.time_analysis.pace {
        Pace::Fast => "fast",
        Pace::Normal => "normal",
        Pace::Slow => "slow",
    };
    println!();
    println!(
        "Skill level: {} (confidence {}%, pace {})",
        profile.skill_level.as_str(),
        profile.confidence_score,
        pace
    );
    println!("{}", profile.personalized_message);
    println!();
    println!("Next steps:");
    for (i, step) in profile.next_steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!();
    println!(
        "Roadmap: {} weeks at {} hours/week",
        report.roadmap.total_weeks, report.roadmap.weekly_hours
    );
    println!();
}
