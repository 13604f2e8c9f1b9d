//! Markdown report generator.

use skillpath_core::model::{Pace, Priority};
use skillpath_core::report::AssessmentReport;

fn pace_label(pace: Pace) -> &'static str {
    match pace {
        Pace::Fast => "fast",
        Pace::Normal => "normal",
        Pace::Slow => "slow",
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "high",
        Priority::Medium => "medium",
        Priority::Low => "low",
    }
}

/// Render an assessment report as markdown.
pub fn generate_markdown(report: &AssessmentReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Assessment Report: {}\n\n", report.topic));
    md.push_str(&format!(
        "Generated {} | report `{}`\n\n",
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
        report.id
    ));

    // Scores
    let eval = &report.evaluation;
    md.push_str("## Score\n\n");
    md.push_str(&format!(
        "**Overall:** {:.1}% ({}/{} correct)\n\n",
        eval.overall_score, eval.total_correct, eval.total_questions
    ));

    md.push_str("| Difficulty | Correct | Total | Score |\n");
    md.push_str("|------------|---------|-------|-------|\n");
    for (label, bucket) in [
        ("Beginner", eval.score_by_difficulty.beginner),
        ("Intermediate", eval.score_by_difficulty.intermediate),
        ("Advanced", eval.score_by_difficulty.advanced),
    ] {
        md.push_str(&format!(
            "| {} | {} | {} | {:.1}% |\n",
            label,
            bucket.correct,
            bucket.total,
            bucket.percent()
        ));
    }
    md.push('\n');

    if !eval.topic_performance.is_empty() {
        md.push_str("### Topic performance\n\n");
        md.push_str("| Topic | Correct | Total | Proficiency |\n");
        md.push_str("|-------|---------|-------|-------------|\n");
        for (topic, score) in &eval.topic_performance {
            md.push_str(&format!(
                "| {} | {} | {} | {:.1}% |\n",
                topic, score.correct, score.total, score.proficiency_percent
            ));
        }
        md.push('\n');
    }

    md.push_str(&format!(
        "Pace: {} ({:.1}s per question, {}s total)\n\n",
        pace_label(eval.time_analysis.pace),
        eval.time_analysis.avg_per_question,
        eval.time_analysis.total_seconds
    ));

    // Profile
    let profile = &report.profile;
    md.push_str("## Learner profile\n\n");
    md.push_str(&format!(
        "**Skill level:** {} (confidence {}%)\n\n",
        profile.skill_level.as_str(),
        profile.confidence_score
    ));
    md.push_str(&format!("{}\n\n", profile.skill_level_reasoning));
    md.push_str(&format!("> {}\n\n", profile.personalized_message));

    md.push_str("### Strengths\n\n");
    for s in &profile.strengths {
        md.push_str(&format!(
            "- **{}** ({}%) — {}\n",
            s.topic, s.proficiency_percent, s.note
        ));
    }
    md.push('\n');

    md.push_str("### Weaknesses\n\n");
    for w in &profile.weaknesses {
        md.push_str(&format!(
            "- **{}** ({}%, {} priority) — {}\n",
            w.topic,
            w.proficiency_percent,
            priority_label(w.priority),
            w.note
        ));
    }
    md.push('\n');

    md.push_str("### Next steps\n\n");
    for (i, step) in profile.next_steps.iter().enumerate() {
        md.push_str(&format!("{}. {}\n", i + 1, step));
    }
    md.push('\n');

    // Missed questions
    if !eval.incorrect_questions.is_empty() {
        md.push_str("## Review\n\n");
        md.push_str("| # | Topic | Your answer | Correct | Explanation |\n");
        md.push_str("|---|-------|-------------|---------|-------------|\n");
        for q in &eval.incorrect_questions {
            let selected = q
                .selected_option
                .map(|c| c.to_string())
                .unwrap_or_else(|| "—".to_string());
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                q.number, q.topic, selected, q.correct_option, q.explanation
            ));
        }
        md.push('\n');
    }

    // Roadmap
    let roadmap = &report.roadmap;
    md.push_str(&format!("## {}\n\n", roadmap.title));
    md.push_str(&format!("{}\n\n", roadmap.overview));
    md.push_str(&format!(
        "{} weeks at {} hours/week\n\n",
        roadmap.total_weeks, roadmap.weekly_hours
    ));

    for week in &roadmap.weeks {
        md.push_str(&format!("### Week {}: {}\n\n", week.week, week.title));
        if !week.tagline.is_empty() {
            md.push_str(&format!("*{}*\n\n", week.tagline));
        }
        md.push_str(&format!("Focus: {}\n\n", week.focus_areas.join(", ")));
        for objective in &week.objectives {
            md.push_str(&format!("- {objective}\n"));
        }
        md.push_str(&format!("\n**Milestone:** {}\n\n", week.milestone));
    }

    if !roadmap.success_tips.is_empty() {
        md.push_str("### Tips\n\n");
        for tip in &roadmap.success_tips {
            md.push_str(&format!("- {tip}\n"));
        }
        md.push('\n');
    }

    md
}
