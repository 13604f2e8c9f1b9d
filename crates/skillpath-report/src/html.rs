//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use skillpath_core::report::AssessmentReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from an assessment report.
pub fn generate_html(report: &AssessmentReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>skillpath report — {}</title>\n",
        html_escape(&report.topic)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>skillpath report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Topic: <strong>{}</strong> | {} questions | {} hrs/week | {}</p>\n",
        html_escape(&report.topic),
        report.evaluation.total_questions,
        report.weekly_hours,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Score dashboard
    let eval = &report.evaluation;
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Score</h2>\n");
    html.push_str(&format!(
        "<p class=\"overall\">{:.1}% overall ({}/{} correct)</p>\n",
        eval.overall_score, eval.total_correct, eval.total_questions
    ));

    html.push_str("<table class=\"summary\">\n");
    html.push_str(
        "<thead><tr><th>Difficulty</th><th>Correct</th><th>Total</th><th>Score</th></tr></thead>\n",
    );
    html.push_str("<tbody>\n");
    for (label, bucket) in [
        ("Beginner", eval.score_by_difficulty.beginner),
        ("Intermediate", eval.score_by_difficulty.intermediate),
        ("Advanced", eval.score_by_difficulty.advanced),
    ] {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}%</td></tr>\n",
            label,
            bucket.correct,
            bucket.total,
            bucket.percent()
        ));
    }
    html.push_str("</tbody></table>\n");

    if !eval.topic_performance.is_empty() {
        html.push_str(&generate_topic_chart(eval));
    }
    html.push_str("</section>\n");

    // Profile
    let profile = &report.profile;
    html.push_str("<section class=\"profile\">\n");
    html.push_str("<h2>Learner profile</h2>\n");
    html.push_str(&format!(
        "<p><strong>{}</strong> (confidence {}%)</p>\n",
        html_escape(profile.skill_level.as_str()),
        profile.confidence_score
    ));
    html.push_str(&format!(
        "<p>{}</p>\n",
        html_escape(&profile.skill_level_reasoning)
    ));
    html.push_str(&format!(
        "<blockquote>{}</blockquote>\n",
        html_escape(&profile.personalized_message)
    ));

    html.push_str("<h3>Strengths</h3>\n<ul>\n");
    for s in &profile.strengths {
        html.push_str(&format!(
            "<li class=\"pass\">{} ({}%)</li>\n",
            html_escape(&s.topic),
            s.proficiency_percent
        ));
    }
    html.push_str("</ul>\n<h3>Weaknesses</h3>\n<ul>\n");
    for w in &profile.weaknesses {
        html.push_str(&format!(
            "<li class=\"fail\">{} ({}%)</li>\n",
            html_escape(&w.topic),
            w.proficiency_percent
        ));
    }
    html.push_str("</ul>\n</section>\n");

    // Roadmap
    let roadmap = &report.roadmap;
    html.push_str("<section class=\"roadmap\">\n");
    html.push_str(&format!("<h2>{}</h2>\n", html_escape(&roadmap.title)));
    html.push_str(&format!("<p>{}</p>\n", html_escape(&roadmap.overview)));
    for week in &roadmap.weeks {
        html.push_str("<details>\n");
        html.push_str(&format!(
            "<summary>Week {}: {}</summary>\n",
            week.week,
            html_escape(&week.title)
        ));
        html.push_str("<ul>\n");
        for objective in &week.objectives {
            html.push_str(&format!("<li>{}</li>\n", html_escape(objective)));
        }
        html.push_str("</ul>\n");
        html.push_str(&format!(
            "<p>Milestone: {}</p>\n",
            html_escape(&week.milestone)
        ));
        html.push_str("</details>\n");
    }
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AssessmentReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_topic_chart(eval: &skillpath_core::evaluator::EvaluationResult) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 200;

    let total_height = eval.topic_performance.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (topic, score)) in eval.topic_performance.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let fraction = score.proficiency_percent / 100.0;
        let width = (fraction * max_width as f64) as usize;

        let color = if score.proficiency_percent >= 70.0 {
            "#22c55e"
        } else if score.proficiency_percent >= 50.0 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(topic)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.1}%</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            score.proficiency_percent
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.overall { font-size: 1.4rem; font-weight: bold; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
li.pass { background: var(--pass); }
li.fail { background: var(--fail); }
blockquote { border-left: 4px solid var(--border); margin: 1rem 0; padding: 0.5rem 1rem; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use skillpath_core::evaluator::evaluate;
    use skillpath_core::model::{
        AnswerOptions, Choice, Difficulty, Question, Quiz, QuizMetadata,
    };
    use skillpath_core::profiler::derive_profile;
    use skillpath_core::roadmap::build_roadmap;
    use std::collections::HashMap;

    fn make_test_report() -> AssessmentReport {
        let quiz = Quiz {
            metadata: QuizMetadata {
                total_questions: 1,
                estimated_time: 1,
            },
            questions: vec![Question {
                id: "q1".into(),
                number: 1,
                difficulty: Difficulty::Beginner,
                topic: "Syntax & <Tags>".into(),
                prompt: "Pick one".into(),
                code: None,
                options: AnswerOptions {
                    a: "a".into(),
                    b: "b".into(),
                    c: "c".into(),
                    d: "d".into(),
                },
                correct_option: Choice::A,
                explanation: "Because.".into(),
            }],
        };
        let evaluation = evaluate(&quiz, &HashMap::new(), 30);
        let profile = derive_profile(&evaluation, 5);
        let roadmap = build_roadmap("HTML", profile.skill_level.as_str(), &profile.weaknesses, 5);
        AssessmentReport::new("HTML & CSS", 5, evaluation, profile, roadmap)
    }

    #[test]
    fn html_report_contains_required_elements() {
        let report = make_test_report();
        let html = generate_html(&report);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("HTML &amp; CSS"));
        assert!(html.contains("Learner profile"));
        assert!(html.contains("Week 1:"));
    }

    #[test]
    fn topic_labels_are_escaped() {
        let report = make_test_report();
        let html = generate_html(&report);
        assert!(html.contains("Syntax &amp; &lt;Tags&gt;"));
    }

    #[test]
    fn html_report_write_to_file() {
        let report = make_test_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");

        write_html_report(&report, &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
