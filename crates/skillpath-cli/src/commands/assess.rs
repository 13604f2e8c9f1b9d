//! The `skillpath assess` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use skillpath_providers::config::load_config_from;
use skillpath_providers::{create_source, QuizService};

pub async fn execute(
    topic: Option<String>,
    output: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let topic = topic.unwrap_or_else(|| config.default_topic.clone());

    let service = match config.sources.get(&config.default_source) {
        Some(source_config) => QuizService::new(create_source(source_config)?),
        None => QuizService::offline(),
    };

    let quiz = service.fetch_quiz(&topic).await;

    // The --output file carries the answer key for grading; the learner
    // hands out only the redacted projection written next to it.
    let json = serde_json::to_string_pretty(&quiz)?;
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output, json)
        .with_context(|| format!("failed to write quiz to {}", output.display()))?;

    let view = quiz.display_view();
    let learner_output = output.with_extension("learner.json");
    std::fs::write(&learner_output, serde_json::to_string_pretty(&view)?)
        .with_context(|| format!("failed to write quiz to {}", learner_output.display()))?;
    println!(
        "Assessment quiz: {} ({} questions, ~{} min)",
        topic, view.metadata.total_questions, view.metadata.estimated_time
    );
    println!();

    for question in &view.questions {
        println!("{}. [{}] {}", question.number, question.topic, question.prompt);
        if let Some(code) = &question.code {
            for line in code.lines() {
                println!("       {line}");
            }
        }
        println!("   A) {}", question.options.a);
        println!("   B) {}", question.options.b);
        println!("   C) {}", question.options.c);
        println!("   D) {}", question.options.d);
        println!();
    }

    println!("Quiz saved to: {} (answer key included)", output.display());
    println!("Learner view saved to: {}", learner_output.display());
    println!("Fill in a submission file and run: skillpath grade --quiz {} --answers answers.json", output.display());

    Ok(())
}
