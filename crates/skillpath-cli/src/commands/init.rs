//! The `skillpath init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create skillpath.toml
    if std::path::Path::new("skillpath.toml").exists() {
        println!("skillpath.toml already exists, skipping.");
    } else {
        std::fs::write("skillpath.toml", SAMPLE_CONFIG)?;
        println!("Created skillpath.toml");
    }

    // Create an answers template
    let template_path = std::path::Path::new("answers.json");
    if template_path.exists() {
        println!("answers.json already exists, skipping.");
    } else {
        std::fs::write(template_path, ANSWERS_TEMPLATE)?;
        println!("Created answers.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit skillpath.toml (add a Gemini API key for generated quizzes)");
    println!("  2. Run: skillpath assess --topic Python");
    println!("  3. Fill in answers.json and run: skillpath grade --quiz quiz.json --answers answers.json");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# skillpath configuration

# Switch to "gemini" for generated quizzes and roadmaps.
default_source = "static"
default_topic = "Python"
default_weekly_hours = 5
output_dir = "./skillpath-reports"

[sources.gemini]
type = "gemini"
api_key = "${GEMINI_API_KEY}"
model = "gemini-2.0-flash"

[sources.static]
type = "static"
"#;

const ANSWERS_TEMPLATE: &str = r#"{
  "assessment_id": "local",
  "elapsed_seconds": 600,
  "answers": {
    "q1": { "selected_option": "A" },
    "q2": { "selected_option": "B" },
    "q3": { "selected_option": null }
  }
}
"#;
