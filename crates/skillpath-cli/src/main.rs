//! skillpath CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "skillpath", version, about = "Learning assessment and roadmap toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an assessment quiz
    Assess {
        /// Topic to assess (defaults to the configured topic)
        #[arg(long)]
        topic: Option<String>,

        /// Where to write the full quiz JSON (answers included); a redacted
        /// learner copy is written alongside as <stem>.learner.json
        #[arg(long, default_value = "./quiz.json")]
        output: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Grade submitted answers and produce an assessment report
    Grade {
        /// Quiz JSON produced by `assess`
        #[arg(long)]
        quiz: PathBuf,

        /// Submission JSON with the learner's answers
        #[arg(long)]
        answers: PathBuf,

        /// Topic label for the report (defaults to the configured topic)
        #[arg(long)]
        topic: Option<String>,

        /// Weekly study hours (defaults to the configured hours)
        #[arg(long)]
        hours: Option<u32>,

        /// Output directory for reports
        #[arg(long, default_value = "./skillpath-reports")]
        output: PathBuf,

        /// Output format: json, html, markdown, all
        #[arg(long, default_value = "json")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Build a study roadmap without a full assessment
    Roadmap {
        /// Topic to plan for
        #[arg(long)]
        topic: String,

        /// Skill level: absolute_beginner, beginner, intermediate, advanced
        #[arg(long, default_value = "beginner")]
        skill_level: String,

        /// Weekly study hours
        #[arg(long, default_value = "5")]
        hours: u32,

        /// Topics to prioritize
        #[arg(long)]
        focus: Vec<String>,

        /// Write JSON to this path instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a quiz JSON file
    Validate {
        /// Path to the quiz JSON
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Create a starter config and answers template
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("skillpath=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assess {
            topic,
            output,
            config,
        } => commands::assess::execute(topic, output, config).await,
        Commands::Grade {
            quiz,
            answers,
            topic,
            hours,
            output,
            format,
            config,
        } => commands::grade::execute(quiz, answers, topic, hours, output, format, config).await,
        Commands::Roadmap {
            topic,
            skill_level,
            hours,
            focus,
            output,
        } => commands::roadmap::execute(topic, skill_level, hours, focus, output),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
