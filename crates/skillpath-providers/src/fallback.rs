//! Built-in static content source.
//!
//! Serves a hand-authored quiz so assessments keep working with no API key
//! and no network. Roadmaps are not generated here; without a generative
//! backend the structured builder in `skillpath-core` covers them.

use async_trait::async_trait;
use serde_json::Value;

use skillpath_core::model::{
    AnswerOptions, Choice, Difficulty, Question, Quiz, QuizMetadata,
};
use skillpath_core::traits::{ContentSource, QuizRequest, RoadmapRequest};

/// Content source that serves the built-in quiz.
pub struct StaticSource;

/// The built-in assessment quiz. Ten questions across all three
/// difficulties; guaranteed to pass quiz validation.
pub fn builtin_quiz() -> Quiz {
    fn q(
        number: u32,
        difficulty: Difficulty,
        topic: &str,
        prompt: &str,
        code: Option<&str>,
        options: [&str; 4],
        correct: Choice,
        explanation: &str,
    ) -> Question {
        Question {
            id: format!("q{number}"),
            number,
            difficulty,
            topic: topic.into(),
            prompt: prompt.into(),
            code: code.map(Into::into),
            options: AnswerOptions {
                a: options[0].into(),
                b: options[1].into(),
                c: options[2].into(),
                d: options[3].into(),
            },
            correct_option: correct,
            explanation: explanation.into(),
        }
    }

    Quiz {
        metadata: QuizMetadata {
            total_questions: 10,
            estimated_time: 15,
        },
        questions: vec![
            q(
                1,
                Difficulty::Beginner,
                "Variables & Data Types",
                "What does the print() function do in Python?",
                Some("print('Hello')"),
                [
                    "Displays output to console",
                    "Stores data",
                    "Creates a variable",
                    "Deletes data",
                ],
                Choice::A,
                "print() outputs text to the screen.",
            ),
            q(
                2,
                Difficulty::Beginner,
                "Variables & Data Types",
                "What is the output of: print(2 + 3)?",
                Some("print(2 + 3)"),
                ["5", "23", "2 + 3", "Error"],
                Choice::A,
                "2 + 3 equals 5.",
            ),
            q(
                3,
                Difficulty::Beginner,
                "Variables & Data Types",
                "What is a variable?",
                Some("x = 10"),
                [
                    "A container to store data",
                    "A function",
                    "A library",
                    "A syntax error",
                ],
                Choice::A,
                "Variables store values in memory.",
            ),
            q(
                4,
                Difficulty::Beginner,
                "Control Flow",
                "What does an if statement do?",
                Some("if x > 5:\n    print('Big')"),
                [
                    "Executes code conditionally",
                    "Loops forever",
                    "Defines a function",
                    "Creates a variable",
                ],
                Choice::A,
                "if statements execute code only when conditions are true.",
            ),
            q(
                5,
                Difficulty::Intermediate,
                "Lists & Dictionaries",
                "What is a list in Python?",
                Some("my_list = [1, 2, 3]"),
                [
                    "An ordered collection of items",
                    "A single value",
                    "A function",
                    "A string",
                ],
                Choice::A,
                "Lists store multiple items in order.",
            ),
            q(
                6,
                Difficulty::Intermediate,
                "Functions",
                "What is a function?",
                Some("def greet():\n    print('Hello')"),
                [
                    "A reusable block of code",
                    "A variable",
                    "A data type",
                    "A loop",
                ],
                Choice::A,
                "Functions encapsulate reusable code.",
            ),
            q(
                7,
                Difficulty::Intermediate,
                "Functions",
                "What does 'return' do in a function?",
                Some("def add(a, b):\n    return a + b"),
                [
                    "Sends a value back to caller",
                    "Prints output",
                    "Ends the program",
                    "Stores a variable",
                ],
                Choice::A,
                "return sends values back from functions.",
            ),
            q(
                8,
                Difficulty::Intermediate,
                "Loops",
                "What is the output: for i in range(3): print(i)",
                Some("for i in range(3):\n    print(i)"),
                ["0 1 2", "1 2 3", "0 1 2 3", "Error"],
                Choice::A,
                "range(3) produces 0, 1, 2.",
            ),
            q(
                9,
                Difficulty::Advanced,
                "OOP Basics",
                "What is a class?",
                Some("class Dog:\n    def __init__(self, name):\n        self.name = name"),
                [
                    "A blueprint for objects",
                    "A function",
                    "A list",
                    "A string",
                ],
                Choice::A,
                "Classes define object blueprints.",
            ),
            q(
                10,
                Difficulty::Advanced,
                "OOP Basics",
                "What is an object?",
                Some("dog = Dog('Buddy')"),
                [
                    "An instance of a class",
                    "A data type",
                    "A function",
                    "A variable name",
                ],
                Choice::A,
                "Objects are instances created from classes.",
            ),
        ],
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn generate_quiz(&self, _request: &QuizRequest) -> anyhow::Result<Value> {
        Ok(serde_json::to_value(builtin_quiz())?)
    }

    async fn generate_roadmap(&self, _request: &RoadmapRequest) -> anyhow::Result<Value> {
        anyhow::bail!("static source does not generate roadmaps")
    }
}
