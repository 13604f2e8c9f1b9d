//! Core data model types for skillpath.
//!
//! These are the fundamental types that the entire skillpath system uses to
//! represent quizzes, submitted answers, and learner classifications. Field
//! names are stable: the persistence and display layers key off the JSON
//! names exactly as they appear here.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Question difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// One of the four answer options. Comparison is exact identity: a submitted
/// `A` matches only a correct `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::A => write!(f, "A"),
            Choice::B => write!(f, "B"),
            Choice::C => write!(f, "C"),
            Choice::D => write!(f, "D"),
        }
    }
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            "C" => Ok(Choice::C),
            "D" => Ok(Choice::D),
            other => Err(format!("unknown option key: {other}")),
        }
    }
}

/// The four answer texts, keyed A through D. Modeling this as a struct
/// rather than a map makes "exactly four options" hold by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

impl AnswerOptions {
    /// The answer text for a given option key.
    pub fn get(&self, choice: Choice) -> &str {
        match choice {
            Choice::A => &self.a,
            Choice::B => &self.b,
            Choice::C => &self.c,
            Choice::D => &self.d,
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the quiz.
    pub id: String,
    /// 1-based position matching presentation order.
    pub number: u32,
    pub difficulty: Difficulty,
    /// Free-text topic label used for per-topic scoring.
    pub topic: String,
    /// The question text.
    pub prompt: String,
    /// Optional code excerpt shown with the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub options: AnswerOptions,
    pub correct_option: Choice,
    pub explanation: String,
}

/// Quiz-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizMetadata {
    pub total_questions: u32,
    /// Estimated completion time in minutes.
    pub estimated_time: u32,
}

/// An ordered, fixed set of multiple-choice questions. Immutable once
/// constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub metadata: QuizMetadata,
    pub questions: Vec<Question>,
}

impl Quiz {
    /// The learner-facing projection of this quiz, with the answer key and
    /// explanations stripped. Question order and text fields are unchanged.
    pub fn display_view(&self) -> QuizView {
        QuizView {
            metadata: self.metadata.clone(),
            questions: self
                .questions
                .iter()
                .map(|q| QuestionView {
                    id: q.id.clone(),
                    number: q.number,
                    difficulty: q.difficulty,
                    topic: q.topic.clone(),
                    prompt: q.prompt.clone(),
                    code: q.code.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }
}

/// Display-safe quiz projection: no `correct_option`, no `explanation`.
/// This is the only quiz shape that may cross into a learner-facing channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizView {
    pub metadata: QuizMetadata,
    pub questions: Vec<QuestionView>,
}

/// A question as presented to the learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: String,
    pub number: u32,
    pub difficulty: Difficulty,
    pub topic: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub options: AnswerOptions,
}

/// A learner's answer to one question. A missing `selected_option` means the
/// question was shown but left blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmittedAnswer {
    #[serde(default)]
    pub selected_option: Option<Choice>,
}

/// Submitted answers keyed by question id. Ids not present in the quiz are
/// ignored; quiz questions with no entry are treated as unanswered.
pub type AnswerSheet = HashMap<String, SubmittedAnswer>;

/// A complete submission as handed over by the caller. The assessment
/// identifier is opaque to the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub assessment_id: String,
    pub answers: AnswerSheet,
    /// Total elapsed time in seconds, non-negative.
    pub elapsed_seconds: u64,
}

/// Derived learner skill classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    AbsoluteBeginner,
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::AbsoluteBeginner => "absolute_beginner",
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "absolute_beginner" => Ok(SkillLevel::AbsoluteBeginner),
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            other => Err(format!("unknown skill level: {other}")),
        }
    }
}

/// Coarse judgment of answering speed, derived from average seconds per
/// question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Fast,
    Normal,
    Slow,
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pace::Fast => write!(f, "fast"),
            Pace::Normal => write!(f, "normal"),
            Pace::Slow => write!(f, "slow"),
        }
    }
}

/// How urgently a weak topic needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}
