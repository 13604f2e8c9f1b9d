//! Scoring engine: turns a quiz plus submitted answers plus timing data into
//! a scored breakdown.
//!
//! The pass is deterministic and allocation-only: identical inputs produce
//! bit-identical results, and neither the quiz nor the answers are mutated.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{AnswerSheet, Choice, Difficulty, Pace, Quiz};

/// Average seconds-per-question below which the pace is "fast".
pub const FAST_PACE_THRESHOLD_SECS: f64 = 40.0;
/// Average seconds-per-question above which the pace is "slow".
pub const SLOW_PACE_THRESHOLD_SECS: f64 = 90.0;

/// Correct/total tally for one difficulty tier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DifficultyScore {
    pub correct: u32,
    pub total: u32,
}

impl DifficultyScore {
    /// Percentage correct, 0 when the tier saw no questions.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.total) * 100.0
        }
    }
}

/// Per-tier score buckets. All three tiers are always present, even when a
/// tier saw no questions.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreByDifficulty {
    pub beginner: DifficultyScore,
    pub intermediate: DifficultyScore,
    pub advanced: DifficultyScore,
}

impl ScoreByDifficulty {
    pub fn bucket(&self, difficulty: Difficulty) -> &DifficultyScore {
        match difficulty {
            Difficulty::Beginner => &self.beginner,
            Difficulty::Intermediate => &self.intermediate,
            Difficulty::Advanced => &self.advanced,
        }
    }

    fn bucket_mut(&mut self, difficulty: Difficulty) -> &mut DifficultyScore {
        match difficulty {
            Difficulty::Beginner => &mut self.beginner,
            Difficulty::Intermediate => &mut self.intermediate,
            Difficulty::Advanced => &mut self.advanced,
        }
    }
}

/// Correct/total tally and derived proficiency for one topic.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TopicScore {
    pub correct: u32,
    pub total: u32,
    pub proficiency_percent: f64,
}

/// Detail record for a question answered wrong or left blank, in original
/// quiz order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncorrectQuestion {
    pub id: String,
    pub number: u32,
    pub topic: String,
    pub difficulty: Difficulty,
    pub selected_option: Option<Choice>,
    pub correct_option: Choice,
    pub explanation: String,
}

/// Timing breakdown for the submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeAnalysis {
    pub total_seconds: u64,
    pub avg_per_question: f64,
    pub pace: Pace,
}

/// The scored breakdown of a submission. Produced once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Percentage 0-100.
    pub overall_score: f64,
    pub total_correct: u32,
    pub total_questions: u32,
    pub score_by_difficulty: ScoreByDifficulty,
    /// Keyed by topic label, insertion-ordered by first occurrence so output
    /// order is stable for display and testing.
    pub topic_performance: IndexMap<String, TopicScore>,
    pub incorrect_questions: Vec<IncorrectQuestion>,
    pub time_analysis: TimeAnalysis,
}

/// Score submitted answers against a quiz.
///
/// Questions with no matching answer entry count as wrong with no selected
/// option; answer entries whose id is not in the quiz are ignored. A quiz
/// with zero questions degrades to zero-valued scores instead of failing.
pub fn evaluate(quiz: &Quiz, answers: &AnswerSheet, elapsed_seconds: u64) -> EvaluationResult {
    let total_questions = quiz.questions.len() as u32;

    let mut total_correct = 0u32;
    let mut score_by_difficulty = ScoreByDifficulty::default();
    let mut topic_performance: IndexMap<String, TopicScore> = IndexMap::new();
    let mut incorrect_questions = Vec::new();

    for question in &quiz.questions {
        let selected = answers
            .get(&question.id)
            .and_then(|entry| entry.selected_option);
        let is_correct = selected == Some(question.correct_option);

        let bucket = score_by_difficulty.bucket_mut(question.difficulty);
        bucket.total += 1;
        if is_correct {
            bucket.correct += 1;
            total_correct += 1;
        }

        let topic = topic_performance
            .entry(question.topic.clone())
            .or_default();
        topic.total += 1;
        if is_correct {
            topic.correct += 1;
        }

        if !is_correct {
            incorrect_questions.push(IncorrectQuestion {
                id: question.id.clone(),
                number: question.number,
                topic: question.topic.clone(),
                difficulty: question.difficulty,
                selected_option: selected,
                correct_option: question.correct_option,
                explanation: question.explanation.clone(),
            });
        }
    }

    let overall_score = if total_questions == 0 {
        0.0
    } else {
        f64::from(total_correct) / f64::from(total_questions) * 100.0
    };

    for topic in topic_performance.values_mut() {
        topic.proficiency_percent = if topic.total == 0 {
            0.0
        } else {
            f64::from(topic.correct) / f64::from(topic.total) * 100.0
        };
    }

    let avg_per_question = if total_questions == 0 {
        0.0
    } else {
        elapsed_seconds as f64 / f64::from(total_questions)
    };
    let pace = if avg_per_question < FAST_PACE_THRESHOLD_SECS {
        Pace::Fast
    } else if avg_per_question > SLOW_PACE_THRESHOLD_SECS {
        Pace::Slow
    } else {
        Pace::Normal
    };

    EvaluationResult {
        overall_score,
        total_correct,
        total_questions,
        score_by_difficulty,
        topic_performance,
        incorrect_questions,
        time_analysis: TimeAnalysis {
            total_seconds: elapsed_seconds,
            avg_per_question,
            pace,
        },
    }
}
