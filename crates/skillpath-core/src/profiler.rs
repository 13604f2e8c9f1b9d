//! Learner profiler: derives a skill classification, strengths/weaknesses,
//! and next-step recommendations from an evaluation.
//!
//! The skill-level decision tree is rule-ordered and first-match-wins; the
//! ordering is load-bearing (a profile with strong basics and weak
//! intermediate results classifies as `beginner` even at 50% overall) and
//! must not be rearranged.

use serde::{Deserialize, Serialize};

use crate::evaluator::EvaluationResult;
use crate::model::{Priority, SkillLevel};

/// Maximum number of next-step recommendations.
pub const MAX_NEXT_STEPS: usize = 4;

/// Topics at or above this proficiency count as strengths.
const STRENGTH_THRESHOLD: f64 = 70.0;
/// Topics below this proficiency count as weaknesses.
const WEAKNESS_THRESHOLD: f64 = 60.0;

/// A topic the learner performs well in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strength {
    pub topic: String,
    pub proficiency_percent: u32,
    pub note: String,
}

/// A topic needing focused practice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weakness {
    pub topic: String,
    pub proficiency_percent: u32,
    pub note: String,
    pub priority: Priority,
}

/// Derived learner model: classification, confidence, focus areas, and
/// recommendations. Produced once per evaluation, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub skill_level: SkillLevel,
    pub skill_level_reasoning: String,
    /// Integer truncation of the overall score, 0-100.
    pub confidence_score: u32,
    pub learning_pace: String,
    /// Sorted descending by proficiency; never empty.
    pub strengths: Vec<Strength>,
    /// Sorted ascending by proficiency; never empty.
    pub weaknesses: Vec<Weakness>,
    pub recommended_starting_point: String,
    pub estimated_weeks_to_proficiency: u32,
    pub personalized_message: String,
    /// At most [`MAX_NEXT_STEPS`] entries, fixed assembly order.
    pub next_steps: Vec<String>,
}

/// Derive a learner profile from an evaluation and the learner's declared
/// weekly study hours.
pub fn derive_profile(evaluation: &EvaluationResult, weekly_hours: u32) -> LearnerProfile {
    let overall = evaluation.overall_score;
    let beginner_percent = evaluation.score_by_difficulty.beginner.percent();
    let intermediate_percent = evaluation.score_by_difficulty.intermediate.percent();
    let advanced_percent = evaluation.score_by_difficulty.advanced.percent();

    // First match wins; see module docs.
    let (skill_level, reasoning) = if overall < 40.0 {
        (
            SkillLevel::AbsoluteBeginner,
            format!(
                "Your score of {overall:.0}% shows you are starting your learning journey. \
                 Focus on foundational concepts before moving to advanced topics."
            ),
        )
    } else if beginner_percent >= 80.0 && intermediate_percent < 50.0 {
        (
            SkillLevel::Beginner,
            format!(
                "You have solid grasp of basics ({beginner_percent:.0}%) but need practice \
                 with intermediate concepts ({intermediate_percent:.0}%). Keep building!"
            ),
        )
    } else if beginner_percent >= 80.0 && intermediate_percent >= 60.0 {
        (
            SkillLevel::Intermediate,
            format!(
                "You demonstrate strong fundamentals ({beginner_percent:.0}%) and solid \
                 intermediate skills ({intermediate_percent:.0}%). You're ready for more challenges!"
            ),
        )
    } else {
        (
            SkillLevel::Advanced,
            format!(
                "Excellent performance across all levels. Your score of {overall:.0}% shows \
                 strong mastery. Time for specialized topics!"
            ),
        )
    };

    let mut strong_topics: Vec<_> = evaluation
        .topic_performance
        .iter()
        .filter(|(_, score)| score.proficiency_percent >= STRENGTH_THRESHOLD)
        .collect();
    // Sort on the exact score before truncation; the stable sort keeps
    // first-seen topic order for exact ties.
    strong_topics.sort_by(|a, b| b.1.proficiency_percent.total_cmp(&a.1.proficiency_percent));
    let mut strengths: Vec<Strength> = strong_topics
        .into_iter()
        .map(|(topic, score)| Strength {
            topic: topic.clone(),
            proficiency_percent: score.proficiency_percent as u32,
            note: format!(
                "You answered {}/{} questions correctly",
                score.correct, score.total
            ),
        })
        .collect();

    if strengths.is_empty() {
        strengths.push(Strength {
            topic: "Basic Concepts".into(),
            proficiency_percent: beginner_percent as u32,
            note: "Your strongest area - foundation is solid".into(),
        });
    }

    let mut weak_topics: Vec<_> = evaluation
        .topic_performance
        .iter()
        .filter(|(_, score)| score.proficiency_percent < WEAKNESS_THRESHOLD)
        .collect();
    weak_topics.sort_by(|a, b| a.1.proficiency_percent.total_cmp(&b.1.proficiency_percent));
    let mut weaknesses: Vec<Weakness> = weak_topics
        .into_iter()
        .map(|(topic, score)| {
            let priority = if score.proficiency_percent < 30.0 {
                Priority::High
            } else if score.proficiency_percent < 50.0 {
                Priority::Medium
            } else {
                Priority::Low
            };
            Weakness {
                topic: topic.clone(),
                proficiency_percent: score.proficiency_percent as u32,
                note: format!(
                    "Only {}/{} correct - needs focused practice",
                    score.correct, score.total
                ),
                priority,
            }
        })
        .collect();

    if weaknesses.is_empty() {
        weaknesses.push(Weakness {
            topic: "Advanced Topics".into(),
            proficiency_percent: advanced_percent as u32,
            note: "Challenge yourself with more advanced problems".into(),
            priority: Priority::Low,
        });
    }

    let estimated_weeks = estimate_weeks(overall, weekly_hours);

    let personalized_message = if overall >= 80.0 {
        format!(
            "Fantastic! You scored {overall:.0}%. You're making excellent progress! \
             Keep up the momentum and tackle the next level."
        )
    } else if overall >= 60.0 {
        format!(
            "Good work! You scored {overall:.0}%. You have solid understanding. \
             Focus on the weak areas to improve further."
        )
    } else if overall >= 40.0 {
        format!(
            "You scored {overall:.0}%. Don't worry - every expert was once a beginner. \
             Review the concepts and try again!"
        )
    } else {
        format!(
            "Score: {overall:.0}%. This is just the beginning of your learning journey. \
             Take it step by step and you'll improve!"
        )
    };

    let next_steps = build_next_steps(skill_level, &weaknesses, &strengths);
    let recommended_starting_point = weaknesses[0].topic.clone();

    LearnerProfile {
        skill_level,
        skill_level_reasoning: reasoning,
        confidence_score: overall as u32,
        learning_pace: "moderate".into(),
        strengths,
        weaknesses,
        recommended_starting_point,
        estimated_weeks_to_proficiency: estimated_weeks,
        personalized_message,
        next_steps,
    }
}

/// Base weeks from the overall score, scaled by declared weekly hours
/// (floored both ways).
fn estimate_weeks(overall_score: f64, weekly_hours: u32) -> u32 {
    let base: u32 = if overall_score >= 80.0 {
        2
    } else if overall_score >= 60.0 {
        4
    } else if overall_score >= 40.0 {
        6
    } else {
        8
    };

    if weekly_hours <= 3 {
        (f64::from(base) * 1.5) as u32
    } else if weekly_hours >= 10 {
        (f64::from(base) * 0.7) as u32
    } else {
        base
    }
}

fn build_next_steps(
    skill_level: SkillLevel,
    weaknesses: &[Weakness],
    strengths: &[Strength],
) -> Vec<String> {
    let mut steps = Vec::new();

    if let Some(weakest) = weaknesses.first() {
        steps.push(format!(
            "Master '{}' - Your weakest area (focus here first)",
            weakest.topic
        ));
    }
    if let Some(strongest) = strengths.first() {
        steps.push(format!(
            "Build on '{}' - Your strength (apply these skills to projects)",
            strongest.topic
        ));
    }

    let level_steps: [&str; 2] = match skill_level {
        SkillLevel::AbsoluteBeginner => [
            "Review fundamentals with simpler resources and examples",
            "Practice basic syntax and simple programs",
        ],
        SkillLevel::Beginner => [
            "Solve more intermediate-level problems",
            "Start building small projects to apply your knowledge",
        ],
        SkillLevel::Intermediate => [
            "Tackle advanced problems and edge cases",
            "Contribute to real-world projects or build your own",
        ],
        SkillLevel::Advanced => [
            "Explore specialized topics and advanced patterns",
            "Mentor others and build complex applications",
        ],
    };
    steps.extend(level_steps.iter().map(|s| s.to_string()));

    steps.push("Practice daily - consistency matters more than duration".into());
    steps.truncate(MAX_NEXT_STEPS);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{
        DifficultyScore, ScoreByDifficulty, TimeAnalysis, TopicScore,
    };
    use crate::model::Pace;
    use indexmap::IndexMap;

    fn bucket(correct: u32, total: u32) -> DifficultyScore {
        DifficultyScore { correct, total }
    }

    fn topic(correct: u32, total: u32) -> TopicScore {
        TopicScore {
            correct,
            total,
            proficiency_percent: if total == 0 {
                0.0
            } else {
                f64::from(correct) / f64::from(total) * 100.0
            },
        }
    }

    fn make_evaluation(
        overall_score: f64,
        score_by_difficulty: ScoreByDifficulty,
        topics: Vec<(&str, TopicScore)>,
    ) -> EvaluationResult {
        let total_questions = score_by_difficulty.beginner.total
            + score_by_difficulty.intermediate.total
            + score_by_difficulty.advanced.total;
        let total_correct = score_by_difficulty.beginner.correct
            + score_by_difficulty.intermediate.correct
            + score_by_difficulty.advanced.correct;

        let mut topic_performance = IndexMap::new();
        for (name, score) in topics {
            topic_performance.insert(name.to_string(), score);
        }

        EvaluationResult {
            overall_score,
            total_correct,
            total_questions,
            score_by_difficulty,
            topic_performance,
            incorrect_questions: vec![],
            time_analysis: TimeAnalysis {
                total_seconds: 600,
                avg_per_question: 60.0,
                pace: Pace::Normal,
            },
        }
    }

    #[test]
    fn low_score_is_absolute_beginner() {
        let eval = make_evaluation(
            30.0,
            ScoreByDifficulty {
                beginner: bucket(3, 10),
                ..Default::default()
            },
            vec![("Basics", topic(3, 10))],
        );
        let profile = derive_profile(&eval, 5);
        assert_eq!(profile.skill_level, SkillLevel::AbsoluteBeginner);
        assert!(profile.skill_level_reasoning.contains("30%"));
    }

    #[test]
    fn mixed_profile_classifies_by_rule_order() {
        // Beginner bucket 100%, intermediate 40%, overall 50%: rule 1 fails
        // (50 >= 40), rule 2 matches (beginner >= 80, intermediate < 50).
        // The intuitive "advanced" answer is wrong here.
        let eval = make_evaluation(
            50.0,
            ScoreByDifficulty {
                beginner: bucket(3, 3),
                intermediate: bucket(2, 5),
                advanced: bucket(0, 2),
            },
            vec![
                ("Basics", topic(3, 3)),
                ("Functions", topic(2, 5)),
                ("OOP", topic(0, 2)),
            ],
        );
        let profile = derive_profile(&eval, 5);
        assert_eq!(profile.skill_level, SkillLevel::Beginner);
        assert!(profile.skill_level_reasoning.contains("100%"));
        assert!(profile.skill_level_reasoning.contains("40%"));
    }

    #[test]
    fn strong_fundamentals_and_intermediate_is_intermediate() {
        let eval = make_evaluation(
            75.0,
            ScoreByDifficulty {
                beginner: bucket(4, 4),
                intermediate: bucket(3, 4),
                advanced: bucket(0, 2),
            },
            vec![("Basics", topic(7, 8))],
        );
        let profile = derive_profile(&eval, 5);
        assert_eq!(profile.skill_level, SkillLevel::Intermediate);
    }

    #[test]
    fn intermediate_gap_falls_through_to_advanced() {
        // Beginner >= 80 but intermediate in [50, 60): neither rule 2 nor
        // rule 3 applies, so the fallthrough branch wins.
        let eval = make_evaluation(
            65.0,
            ScoreByDifficulty {
                beginner: bucket(4, 4),
                intermediate: bucket(11, 20),
                advanced: bucket(1, 2),
            },
            vec![("Basics", topic(16, 26))],
        );
        let profile = derive_profile(&eval, 5);
        assert_eq!(profile.skill_level, SkillLevel::Advanced);
    }

    #[test]
    fn strengths_sorted_descending_weaknesses_ascending() {
        let eval = make_evaluation(
            55.0,
            ScoreByDifficulty {
                beginner: bucket(5, 10),
                ..Default::default()
            },
            vec![
                ("Loops", topic(3, 4)),      // 75
                ("Basics", topic(1, 1)),     // 100
                ("Functions", topic(1, 2)),  // 50
                ("OOP", topic(0, 4)),        // 0
            ],
        );
        let profile = derive_profile(&eval, 5);

        let strength_topics: Vec<&str> =
            profile.strengths.iter().map(|s| s.topic.as_str()).collect();
        assert_eq!(strength_topics, ["Basics", "Loops"]);

        let weakness_topics: Vec<&str> =
            profile.weaknesses.iter().map(|w| w.topic.as_str()).collect();
        assert_eq!(weakness_topics, ["OOP", "Functions"]);
        assert_eq!(profile.weaknesses[0].priority, Priority::High);
        assert_eq!(profile.weaknesses[1].priority, Priority::Low);
        assert_eq!(profile.recommended_starting_point, "OOP");
    }

    #[test]
    fn sorting_uses_exact_scores_not_truncated_ones() {
        // 3/4 = 75.0 and 25/33 = 75.75 truncate to the same integer, as do
        // 11/20 = 55.0 and 5/9 = 55.55; ordering must follow the exact
        // scores, not the truncated display values.
        let eval = make_evaluation(
            60.0,
            ScoreByDifficulty {
                beginner: bucket(44, 66),
                ..Default::default()
            },
            vec![
                ("Alpha", topic(3, 4)),   // 75.0
                ("Beta", topic(25, 33)),  // 75.75
                ("Delta", topic(5, 9)),   // 55.55
                ("Gamma", topic(11, 20)), // 55.0
            ],
        );
        let profile = derive_profile(&eval, 5);

        let strength_topics: Vec<&str> =
            profile.strengths.iter().map(|s| s.topic.as_str()).collect();
        assert_eq!(strength_topics, ["Beta", "Alpha"]);

        let weakness_topics: Vec<&str> =
            profile.weaknesses.iter().map(|w| w.topic.as_str()).collect();
        assert_eq!(weakness_topics, ["Gamma", "Delta"]);
    }

    #[test]
    fn weakness_priority_bands() {
        let eval = make_evaluation(
            40.0,
            ScoreByDifficulty {
                beginner: bucket(4, 10),
                ..Default::default()
            },
            vec![
                ("Pointers", topic(1, 4)),   // 25 -> high
                ("Traits", topic(2, 5)),     // 40 -> medium
                ("Modules", topic(5, 9)),    // ~55 -> low
            ],
        );
        let profile = derive_profile(&eval, 5);
        assert_eq!(profile.weaknesses[0].priority, Priority::High);
        assert_eq!(profile.weaknesses[1].priority, Priority::Medium);
        assert_eq!(profile.weaknesses[2].priority, Priority::Low);
    }

    #[test]
    fn placeholders_synthesized_when_nothing_qualifies() {
        // Every topic lands in [60, 70): no strengths, no weaknesses.
        let eval = make_evaluation(
            65.0,
            ScoreByDifficulty {
                beginner: bucket(2, 3),
                intermediate: bucket(2, 3),
                advanced: bucket(1, 2),
            },
            vec![("Basics", topic(2, 3)), ("Functions", topic(2, 3))],
        );
        let profile = derive_profile(&eval, 5);

        assert_eq!(profile.strengths.len(), 1);
        assert_eq!(profile.strengths[0].topic, "Basic Concepts");
        assert_eq!(profile.weaknesses.len(), 1);
        assert_eq!(profile.weaknesses[0].topic, "Advanced Topics");
        assert_eq!(profile.weaknesses[0].priority, Priority::Low);
        assert_eq!(profile.recommended_starting_point, "Advanced Topics");
    }

    #[test]
    fn confidence_score_truncates() {
        let eval = make_evaluation(
            66.666,
            ScoreByDifficulty {
                beginner: bucket(2, 3),
                ..Default::default()
            },
            vec![("Basics", topic(2, 3))],
        );
        assert_eq!(derive_profile(&eval, 5).confidence_score, 66);
    }

    #[test]
    fn weeks_scale_with_declared_hours() {
        let eval = make_evaluation(
            50.0,
            ScoreByDifficulty {
                beginner: bucket(5, 10),
                ..Default::default()
            },
            vec![("Basics", topic(5, 10))],
        );

        // Base 6 for scores in [40, 60).
        assert_eq!(derive_profile(&eval, 5).estimated_weeks_to_proficiency, 6);
        // Few hours: 6 * 1.5 = 9.
        assert_eq!(derive_profile(&eval, 2).estimated_weeks_to_proficiency, 9);
        // Many hours: floor(6 * 0.7) = 4.
        assert_eq!(derive_profile(&eval, 10).estimated_weeks_to_proficiency, 4);
    }

    #[test]
    fn next_steps_capped_at_four() {
        let eval = make_evaluation(
            50.0,
            ScoreByDifficulty {
                beginner: bucket(5, 10),
                ..Default::default()
            },
            vec![("Basics", topic(8, 10)), ("OOP", topic(0, 2))],
        );
        let profile = derive_profile(&eval, 5);

        assert_eq!(profile.next_steps.len(), MAX_NEXT_STEPS);
        assert!(profile.next_steps[0].contains("OOP"));
        assert!(profile.next_steps[1].contains("Basics"));
    }

    #[test]
    fn message_bands_interpolate_score() {
        let eval = |score| {
            make_evaluation(
                score,
                ScoreByDifficulty {
                    beginner: bucket(1, 2),
                    ..Default::default()
                },
                vec![("Basics", topic(1, 2))],
            )
        };

        assert!(derive_profile(&eval(85.0), 5)
            .personalized_message
            .starts_with("Fantastic!"));
        assert!(derive_profile(&eval(70.0), 5)
            .personalized_message
            .starts_with("Good work!"));
        assert!(derive_profile(&eval(45.0), 5)
            .personalized_message
            .contains("every expert was once a beginner"));
        assert!(derive_profile(&eval(20.0), 5)
            .personalized_message
            .starts_with("Score: 20%"));
    }
}
