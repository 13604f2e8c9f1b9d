//! Roadmap generator: expands a skill profile into a structured multi-week
//! study plan.
//!
//! Pure data assembly from hand-authored week templates. The richer
//! externally generated roadmap path is normalized through
//! [`Roadmap::from_external`]; everything else here runs with zero external
//! dependency.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::profiler::Weakness;

/// Week count when the skill level string is not one of the known four.
const DEFAULT_TOTAL_WEEKS: u32 = 8;

/// Number of hand-authored week templates this layer defines. Weeks beyond
/// this come only from external generation.
pub const TEMPLATE_WEEK_COUNT: u32 = 6;

/// Minimum week count an externally generated roadmap must carry to be
/// accepted.
const MIN_EXTERNAL_WEEKS: usize = 10;

/// A learning resource stub attached to a week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub time_estimate: String,
}

/// One week of the study plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Week {
    pub week: u32,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    pub focus_areas: Vec<String>,
    pub objectives: Vec<String>,
    pub resources: Vec<Resource>,
    pub exercises: Vec<String>,
    pub daily_tasks: Vec<String>,
    pub milestone: String,
    pub estimated_hours: u32,
}

/// A checkpoint in the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub week: u32,
    pub title: String,
    pub description: String,
}

/// A suggested project, gated by plan length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub week: u32,
    pub title: String,
    pub description: String,
    pub complexity: String,
    pub duration: String,
}

/// A complete multi-week study plan. Independently regenerable from a
/// profile; not required to persist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub title: String,
    pub overview: String,
    pub total_weeks: u32,
    pub weekly_hours: u32,
    pub skill_level: String,
    pub weeks: Vec<Week>,
    pub milestones: Vec<Milestone>,
    pub success_tips: Vec<String>,
    pub project_ideas: Vec<ProjectIdea>,
}

impl Roadmap {
    /// Normalize an externally generated roadmap payload.
    ///
    /// Accepted only when it carries at least [`MIN_EXTERNAL_WEEKS`] weeks
    /// that deserialize cleanly; missing milestone/tip/project sections are
    /// backfilled as empty. `None` signals "use the structured fallback".
    pub fn from_external(
        payload: &Value,
        topic: &str,
        skill_level: &str,
        weekly_hours: u32,
    ) -> Option<Roadmap> {
        let raw_weeks = payload.get("weeks")?.as_array()?;
        if raw_weeks.len() < MIN_EXTERNAL_WEEKS {
            return None;
        }

        let mut weeks: Vec<Week> =
            serde_json::from_value(Value::Array(raw_weeks.clone())).ok()?;
        weeks.truncate(12);

        let section = |key: &str| -> Value {
            payload.get(key).cloned().unwrap_or(Value::Array(vec![]))
        };

        Some(Roadmap {
            title: format!("Your 12-Week {topic} Mastery Roadmap"),
            overview: format!("A comprehensive personalized learning path to master {topic}"),
            total_weeks: 12,
            weekly_hours,
            skill_level: skill_level.to_string(),
            weeks,
            milestones: serde_json::from_value(section("milestones")).unwrap_or_default(),
            success_tips: serde_json::from_value(section("success_tips")).unwrap_or_default(),
            project_ideas: serde_json::from_value(section("project_ideas")).unwrap_or_default(),
        })
    }
}

/// Total plan length as a function of skill level. Unrecognized levels
/// degrade to the default rather than failing.
pub fn weeks_for_level(skill_level: &str) -> u32 {
    match skill_level {
        "absolute_beginner" => 12,
        "beginner" => 10,
        "intermediate" => 6,
        "advanced" => 4,
        _ => DEFAULT_TOTAL_WEEKS,
    }
}

/// Build the structured study plan from hand-authored templates.
pub fn build_roadmap(
    topic: &str,
    skill_level: &str,
    weaknesses: &[Weakness],
    weekly_hours: u32,
) -> Roadmap {
    let total_weeks = weeks_for_level(skill_level);
    let weak_topics: Vec<&str> = weaknesses.iter().map(|w| w.topic.as_str()).collect();

    let mut weeks = Vec::new();
    weeks.push(week_one(topic, weekly_hours));
    if total_weeks >= 2 {
        weeks.push(week_two(topic, &weak_topics, weekly_hours));
    }
    if total_weeks >= 3 {
        weeks.push(week_three(topic, weekly_hours));
    }
    if total_weeks >= 4 {
        weeks.push(week_four(topic, weekly_hours));
    }
    if total_weeks >= 5 {
        weeks.push(week_five(topic, weekly_hours));
    }
    if total_weeks >= 6 {
        weeks.push(week_six(topic, weekly_hours));
    }

    Roadmap {
        title: format!("Your {total_weeks}-Week Journey to {topic} Proficiency"),
        overview: overview_message(skill_level, total_weeks),
        total_weeks,
        weekly_hours,
        skill_level: skill_level.to_string(),
        weeks,
        milestones: milestones(total_weeks),
        success_tips: success_tips(&weak_topics, total_weeks),
        project_ideas: project_ideas(topic, total_weeks, weak_topics.first().copied()),
    }
}

fn week_one(topic: &str, weekly_hours: u32) -> Week {
    Week {
        week: 1,
        title: "Start Your Journey".into(),
        tagline: "Foundation & Getting Started".into(),
        focus_areas: vec![
            format!("Introduction to {topic}"),
            "Key Terminology".into(),
            "Basic Principles".into(),
        ],
        objectives: vec![
            format!("Understand what {topic} is"),
            format!("Learn core principles of {topic}"),
            "Grasp essential terminology".into(),
        ],
        resources: vec![
            Resource {
                kind: "tutorial".into(),
                title: format!("Getting Started with {topic}"),
                description: format!("Comprehensive introduction to {topic} fundamentals"),
                time_estimate: "3 hours".into(),
            },
            Resource {
                kind: "reading".into(),
                title: format!("{topic} Basics Guide"),
                description: "Essential reading material for beginners".into(),
                time_estimate: "2 hours".into(),
            },
        ],
        exercises: vec![
            "Complete vocabulary quiz".into(),
            "Identify core concepts in examples".into(),
            "Answer 20 practice questions".into(),
        ],
        daily_tasks: vec![
            "Monday-Tuesday: Watch introductory videos (3 hrs)".into(),
            "Wednesday: Read foundational material (2 hrs)".into(),
            "Thursday-Friday: Complete practice exercises (3 hrs)".into(),
            "Weekend: Consolidate learning, create summary notes (3 hrs)".into(),
        ],
        milestone: "Understand basic concepts and vocabulary".into(),
        estimated_hours: weekly_hours,
    }
}

fn week_two(topic: &str, weak_topics: &[&str], weekly_hours: u32) -> Week {
    let focus: Vec<&str> = weak_topics.iter().take(2).copied().collect();
    let tagline = if focus.is_empty() {
        "Strengthen core concepts".to_string()
    } else {
        format!("Focus on {}", focus.join(", "))
    };
    let lead = focus.first().copied().unwrap_or("fundamental");

    Week {
        week: 2,
        title: "Deep Dive Into Concepts".into(),
        tagline,
        focus_areas: if focus.is_empty() {
            vec![format!("{topic} Core Concepts")]
        } else {
            focus.iter().map(|s| s.to_string()).collect()
        },
        objectives: vec![
            format!("Master {lead} concepts"),
            "Build a strong conceptual foundation".into(),
            "Understand practical applications".into(),
        ],
        resources: vec![Resource {
            kind: "course".into(),
            title: format!("Understanding {topic} Principles"),
            description: "In-depth exploration of core concepts".into(),
            time_estimate: "4 hours".into(),
        }],
        exercises: vec![
            format!("Master {lead} through 30 problems"),
            "Explain concepts in your own words".into(),
            "Solve real-world scenarios".into(),
        ],
        daily_tasks: vec![
            "Monday-Tuesday: Study core principles (4 hrs)".into(),
            "Wednesday: Review practical examples (2 hrs)".into(),
            "Thursday-Friday: Practice concept mapping (3 hrs)".into(),
            "Weekend: Create concept summary cards (3 hrs)".into(),
        ],
        milestone: "Deep understanding of core concepts".into(),
        estimated_hours: weekly_hours,
    }
}

fn week_three(topic: &str, weekly_hours: u32) -> Week {
    Week {
        week: 3,
        title: "Hands-On Practice".into(),
        tagline: "Build Your First Real Project".into(),
        focus_areas: vec![
            "Practical Application".into(),
            "Problem Solving".into(),
            "Project Building".into(),
        ],
        objectives: vec![
            "Apply concepts to solve real problems".into(),
            "Build your first practical project".into(),
            "Understand common mistakes".into(),
        ],
        resources: vec![Resource {
            kind: "project".into(),
            title: format!("Build Your First {topic} Project"),
            description: "Simple beginner-friendly project".into(),
            time_estimate: "5 hours".into(),
        }],
        exercises: vec![
            "Solve 20 practical problems".into(),
            "Build and complete mini-project".into(),
            "Debug and optimize your solution".into(),
        ],
        daily_tasks: vec![
            "Monday-Wednesday: Build mini-project (6 hrs)".into(),
            "Thursday: Test and debug (2 hrs)".into(),
            "Friday: Optimize and improve (2 hrs)".into(),
            "Weekend: Document and reflect (2 hrs)".into(),
        ],
        milestone: "Complete first practical project".into(),
        estimated_hours: weekly_hours,
    }
}

fn week_four(topic: &str, weekly_hours: u32) -> Week {
    Week {
        week: 4,
        title: "Level Up".into(),
        tagline: "Intermediate Techniques & Patterns".into(),
        focus_areas: vec![
            "Advanced Concepts".into(),
            "Best Practices".into(),
            "Optimization".into(),
        ],
        objectives: vec![
            "Learn intermediate techniques".into(),
            "Understand design patterns".into(),
            "Follow industry best practices".into(),
        ],
        resources: vec![Resource {
            kind: "course".into(),
            title: format!("Advanced {topic} Techniques"),
            description: "Intermediate level deep dive".into(),
            time_estimate: "4 hours".into(),
        }],
        exercises: vec![
            "Solve 25 intermediate problems".into(),
            "Implement 3 different approaches".into(),
            "Optimize existing solutions".into(),
        ],
        daily_tasks: vec![
            "Monday-Tuesday: Study advanced techniques (4 hrs)".into(),
            "Wednesday-Thursday: Implement and practice (4 hrs)".into(),
            "Friday: Optimize solutions (2 hrs)".into(),
            "Weekend: Study best practices (2 hrs)".into(),
        ],
        milestone: "Master intermediate techniques".into(),
        estimated_hours: weekly_hours,
    }
}

fn week_five(topic: &str, weekly_hours: u32) -> Week {
    Week {
        week: 5,
        title: "Build Bigger".into(),
        tagline: "Complex Project Integration".into(),
        focus_areas: vec![
            "System Design".into(),
            "Integration".into(),
            "Problem Solving".into(),
        ],
        objectives: vec![
            "Build more complex projects".into(),
            "Integrate multiple concepts".into(),
            "Apply strategic thinking".into(),
        ],
        resources: vec![Resource {
            kind: "project".into(),
            title: format!("Build Medium-Complexity {topic} Project"),
            description: "Intermediate project combining skills".into(),
            time_estimate: "8 hours".into(),
        }],
        exercises: vec![
            "Plan and design architecture".into(),
            "Implement core features".into(),
            "Add advanced features".into(),
            "Test thoroughly".into(),
        ],
        daily_tasks: vec![
            "Monday: Plan and design (2 hrs)".into(),
            "Tuesday-Thursday: Implement features (6 hrs)".into(),
            "Friday: Add advanced features (2 hrs)".into(),
            "Weekend: Test and document (2 hrs)".into(),
        ],
        milestone: "Complete medium complexity project".into(),
        estimated_hours: weekly_hours,
    }
}

fn week_six(topic: &str, weekly_hours: u32) -> Week {
    Week {
        week: 6,
        title: "Master Achiever".into(),
        tagline: "Final Push to Proficiency".into(),
        focus_areas: vec![
            "Mastery".into(),
            "Optimization".into(),
            "Real-World Skills".into(),
        ],
        objectives: vec![
            "Achieve proficiency level mastery".into(),
            "Optimize for production".into(),
            "Apply real-world scenarios".into(),
        ],
        resources: vec![Resource {
            kind: "course".into(),
            title: format!("Professional {topic} Practices"),
            description: "Production-ready techniques".into(),
            time_estimate: "4 hours".into(),
        }],
        exercises: vec![
            "Solve advanced real-world problems".into(),
            "Build optimized solutions".into(),
            "Create production-ready code".into(),
        ],
        daily_tasks: vec![
            "Monday-Tuesday: Study professional practices (4 hrs)".into(),
            "Wednesday-Thursday: Build production-ready solution (4 hrs)".into(),
            "Friday: Polish and optimize (2 hrs)".into(),
            "Weekend: Celebrate and reflect (2 hrs)".into(),
        ],
        milestone: "Achieve proficiency and professional readiness".into(),
        estimated_hours: weekly_hours,
    }
}

fn overview_message(skill_level: &str, total_weeks: u32) -> String {
    match skill_level {
        "absolute_beginner" => format!(
            "Welcome to your learning journey! You're starting from scratch, and that's \
             awesome. In just {total_weeks} weeks you'll transform from a complete beginner \
             to a proficient professional. This roadmap is tailored to your unique learning \
             needs. Let's do this!"
        ),
        "beginner" => format!(
            "Great! You have some foundation. In {total_weeks} weeks, we'll strengthen your \
             weak areas and take your skills to the next level. You're on the right track!"
        ),
        "intermediate" => format!(
            "You're already solid! In {total_weeks} weeks of focused practice on your weaker \
             areas, you'll achieve true proficiency. Time to master the details!"
        ),
        "advanced" => format!(
            "You're almost there! Just {total_weeks} more weeks to cross the finish line to \
             mastery. Let's polish your weak spots and reach the summit!"
        ),
        _ => "Let's start this amazing journey!".to_string(),
    }
}

fn milestones(total_weeks: u32) -> Vec<Milestone> {
    let mut checkpoints = Vec::new();

    if total_weeks >= 2 {
        checkpoints.push(Milestone {
            week: 1,
            title: "Journey Begins".into(),
            description: "Foundation laid, concepts understood".into(),
        });
    }
    if total_weeks >= 3 {
        checkpoints.push(Milestone {
            week: 2,
            title: "Building Momentum".into(),
            description: "Weak areas strengthened, confidence growing".into(),
        });
    }
    if total_weeks >= 4 {
        checkpoints.push(Milestone {
            week: 3,
            title: "First Victory".into(),
            description: "First project completed! Proof of progress".into(),
        });
    }
    if total_weeks >= 6 {
        checkpoints.push(Milestone {
            week: total_weeks,
            title: "Proficiency Achieved".into(),
            description: "You're now proficient! Ready for real-world challenges".into(),
        });
    }

    checkpoints
}

fn success_tips(weak_topics: &[&str], total_weeks: u32) -> Vec<String> {
    let mut tips: Vec<String> = vec![
        "You've got this! Progress beats perfection. Small steps daily lead to big achievements."
            .into(),
        "Consistency is key. Show up every day, even if just for 30 minutes.".into(),
    ];

    if let Some(weakest) = weak_topics.first() {
        tips.push(format!(
            "Extra focus on {weakest}: this is your superpower to unlock!"
        ));
    }

    tips.extend([
        "Build projects! Nothing beats learning by doing.".to_string(),
        "Connect with others learning the same topic: share, learn, grow together.".to_string(),
        "Keep a learning journal to track what you learn and celebrate wins.".to_string(),
        "Review regularly: spaced repetition is your secret weapon.".to_string(),
        "Don't compare your beginning to someone else's middle.".to_string(),
        format!("In {total_weeks} weeks, you'll be amazed at how far you've come!"),
    ]);

    tips.truncate(8);
    tips
}

fn project_ideas(topic: &str, total_weeks: u32, weak_area: Option<&str>) -> Vec<ProjectIdea> {
    let mut projects = vec![ProjectIdea {
        week: 1,
        title: format!("Master {}", weak_area.unwrap_or("Your Weak Area")),
        description: format!(
            "Focused exercises to strengthen {}",
            weak_area.unwrap_or("areas you are struggling with")
        ),
        complexity: "beginner".into(),
        duration: "Daily practice".into(),
    }];

    if total_weeks >= 2 {
        projects.push(ProjectIdea {
            week: 2,
            title: format!("Apply {}", weak_area.unwrap_or("Core Concepts")),
            description: format!(
                "Build something using what you just learned about {}",
                weak_area.unwrap_or("core concepts")
            ),
            complexity: "beginner".into(),
            duration: "2-3 days".into(),
        });
    }
    if total_weeks >= 3 {
        projects.push(ProjectIdea {
            week: 3,
            title: format!("Complete Your First {topic} Project"),
            description: "A complete project combining all learned concepts".into(),
            complexity: "intermediate".into(),
            duration: "Full week".into(),
        });
    }
    if total_weeks >= 5 {
        projects.push(ProjectIdea {
            week: 5,
            title: format!("Advanced {topic} Project"),
            description: "Push yourself with a more complex project".into(),
            complexity: "advanced".into(),
            duration: "2 weeks".into(),
        });
    }

    projects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use serde_json::json;

    fn weakness(topic: &str, percent: u32) -> Weakness {
        Weakness {
            topic: topic.into(),
            proficiency_percent: percent,
            note: "Only a few correct - needs focused practice".into(),
            priority: Priority::High,
        }
    }

    #[test]
    fn week_count_by_skill_level() {
        assert_eq!(weeks_for_level("absolute_beginner"), 12);
        assert_eq!(weeks_for_level("beginner"), 10);
        assert_eq!(weeks_for_level("intermediate"), 6);
        assert_eq!(weeks_for_level("advanced"), 4);
        assert_eq!(weeks_for_level("grandmaster"), 8);
    }

    #[test]
    fn weeks_capped_by_templates_and_total() {
        let long = build_roadmap("Python", "absolute_beginner", &[], 5);
        assert_eq!(long.total_weeks, 12);
        assert_eq!(long.weeks.len(), TEMPLATE_WEEK_COUNT as usize);

        let short = build_roadmap("Python", "advanced", &[], 5);
        assert_eq!(short.total_weeks, 4);
        assert_eq!(short.weeks.len(), 4);
    }

    #[test]
    fn weakness_topics_substituted_into_week_two() {
        let weaknesses = [weakness("Recursion", 20), weakness("Pointers", 40)];
        let roadmap = build_roadmap("C", "beginner", &weaknesses, 5);

        let second = &roadmap.weeks[1];
        assert_eq!(second.focus_areas, ["Recursion", "Pointers"]);
        assert!(second.tagline.contains("Recursion"));
        assert!(second.objectives[0].contains("Recursion"));
    }

    #[test]
    fn generic_phrasing_without_weaknesses() {
        let roadmap = build_roadmap("SQL", "beginner", &[], 5);
        let second = &roadmap.weeks[1];
        assert_eq!(second.focus_areas, ["SQL Core Concepts"]);
        assert_eq!(second.tagline, "Strengthen core concepts");
    }

    #[test]
    fn milestone_gating() {
        let advanced = build_roadmap("Go", "advanced", &[], 5);
        let weeks: Vec<u32> = advanced.milestones.iter().map(|m| m.week).collect();
        assert_eq!(weeks, [1, 2, 3]);

        let intermediate = build_roadmap("Go", "intermediate", &[], 5);
        let weeks: Vec<u32> = intermediate.milestones.iter().map(|m| m.week).collect();
        assert_eq!(weeks, [1, 2, 3, 6]);
    }

    #[test]
    fn project_idea_gating() {
        let advanced = build_roadmap("Go", "advanced", &[], 5);
        assert_eq!(advanced.project_ideas.len(), 3);

        let beginner = build_roadmap("Go", "beginner", &[], 5);
        assert_eq!(beginner.project_ideas.len(), 4);
        assert_eq!(beginner.project_ideas[3].week, 5);
    }

    #[test]
    fn tips_capped_at_eight_and_name_weakness() {
        let weaknesses = [weakness("Lifetimes", 10)];
        let roadmap = build_roadmap("Rust", "beginner", &weaknesses, 5);
        assert_eq!(roadmap.success_tips.len(), 8);
        assert!(roadmap.success_tips.iter().any(|t| t.contains("Lifetimes")));
    }

    #[test]
    fn overview_interpolates_week_count() {
        let roadmap = build_roadmap("Rust", "intermediate", &[], 5);
        assert!(roadmap.overview.contains("6 weeks"));

        let fallback = build_roadmap("Rust", "unknown_level", &[], 5);
        assert_eq!(fallback.overview, "Let's start this amazing journey!");
        assert_eq!(fallback.total_weeks, 8);
    }

    #[test]
    fn estimated_hours_match_declared_weekly_hours() {
        let roadmap = build_roadmap("Rust", "beginner", &[], 7);
        assert!(roadmap.weeks.iter().all(|w| w.estimated_hours == 7));
        assert_eq!(roadmap.weekly_hours, 7);
    }

    fn external_week(n: u32) -> serde_json::Value {
        json!({
            "week": n,
            "title": format!("Week {n}"),
            "focus_areas": ["Area"],
            "objectives": ["Learn something"],
            "resources": [],
            "exercises": ["Practice"],
            "daily_tasks": ["Monday: study"],
            "milestone": "Done",
            "estimated_hours": 5
        })
    }

    #[test]
    fn external_roadmap_accepted_with_enough_weeks() {
        let weeks: Vec<_> = (1..=12).map(external_week).collect();
        let payload = json!({ "weeks": weeks, "success_tips": ["Keep going"] });

        let roadmap = Roadmap::from_external(&payload, "Rust", "beginner", 5).unwrap();
        assert_eq!(roadmap.total_weeks, 12);
        assert_eq!(roadmap.weeks.len(), 12);
        assert_eq!(roadmap.success_tips, ["Keep going"]);
        assert!(roadmap.milestones.is_empty());
        assert!(roadmap.title.contains("Rust"));
    }

    #[test]
    fn external_roadmap_rejected_when_short_or_malformed() {
        let weeks: Vec<_> = (1..=4).map(external_week).collect();
        let short = json!({ "weeks": weeks });
        assert!(Roadmap::from_external(&short, "Rust", "beginner", 5).is_none());

        assert!(Roadmap::from_external(&json!({}), "Rust", "beginner", 5).is_none());
        assert!(Roadmap::from_external(&json!({ "weeks": "ten" }), "Rust", "beginner", 5).is_none());

        let broken = json!({ "weeks": (1..=12).map(|_| json!({"week": 1})).collect::<Vec<_>>() });
        assert!(Roadmap::from_external(&broken, "Rust", "beginner", 5).is_none());
    }

    #[test]
    fn structured_roadmap_title() {
        let roadmap = build_roadmap("Machine Learning", "beginner", &[], 5);
        assert_eq!(
            roadmap.title,
            "Your 10-Week Journey to Machine Learning Proficiency"
        );
    }
}
