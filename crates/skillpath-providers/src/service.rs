//! Generate-or-fallback services.
//!
//! Both services try their configured source once, validate what came back,
//! and on any failure serve deterministic built-in content instead. An
//! assessment therefore always completes; backend trouble only changes
//! where the content came from.

use tracing::{debug, warn};

use skillpath_core::model::Quiz;
use skillpath_core::profiler::LearnerProfile;
use skillpath_core::roadmap::{build_roadmap, Roadmap};
use skillpath_core::traits::{ContentSource, QuizRequest, RoadmapRequest};
use skillpath_core::validator::{parse_quiz, EXPECTED_QUESTION_COUNT};

use crate::fallback::builtin_quiz;

/// Serves validated quizzes, generated or built-in.
pub struct QuizService {
    source: Option<Box<dyn ContentSource>>,
}

impl QuizService {
    pub fn new(source: Box<dyn ContentSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// A service with no generative backend; always serves the built-in quiz.
    pub fn offline() -> Self {
        Self { source: None }
    }

    /// Fetch a quiz for the topic. Generated content is accepted only when
    /// it passes validation; everything else degrades to the built-in quiz.
    pub async fn fetch_quiz(&self, topic: &str) -> Quiz {
        let Some(source) = &self.source else {
            debug!("no content source configured, serving built-in quiz");
            return builtin_quiz();
        };

        let request = QuizRequest {
            topic: topic.to_string(),
            question_count: EXPECTED_QUESTION_COUNT as u32,
        };

        match source.generate_quiz(&request).await {
            Ok(payload) => match parse_quiz(&payload, EXPECTED_QUESTION_COUNT) {
                Some(quiz) => {
                    debug!(source = source.name(), topic, "quiz generated");
                    quiz
                }
                None => {
                    warn!(
                        source = source.name(),
                        topic, "generated quiz failed validation, using built-in quiz"
                    );
                    builtin_quiz()
                }
            },
            Err(error) => {
                warn!(
                    source = source.name(),
                    topic,
                    %error,
                    "quiz generation failed, using built-in quiz"
                );
                builtin_quiz()
            }
        }
    }
}

/// Serves roadmaps, generated or structurally built.
pub struct RoadmapService {
    source: Option<Box<dyn ContentSource>>,
}

impl RoadmapService {
    pub fn new(source: Box<dyn ContentSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// A service with no generative backend; always builds structurally.
    pub fn offline() -> Self {
        Self { source: None }
    }

    /// Build a roadmap from the learner profile. A generated roadmap is
    /// accepted only when it normalizes cleanly; otherwise the structured
    /// builder takes over.
    pub async fn build_roadmap(
        &self,
        topic: &str,
        profile: &LearnerProfile,
        weekly_hours: u32,
    ) -> Roadmap {
        let skill_level = profile.skill_level.as_str();

        if let Some(source) = &self.source {
            let request = RoadmapRequest {
                topic: topic.to_string(),
                skill_level: skill_level.to_string(),
                strengths: profile.strengths.clone(),
                weaknesses: profile.weaknesses.clone(),
                weekly_hours,
            };

            match source.generate_roadmap(&request).await {
                Ok(payload) => {
                    if let Some(roadmap) =
                        Roadmap::from_external(&payload, topic, skill_level, weekly_hours)
                    {
                        debug!(source = source.name(), topic, "roadmap generated");
                        return roadmap;
                    }
                    warn!(
                        source = source.name(),
                        topic, "generated roadmap was unusable, building structured roadmap"
                    );
                }
                Err(error) => {
                    warn!(
                        source = source.name(),
                        topic,
                        %error,
                        "roadmap generation failed, building structured roadmap"
                    );
                }
            }
        } else {
            debug!("no content source configured, building structured roadmap");
        }

        build_roadmap(topic, skill_level, &profile.weaknesses, weekly_hours)
    }
}
