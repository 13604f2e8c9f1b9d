//! Mock content source for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use skillpath_core::traits::{ContentSource, QuizRequest, RoadmapRequest};

/// A mock content source for exercising the services without real API calls.
///
/// Returns configured payloads, or errors when none is set.
pub struct MockSource {
    quiz_payload: Option<Value>,
    roadmap_payload: Option<Value>,
    quiz_calls: AtomicU32,
    roadmap_calls: AtomicU32,
    last_quiz_request: Mutex<Option<QuizRequest>>,
    last_roadmap_request: Mutex<Option<RoadmapRequest>>,
}

impl MockSource {
    pub fn new(quiz_payload: Option<Value>, roadmap_payload: Option<Value>) -> Self {
        Self {
            quiz_payload,
            roadmap_payload,
            quiz_calls: AtomicU32::new(0),
            roadmap_calls: AtomicU32::new(0),
            last_quiz_request: Mutex::new(None),
            last_roadmap_request: Mutex::new(None),
        }
    }

    /// A mock whose every call fails, for fallback-path tests.
    pub fn failing() -> Self {
        Self::new(None, None)
    }

    pub fn quiz_calls(&self) -> u32 {
        self.quiz_calls.load(Ordering::Relaxed)
    }

    pub fn roadmap_calls(&self) -> u32 {
        self.roadmap_calls.load(Ordering::Relaxed)
    }

    pub fn last_quiz_request(&self) -> Option<QuizRequest> {
        self.last_quiz_request.lock().unwrap().clone()
    }

    pub fn last_roadmap_request(&self) -> Option<RoadmapRequest> {
        self.last_roadmap_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate_quiz(&self, request: &QuizRequest) -> anyhow::Result<Value> {
        self.quiz_calls.fetch_add(1, Ordering::Relaxed);
        *self.last_quiz_request.lock().unwrap() = Some(request.clone());
        self.quiz_payload
            .clone()
            .ok_or_else(|| anyhow::anyhow!("mock quiz generation failure"))
    }

    async fn generate_roadmap(&self, request: &RoadmapRequest) -> anyhow::Result<Value> {
        self.roadmap_calls.fetch_add(1, Ordering::Relaxed);
        *self.last_roadmap_request.lock().unwrap() = Some(request.clone());
        self.roadmap_payload
            .clone()
            .ok_or_else(|| anyhow::anyhow!("mock roadmap generation failure"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn configured_payload_returned() {
        let source = MockSource::new(Some(serde_json::json!({"questions": []})), None);
        let request = QuizRequest {
            topic: "Rust".into(),
            question_count: 10,
        };

        let payload = source.generate_quiz(&request).await.unwrap();
        assert!(payload["questions"].is_array());
        assert_eq!(source.quiz_calls(), 1);
        assert_eq!(source.last_quiz_request().unwrap().topic, "Rust");
    }

    #[tokio::test]
    async fn failing_mock_errors() {
        let source = MockSource::failing();
        let request = QuizRequest {
            topic: "Rust".into(),
            question_count: 10,
        };
        assert!(source.generate_quiz(&request).await.is_err());
    }
}
