//! Gemini API content source.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use skillpath_core::error::SourceError;
use skillpath_core::traits::{
    extract_json_from_markdown, ContentSource, QuizRequest, RoadmapRequest,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Content source backed by the Gemini `generateContent` API.
pub struct GeminiSource {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiSource {
    pub fn new(api_key: &str, base_url: Option<String>, model: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.to_string(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            client,
        }
    }

    async fn generate_content(&self, prompt: String) -> anyhow::Result<Value> {
        let body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.0,
                max_output_tokens: 8192,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SourceError::Timeout(DEFAULT_TIMEOUT_SECS)
                } else {
                    SourceError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(5)
                * 1000;
            return Err(SourceError::RateLimited {
                retry_after_ms: retry_after,
            }
            .into());
        }
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::AuthenticationFailed(body).into());
        }
        if status == 404 {
            return Err(SourceError::ModelNotFound(self.model.clone()).into());
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::ApiError {
                status,
                message: body,
            }
            .into());
        }

        let api_response: GeminiResponse =
            response.json().await.map_err(|e| SourceError::ApiError {
                status: 0,
                message: format!("failed to parse response: {e}"),
            })?;

        let text = api_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .unwrap_or_default();

        extract_json_from_markdown(&text)
            .ok_or_else(|| SourceError::BadPayload("no JSON in model response".into()).into())
    }
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

fn quiz_prompt(request: &QuizRequest) -> String {
    format!(
        r#"Generate a {count}-question multiple-choice assessment quiz on "{topic}".
Respond with ONLY a JSON object, no prose, matching exactly:

{{
  "metadata": {{"total_questions": {count}, "estimated_time": 15}},
  "questions": [
    {{
      "id": "q1",
      "number": 1,
      "difficulty": "beginner",
      "topic": "<subtopic>",
      "prompt": "<question text>",
      "code": "<optional code snippet or omit>",
      "options": {{"A": "...", "B": "...", "C": "...", "D": "..."}},
      "correct_option": "A",
      "explanation": "<why the correct answer is correct>"
    }}
  ]
}}

Rules: exactly {count} questions, ids q1..q{count}, difficulty one of
beginner/intermediate/advanced with a mix of all three, exactly four
options keyed A-D, correct_option one of A/B/C/D."#,
        count = request.question_count,
        topic = request.topic,
    )
}

fn roadmap_prompt(request: &RoadmapRequest) -> String {
    let strengths: Vec<&str> = request.strengths.iter().map(|s| s.topic.as_str()).collect();
    let weaknesses: Vec<&str> = request.weaknesses.iter().map(|w| w.topic.as_str()).collect();

    format!(
        r#"Create a 12-week personalized study roadmap for a {level} learner of "{topic}"
who can spend {hours} hours per week. Strengths: {strengths}. Weak areas needing
the most attention: {weaknesses}.

Respond with ONLY a JSON object, no prose:

{{
  "weeks": [
    {{
      "week": 1,
      "title": "...",
      "tagline": "...",
      "focus_areas": ["..."],
      "objectives": ["..."],
      "resources": [{{"type": "tutorial", "title": "...", "description": "...", "time_estimate": "2 hours"}}],
      "exercises": ["..."],
      "daily_tasks": ["..."],
      "milestone": "...",
      "estimated_hours": {hours}
    }}
  ],
  "milestones": [{{"week": 1, "title": "...", "description": "..."}}],
  "success_tips": ["..."],
  "project_ideas": [{{"week": 1, "title": "...", "description": "...", "complexity": "beginner", "duration": "2-3 days"}}]
}}

Rules: exactly 12 entries in "weeks" numbered 1-12, early weeks concentrate
on the weak areas listed above."#,
        level = request.skill_level,
        topic = request.topic,
        hours = request.weekly_hours,
        strengths = if strengths.is_empty() { "none identified".to_string() } else { strengths.join(", ") },
        weaknesses = if weaknesses.is_empty() { "none identified".to_string() } else { weaknesses.join(", ") },
    )
}

#[async_trait]
impl ContentSource for GeminiSource {
    fn name(&self) -> &str {
        "gemini"
    }

    #[instrument(skip(self, request), fields(topic = %request.topic))]
    async fn generate_quiz(&self, request: &QuizRequest) -> anyhow::Result<Value> {
        self.generate_content(quiz_prompt(request)).await
    }

    #[instrument(skip(self, request), fields(topic = %request.topic))]
    async fn generate_roadmap(&self, request: &RoadmapRequest) -> anyhow::Result<Value> {
        self.generate_content(roadmap_prompt(request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gemini_reply(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}], "role": "model"}}]
        })
    }

    fn quiz_request() -> QuizRequest {
        QuizRequest {
            topic: "Python".into(),
            question_count: 10,
        }
    }

    #[tokio::test]
    async fn successful_quiz_generation() {
        let server = MockServer::start().await;

        let quiz_json = "```json\n{\"metadata\": {\"total_questions\": 10}, \"questions\": []}\n```";
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(quiz_json)))
            .mount(&server)
            .await;

        let source = GeminiSource::new("test-key", Some(server.uri()), None);
        let payload = source.generate_quiz(&quiz_request()).await.unwrap();
        assert_eq!(payload["metadata"]["total_questions"], 10);
    }

    #[tokio::test]
    async fn custom_model_in_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("{\"ok\": true}")))
            .mount(&server)
            .await;

        let source = GeminiSource::new(
            "key",
            Some(server.uri()),
            Some("gemini-1.5-pro".to_string()),
        );
        let payload = source.generate_quiz(&quiz_request()).await.unwrap();
        assert_eq!(payload["ok"], true);
    }

    #[tokio::test]
    async fn rate_limit_maps_to_source_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
            .mount(&server)
            .await;

        let source = GeminiSource::new("key", Some(server.uri()), None);
        let err = source.generate_quiz(&quiz_request()).await.unwrap_err();
        let source_err = err.downcast_ref::<SourceError>().unwrap();
        assert_eq!(source_err.retry_after_ms(), Some(7000));
    }

    #[tokio::test]
    async fn auth_failure_is_permanent() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let source = GeminiSource::new("bad-key", Some(server.uri()), None);
        let err = source.generate_quiz(&quiz_request()).await.unwrap_err();
        let source_err = err.downcast_ref::<SourceError>().unwrap();
        assert!(source_err.is_permanent());
    }

    #[tokio::test]
    async fn prose_only_reply_is_bad_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(gemini_reply("I cannot generate a quiz right now.")),
            )
            .mount(&server)
            .await;

        let source = GeminiSource::new("key", Some(server.uri()), None);
        let err = source.generate_quiz(&quiz_request()).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SourceError>(),
            Some(SourceError::BadPayload(_))
        ));
    }

    #[tokio::test]
    async fn server_error_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let source = GeminiSource::new("key", Some(server.uri()), None);
        let err = source.generate_quiz(&quiz_request()).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SourceError>(),
            Some(SourceError::ApiError { status: 500, .. })
        ));
    }
}
