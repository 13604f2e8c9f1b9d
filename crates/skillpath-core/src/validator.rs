//! Quiz structure validation.
//!
//! Quiz payloads arrive from a non-deterministic generative source, so this
//! module is the contract boundary: nothing that fails validation may reach
//! the evaluation engine. Validation is a pure predicate and fails closed —
//! a malformed payload produces warnings or `false`, never a panic.

use serde_json::Value;

use crate::model::Quiz;

/// Number of questions the current generation scheme produces.
pub const EXPECTED_QUESTION_COUNT: usize = 10;

/// Fields every question object must carry.
const REQUIRED_QUESTION_FIELDS: [&str; 7] = [
    "id",
    "difficulty",
    "topic",
    "prompt",
    "options",
    "correct_option",
    "explanation",
];

const OPTION_KEYS: [&str; 4] = ["A", "B", "C", "D"];

/// A finding from quiz structure validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if the finding is question-scoped).
    pub question_id: Option<String>,
    /// What is wrong.
    pub message: String,
}

/// Check a candidate quiz payload and report every structural problem.
pub fn quiz_warnings(payload: &Value, expected_questions: usize) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let Some(root) = payload.as_object() else {
        warnings.push(warning(None, "payload is not a JSON object"));
        return warnings;
    };

    if !root.contains_key("metadata") {
        warnings.push(warning(None, "missing top-level 'metadata' key"));
    }

    let Some(questions) = root.get("questions").and_then(Value::as_array) else {
        warnings.push(warning(None, "missing or non-array 'questions' key"));
        return warnings;
    };

    if questions.len() != expected_questions {
        warnings.push(warning(
            None,
            format!(
                "expected {expected_questions} questions, found {}",
                questions.len()
            ),
        ));
    }

    for (index, question) in questions.iter().enumerate() {
        let Some(fields) = question.as_object() else {
            warnings.push(warning(None, format!("question {index} is not an object")));
            continue;
        };

        let id = fields
            .get("id")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned);

        for field in REQUIRED_QUESTION_FIELDS {
            if !fields.contains_key(field) {
                warnings.push(warning(
                    id.clone(),
                    format!("question {index} missing required field '{field}'"),
                ));
            }
        }

        if let Some(options) = fields.get("options") {
            match options.as_object() {
                Some(map) => {
                    let exact = map.len() == OPTION_KEYS.len()
                        && OPTION_KEYS.iter().all(|k| map.contains_key(*k));
                    if !exact {
                        warnings.push(warning(
                            id.clone(),
                            format!("question {index} options must contain exactly keys A-D"),
                        ));
                    }
                }
                None => warnings.push(warning(
                    id.clone(),
                    format!("question {index} options is not an object"),
                )),
            }
        }

        if let Some(correct) = fields.get("correct_option") {
            let valid = correct
                .as_str()
                .is_some_and(|c| OPTION_KEYS.contains(&c));
            if !valid {
                warnings.push(warning(
                    id.clone(),
                    format!("question {index} correct_option must be one of A-D"),
                ));
            }
        }
    }

    warnings
}

/// Pure pass/fail contract check for an externally supplied quiz payload.
pub fn validate_quiz_payload(payload: &Value, expected_questions: usize) -> bool {
    quiz_warnings(payload, expected_questions).is_empty()
}

/// Validate and deserialize a quiz payload. `None` signals "discard and use
/// fallback"; no error detail escapes to the learner.
pub fn parse_quiz(payload: &Value, expected_questions: usize) -> Option<Quiz> {
    let warnings = quiz_warnings(payload, expected_questions);
    if !warnings.is_empty() {
        tracing::debug!(
            warning_count = warnings.len(),
            first = %warnings[0].message,
            "rejecting quiz payload"
        );
        return None;
    }
    serde_json::from_value(payload.clone()).ok()
}

fn warning(question_id: Option<String>, message: impl Into<String>) -> ValidationWarning {
    ValidationWarning {
        question_id,
        message: message.into(),
    }
}
