//! Generation entry points for battle and practice modes.
//!
//! `try_generate_*` report model failures as errors; `generate_*` log them and
//! return an empty list, which callers treat as "offer a retry".

use crate::core::llm::{GenerateError, GenerationRequest, ModelClient};

use super::extract::extract;
use super::normalize::normalize_all;
use super::prompts::{self, PracticeParams};
use super::question::{Batch, Question};

const BATTLE_PREFIX: &str = "battle";
const PRACTICE_PREFIX: &str = "practice";

async fn run_request<M: ModelClient>(
    model: &M,
    request: &GenerationRequest,
    batch: &Batch,
    count: usize,
) -> Result<Vec<Question>, GenerateError> {
    let text = model.complete(request).await?;
    let candidates = extract(&text);
    Ok(normalize_all(&candidates, batch, count))
}

pub async fn try_generate_battle<M: ModelClient>(
    model: &M,
    count: usize,
) -> Result<Vec<Question>, GenerateError> {
    let request = prompts::battle_request(count);
    run_request(model, &request, &Batch::new(BATTLE_PREFIX), count).await
}

pub async fn try_generate_practice<M: ModelClient>(
    model: &M,
    params: &PracticeParams,
) -> Result<Vec<Question>, GenerateError> {
    let request = prompts::practice_request(params);
    run_request(model, &request, &Batch::new(PRACTICE_PREFIX), params.count).await
}

/// Battle questions, or an empty list if the model call failed.
pub async fn generate_battle<M: ModelClient>(model: &M, count: usize) -> Vec<Question> {
    try_generate_battle(model, count)
        .await
        .unwrap_or_else(|e| {
            log::error!("Battle question generation failed: {}", e);
            Vec::new()
        })
}

/// Practice questions, or an empty list if the model call failed.
pub async fn generate_practice<M: ModelClient>(
    model: &M,
    params: &PracticeParams,
) -> Vec<Question> {
    try_generate_practice(model, params)
        .await
        .unwrap_or_else(|e| {
            log::error!(
                "Practice question generation failed for {}: {}",
                params.subject,
                e
            );
            Vec::new()
        })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Replies with a fixed text (or fails) and records the prompts it saw.
    struct ScriptedModel {
        reply: Option<&'static str>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn replying(text: &'static str) -> Self {
            Self {
                reply: Some(text),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    impl ModelClient for ScriptedModel {
        async fn complete(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
            self.prompts.lock().unwrap().push(request.prompt.clone());
            match self.reply {
                Some(text) => Ok(text.to_string()),
                None => Err(GenerateError::ApiMessage("Rate limit exceeded".to_string())),
            }
        }
    }

    const TWO_QUESTIONS: &str = r#"Sure! Here are your questions:
```json
[
  {"question": "Unit of force?", "options": ["Newton", "Joule", "Watt", "Pascal"], "correctIndex": 0, "explanation": "1 N = 1 kg m/s^2"},
  {"Question": "Speed of light?", "Answers": ["$3 \\times 10^{8}$ m/s", "340 m/s"], "correctIndex": "0"},
  {"question": "Broken", "options": ["only one"]}
]
```"#;

    #[tokio::test]
    async fn battle_returns_normalized_questions() {
        let model = ScriptedModel::replying(TWO_QUESTIONS);
        let questions = generate_battle(&model, 10).await;
        assert_eq!(questions.len(), 2);
        assert!(questions[0].id.starts_with("battle-"));
        assert!(questions[0].id.ends_with("-0"));
        assert_eq!(questions[0].explanation, "1 N = 1 kg m/s²");
        assert_eq!(questions[1].options[0], "3 × 10⁸ m/s");
        assert_ne!(questions[0].id, questions[1].id);
        assert!(model.last_prompt().starts_with("Generate 10 "));
    }

    #[tokio::test]
    async fn battle_truncates_to_requested_count() {
        let model = ScriptedModel::replying(TWO_QUESTIONS);
        let questions = generate_battle(&model, 1).await;
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "Unit of force?");
    }

    #[tokio::test]
    async fn unparseable_reply_yields_empty_sequence() {
        let model = ScriptedModel::replying("I cannot help with that.");
        assert!(generate_battle(&model, 5).await.is_empty());
        let result = try_generate_battle(&model, 5).await;
        assert!(matches!(result, Ok(ref qs) if qs.is_empty()));
    }

    #[tokio::test]
    async fn model_failure_yields_empty_sequence() {
        let model = ScriptedModel::failing();
        let params = PracticeParams {
            subject: "Physics".to_string(),
            topics: vec!["Optics".to_string()],
            count: 5,
            preference: None,
        };
        assert!(generate_practice(&model, &params).await.is_empty());

        let err = try_generate_practice(&model, &params).await.unwrap_err();
        assert!(matches!(err, GenerateError::ApiMessage(_)));
    }

    #[tokio::test]
    async fn practice_uses_subject_prompt_and_prefix() {
        let model = ScriptedModel::replying(TWO_QUESTIONS);
        let params = PracticeParams {
            subject: "Mathematics".to_string(),
            topics: vec!["Calculus".to_string()],
            count: 5,
            preference: Some("hard ones".to_string()),
        };
        let questions = generate_practice(&model, &params).await;
        assert_eq!(questions.len(), 2);
        assert!(questions.iter().all(|q| q.id.starts_with("practice-")));

        let prompt = model.last_prompt();
        assert!(prompt.contains("Mathematics"));
        assert!(prompt.contains("Calculus"));
        assert!(prompt.contains("hard ones"));
        assert!(prompt.contains("dollar signs"));
    }
}
