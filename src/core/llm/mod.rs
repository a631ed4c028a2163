//! Model invocation boundary: one chat-completions call per generation request.

mod error;

use std::future::Future;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use serde_json::{Value, json};

use crate::core::config::Config;

pub use error::{GenerateError, map_api_error};

/// What the model is asked to do: a system instruction, the user prompt, and the
/// JSON schema the reply should follow.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub instruction: String,
    pub prompt: String,
    pub schema: Value,
}

/// A model that turns a request into free text. The text is untrusted.
pub trait ModelClient {
    fn complete(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, GenerateError>>;
}

/// OpenAI-compatible chat-completions client (OpenRouter by default).
pub struct OpenRouterModel {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenRouterModel {
    /// Build the client once; it is reused for every call in the process.
    pub fn new(config: &Config, model: &str) -> Self {
        Self {
            client: Client::with_config(config.openai_config.clone()),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl ModelClient for OpenRouterModel {
    async fn complete(&self, request: &GenerationRequest) -> Result<String, GenerateError> {
        log::debug!(
            "Requesting questions from {} ({} prompt bytes)",
            self.model,
            request.prompt.len()
        );
        let response: Value = self
            .client
            .chat()
            .create_byot(request_body(&self.model, request))
            .await
            .map_err(map_api_error)?;

        if let Some(err) = response.get("error") {
            let msg = err
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown error");
            return Err(GenerateError::ApiMessage(msg.to_string()));
        }

        let text = response_text(&response).ok_or(GenerateError::EmptyResponse)?;
        log::debug!("Model replied with {} bytes", text.len());
        Ok(text)
    }
}

/// Chat-completions body with the schema passed as structured-output format.
fn request_body(model: &str, request: &GenerationRequest) -> Value {
    json!({
        "model": model,
        "messages": [
            {"role": "system", "content": request.instruction},
            {"role": "user", "content": request.prompt},
        ],
        "response_format": {
            "type": "json_schema",
            "json_schema": {
                "name": "questions",
                "schema": request.schema,
            },
        },
    })
}

/// First choice's message content, as a string or the first text block.
fn response_text(response: &Value) -> Option<String> {
    let content = response
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?;
    if let Some(s) = content.as_str() {
        return Some(s.to_string()).filter(|s| !s.trim().is_empty());
    }
    content
        .as_array()?
        .iter()
        .find_map(|block| block.get("text").and_then(|t| t.as_str()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> GenerationRequest {
        GenerationRequest {
            instruction: "Be a quiz master.".to_string(),
            prompt: "Give me 2 questions.".to_string(),
            schema: json!({"type": "array"}),
        }
    }

    #[test]
    fn request_body_carries_messages_and_schema() {
        let body = request_body("some/model", &sample_request());
        assert_eq!(body["model"], "some/model");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "Be a quiz master.");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["response_format"]["type"], "json_schema");
        assert_eq!(
            body["response_format"]["json_schema"]["schema"]["type"],
            "array"
        );
    }

    #[test]
    fn response_text_from_string_content() {
        let response = json!({"choices": [{"message": {"content": "[1, 2]"}}]});
        assert_eq!(response_text(&response).as_deref(), Some("[1, 2]"));
    }

    #[test]
    fn response_text_from_blocks() {
        let response = json!({
            "choices": [{"message": {"content": [{"type": "text", "text": "[]"}]}}]
        });
        assert_eq!(response_text(&response).as_deref(), Some("[]"));
    }

    #[test]
    fn response_text_missing_or_blank() {
        assert_eq!(response_text(&json!({"choices": []})), None);
        assert_eq!(
            response_text(&json!({"choices": [{"message": {"content": "  "}}]})),
            None
        );
        assert_eq!(
            response_text(&json!({"choices": [{"message": {"content": null}}]})),
            None
        );
    }
}
