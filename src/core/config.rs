//! Runtime configuration from the environment (and `.env` via dotenv).

use std::env;

use async_openai::config::OpenAIConfig;

use crate::core::api_key;

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_config: OpenAIConfig,
    pub model_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "OPENROUTER_API_KEY is not set (export it, add it to .env, or run `quizgen config set-api-key`)"
    )]
    MissingApiKey,
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

/// Model ID from OPENROUTER_MODEL, or the default.
pub fn model_id() -> String {
    non_empty_var("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Load configuration. The API key comes from OPENROUTER_API_KEY, falling back to
/// the key stored in the config directory.
pub fn load() -> Result<Config, ConfigError> {
    let base_url = non_empty_var("OPENROUTER_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let api_key = non_empty_var("OPENROUTER_API_KEY")
        .or_else(api_key::load_api_key)
        .ok_or(ConfigError::MissingApiKey)?;

    let openai_config = OpenAIConfig::new()
        .with_api_base(base_url)
        .with_api_key(api_key);

    Ok(Config {
        openai_config,
        model_id: model_id(),
    })
}
