use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::{config::Config, services::prompt_builder::PromptPair};

pub const COMPLETION_TEMPERATURE: f32 = 0.5;

/// Why a completion produced no usable JSON. Callers collapse every variant
/// into "service unavailable"; the distinction only reaches the logs.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion backend not configured")]
    NotConfigured,

    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("upstream returned no message content")]
    EmptyResponse,

    #[error("upstream returned malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// False when no credential is available. Unconfigured clients never
    /// touch the network.
    fn is_configured(&self) -> bool;

    async fn complete(&self, prompt: &PromptPair) -> Result<Value, CompletionError>;
}

pub struct OpenAiCompletionClient {
    client: Option<Client<OpenAIConfig>>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let client = config.openai_api_key.as_ref().map(|key| {
            let mut openai_config = OpenAIConfig::new().with_api_key(key.expose_secret());
            if let Some(base_url) = &config.openai_base_url {
                openai_config = openai_config.with_api_base(base_url.trim_end_matches('/'));
            }
            Client::with_config(openai_config)
        });

        Self {
            client,
            model: config.openai_model.clone(),
        }
    }

    fn request_body(&self, prompt: &PromptPair) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt.system_prompt },
                { "role": "user", "content": prompt.user_prompt },
            ],
            "response_format": { "type": "json_object" },
            "temperature": COMPLETION_TEMPERATURE,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    async fn complete(&self, prompt: &PromptPair) -> Result<Value, CompletionError> {
        let client = self.client.as_ref().ok_or(CompletionError::NotConfigured)?;

        log::debug!("Requesting chat completion from model {}", self.model);

        let response: ChatCompletionResponse = client
            .chat()
            .create_byot(self.request_body(prompt))
            .await
            .map_err(|e| CompletionError::Upstream(e.to_string()))?;

        let text = first_message_content(response).ok_or(CompletionError::EmptyResponse)?;
        parse_completion_text(&text)
    }
}

fn first_message_content(response: ChatCompletionResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
}

pub fn parse_completion_text(text: &str) -> Result<Value, CompletionError> {
    Ok(serde_json::from_str(text)?)
}
