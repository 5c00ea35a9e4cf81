use crate::config::chat::ChatConfig;
use crate::domain::model::ChatMessage;
use crate::domain::ports::ChatApi;
use crate::utils::error::{PrimeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const CONNECTION_TEST_PROMPT: &str = "Say 'Hello! Connection successful.' in one sentence.";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Thin pass-through to an OpenAI-compatible `/chat/completions` endpoint.
pub struct ChatClient {
    config: ChatConfig,
    client: Client,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Sends the fixed connection-test prompt and returns the reply.
    pub async fn check_connection(&self) -> Result<String> {
        tracing::info!("Connecting to chat API at {}", self.config.base_url);
        match self.complete(CONNECTION_TEST_PROMPT).await {
            Ok(reply) => {
                tracing::info!("✅ Connection successful");
                Ok(reply)
            }
            Err(e) => {
                tracing::error!("❌ Connection failed: {}", e);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl ChatApi for ChatClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage::user(prompt)],
            max_tokens: self.config.max_tokens,
        };

        let url = self.completions_url();
        tracing::debug!("POST {} (model: {})", url, self.config.model);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Chat API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PrimeError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(PrimeError::EmptyResponse)
    }
}
