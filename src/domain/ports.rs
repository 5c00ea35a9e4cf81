use crate::utils::error::Result;
use async_trait::async_trait;

/// A chat-completion backend: a real HTTP client or a test double.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Sends a single user prompt and returns the assistant's reply.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
