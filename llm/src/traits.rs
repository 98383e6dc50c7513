use async_trait::async_trait;
use thiserror::Error;

/// Failure modes of a remote completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("authentication rejected: {0}")]
    Auth(String),
    #[error("rate limit or quota exceeded: {0}")]
    RateLimited(String),
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// A client that can run one chat completion against a language model.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `prompt` to `model` and return the first completion's text.
    ///
    /// Exactly one outbound request per invocation; no retries.
    async fn complete(&self, model: &str, prompt: &str) -> Result<String, LlmError>;
}
