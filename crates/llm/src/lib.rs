//! Hosted LLM integration
//!
//! Features:
//! - Groq chat completions (OpenAI-compatible wire format)
//! - Conversation context replay
//! - Per-language reply directive in the system prompt
//! - Exponential-backoff retry for transient network failures
//! - Fixed fallback string contract for callers

pub mod backend;
pub mod prompt;

pub use backend::{GroqBackend, LlmConfig};
pub use prompt::{build_messages, system_prompt, ChatMessage, FALLBACK_RESPONSE};

use thiserror::Error;

/// LLM errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<LlmError> for farmwise_core::Error {
    fn from(err: LlmError) -> Self {
        farmwise_core::Error::Llm(err.to_string())
    }
}
