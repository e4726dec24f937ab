//! Groq chat-completions backend
//!
//! OpenAI-compatible wire format. Transient network failures are
//! retried with exponential backoff; 4xx responses fail immediately.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use farmwise_core::{LanguageModel, Turn};

use crate::prompt::{build_messages, ChatMessage};
use crate::LlmError;

/// LLM configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model name/ID
    pub model: String,
    /// API endpoint base (OpenAI-compatible)
    pub endpoint: String,
    /// API key
    pub api_key: Option<String>,
    /// Maximum tokens to generate
    pub max_tokens: usize,
    /// Temperature
    pub temperature: f32,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum retry attempts for transient failures
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry)
    pub initial_backoff: Duration,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "llama-3.1-8b-instant".to_string(),
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            api_key: None,
            max_tokens: 500,
            temperature: 0.6,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Groq backend
#[derive(Clone)]
pub struct GroqBackend {
    client: Client,
    config: LlmConfig,
}

impl GroqBackend {
    /// Create a new backend
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.endpoint.trim_end_matches('/'))
    }

    /// Execute a single request (used by the retry loop)
    async fn execute_request(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let mut builder = self.client.post(self.api_url("/chat/completions")).json(request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            // 5xx errors are retryable, 4xx are not
            if status.is_server_error() {
                return Err(LlmError::Network(format!("Server error {status}: {body}")));
            }
            return Err(LlmError::Api(format!("{status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))
    }

    fn is_retryable(error: &LlmError) -> bool {
        matches!(error, LlmError::Network(_) | LlmError::Timeout)
    }

    /// Generate a completion with retry for transient failures
    async fn generate(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let mut last_error = LlmError::Api("no attempts made".to_string());
        let mut backoff = self.config.initial_backoff;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::warn!(
                    "LLM request failed, retrying in {:?} (attempt {}/{})",
                    backoff,
                    attempt,
                    self.config.max_retries
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }

            match self.execute_request(&request).await {
                Ok(response) => return Self::extract_content(response),
                Err(e) if Self::is_retryable(&e) => last_error = e,
                Err(e) => return Err(e),
            }
        }

        Err(last_error)
    }

    /// Pull the answer text out of the response, rejecting empty or
    /// malformed payloads so callers fall back to the fixed string
    fn extract_content(response: ChatCompletionResponse) -> Result<String, LlmError> {
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(LlmError::InvalidResponse(
                "empty content in completion".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}

#[async_trait]
impl LanguageModel for GroqBackend {
    async fn respond(
        &self,
        message: &str,
        context: &[Turn],
        language: &str,
    ) -> farmwise_core::Result<String> {
        let messages = build_messages(message, context, language);
        Ok(self.generate(messages).await?)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LlmConfig::default();
        assert_eq!(config.model, "llama-3.1-8b-instant");
        assert_eq!(config.max_tokens, 500);
        assert!((config.temperature - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let backend = GroqBackend::new(LlmConfig {
            endpoint: "https://api.groq.com/openai/v1/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            backend.api_url("/chat/completions"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_extract_content_rejects_empty() {
        let response = ChatCompletionResponse { choices: vec![] };
        assert!(GroqBackend::extract_content(response).is_err());

        let response = ChatCompletionResponse {
            choices: vec![ChatChoice {
                message: ChatChoiceMessage {
                    content: Some("   ".to_string()),
                },
            }],
        };
        assert!(GroqBackend::extract_content(response).is_err());
    }

    #[test]
    fn test_extract_content_trims() {
        let response = ChatCompletionResponse {
            choices: vec![ChatChoice {
                message: ChatChoiceMessage {
                    content: Some("  hello farmer  ".to_string()),
                },
            }],
        };
        assert_eq!(
            GroqBackend::extract_content(response).unwrap(),
            "hello farmer"
        );
    }

    #[test]
    fn test_retryable_classification() {
        assert!(GroqBackend::is_retryable(&LlmError::Timeout));
        assert!(GroqBackend::is_retryable(&LlmError::Network("x".into())));
        assert!(!GroqBackend::is_retryable(&LlmError::Api("401".into())));
    }
}
