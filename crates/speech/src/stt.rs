//! Whisper speech-to-text

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use farmwise_core::SpeechToText;

use crate::SpeechError;

/// Sentinel substituted by callers when transcription fails outright
pub const TRANSCRIPTION_ERROR: &str = "Error transcribing speech";

/// Speech-to-text configuration
#[derive(Debug, Clone)]
pub struct SttConfig {
    /// Model name
    pub model: String,
    /// API endpoint base (OpenAI-compatible)
    pub endpoint: String,
    /// API key
    pub api_key: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            model: "whisper-large-v3".to_string(),
            endpoint: "https://api.groq.com/openai/v1".to_string(),
            api_key: None,
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

/// Whisper transcription backend
#[derive(Clone)]
pub struct WhisperStt {
    client: Client,
    config: SttConfig,
}

impl WhisperStt {
    /// Create a new transcription backend
    pub fn new(config: SttConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/audio/transcriptions",
            self.config.endpoint.trim_end_matches('/')
        )
    }

    async fn request_transcription(
        &self,
        audio: Vec<u8>,
        language: Option<&str>,
    ) -> Result<String, SpeechError> {
        let mut form = Form::new()
            .part("file", Part::bytes(audio).file_name("audio.wav"))
            .text("model", self.config.model.clone());
        if let Some(lang) = language {
            form = form.text("language", lang.to_string());
        }

        let mut builder = self.client.post(self.api_url()).multipart(form);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api(format!("{status}: {body}")));
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(e.to_string()))?;

        Ok(parsed.text)
    }
}

#[async_trait]
impl SpeechToText for WhisperStt {
    async fn transcribe(
        &self,
        audio: &[u8],
        language: Option<&str>,
    ) -> farmwise_core::Result<String> {
        self.request_transcription(audio.to_vec(), language)
            .await
            .map_err(|e| farmwise_core::Error::Stt(e.to_string()))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
