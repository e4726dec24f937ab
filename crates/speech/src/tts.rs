//! Neural text-to-speech
//!
//! Maps each supported language to a neural voice, requests synthesis
//! from a hosted speech endpoint, and writes the MP3 under a served
//! audio directory with a unique filename.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use uuid::Uuid;

use farmwise_core::TextToSpeech;

use crate::SpeechError;

const DEFAULT_VOICE: &str = "en-US-AriaNeural";

/// Pick the neural voice for a language, accepting canonical full
/// names and short codes; anything else gets the default voice
pub fn voice_for(language: &str) -> &'static str {
    match language.to_lowercase().as_str() {
        "english" | "en" => "en-US-AriaNeural",
        "yoruba" | "yo" => "yo-NG-AbeoNeural",
        "hausa" | "ha" => "ha-NG-LamiNeural",
        "swahili" | "sw" => "sw-KE-ZuriNeural",
        "twi" | "ak" => "ak-GH-AmaNeural",
        _ => DEFAULT_VOICE,
    }
}

/// Text-to-speech configuration
#[derive(Debug, Clone)]
pub struct TtsConfig {
    /// Synthesis model
    pub model: String,
    /// API endpoint base (OpenAI-compatible)
    pub endpoint: String,
    /// API key
    pub api_key: Option<String>,
    /// Directory where MP3 files are written (served statically)
    pub audio_dir: PathBuf,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            model: "edge-tts".to_string(),
            endpoint: "http://localhost:5050/v1".to_string(),
            api_key: None,
            audio_dir: PathBuf::from("audio_responses"),
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Serialize)]
struct SpeechRequest {
    model: String,
    input: String,
    voice: String,
    response_format: String,
}

/// Hosted neural TTS backend
#[derive(Clone)]
pub struct NeuralTts {
    client: Client,
    config: TtsConfig,
}

impl NeuralTts {
    /// Create a new synthesis backend, ensuring the audio directory
    /// exists
    pub fn new(config: TtsConfig) -> Result<Self, SpeechError> {
        std::fs::create_dir_all(&config.audio_dir)?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Directory the synthesized files land in
    pub fn audio_dir(&self) -> &Path {
        &self.config.audio_dir
    }

    fn api_url(&self) -> String {
        format!("{}/audio/speech", self.config.endpoint.trim_end_matches('/'))
    }

    async fn request_synthesis(&self, text: &str, language: &str) -> Result<PathBuf, SpeechError> {
        let voice = voice_for(language);
        tracing::debug!(language, voice, "synthesizing speech");

        let request = SpeechRequest {
            model: self.config.model.clone(),
            input: text.to_string(),
            voice: voice.to_string(),
            response_format: "mp3".to_string(),
        };

        let mut builder = self.client.post(self.api_url()).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api(format!("{status}: {body}")));
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "empty audio payload".to_string(),
            ));
        }

        let filename = format!("{}.mp3", Uuid::new_v4().simple());
        let path = self.config.audio_dir.join(filename);
        tokio::fs::write(&path, &audio).await?;

        Ok(path)
    }
}

#[async_trait]
impl TextToSpeech for NeuralTts {
    async fn synthesize(&self, text: &str, language: &str) -> farmwise_core::Result<PathBuf> {
        self.request_synthesis(text, language)
            .await
            .map_err(|e| farmwise_core::Error::Tts(e.to_string()))
    }
}
