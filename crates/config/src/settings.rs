//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// LLM configuration
    #[serde(default)]
    pub llm: LlmSettings,

    /// Speech configuration
    #[serde(default)]
    pub speech: SpeechSettings,

    /// Conversation memory and logging paths
    #[serde(default)]
    pub memory: MemorySettings,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS restrictions (permissive when false, for dev)
    #[serde(default)]
    pub cors_enabled: bool,

    /// Allowed CORS origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            cors_enabled: false,
            cors_origins: Vec::new(),
        }
    }
}

/// LLM configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// OpenAI-compatible endpoint base
    #[serde(default = "default_groq_endpoint")]
    pub endpoint: String,

    /// Generation temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens per answer
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum retry attempts for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

fn default_llm_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_groq_endpoint() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_temperature() -> f32 {
    0.6
}

fn default_max_tokens() -> usize {
    500
}

fn default_llm_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: default_llm_model(),
            endpoint: default_groq_endpoint(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_llm_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

/// Speech configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// Enable speech endpoints and synthesis
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Transcription model
    #[serde(default = "default_stt_model")]
    pub stt_model: String,

    /// Transcription endpoint base
    #[serde(default = "default_groq_endpoint")]
    pub stt_endpoint: String,

    /// Synthesis model
    #[serde(default = "default_tts_model")]
    pub tts_model: String,

    /// Synthesis endpoint base
    #[serde(default = "default_tts_endpoint")]
    pub tts_endpoint: String,

    /// Directory where synthesized audio is written and served from
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,
}

fn default_true() -> bool {
    true
}

fn default_stt_model() -> String {
    "whisper-large-v3".to_string()
}

fn default_tts_model() -> String {
    "edge-tts".to_string()
}

fn default_tts_endpoint() -> String {
    "http://localhost:5050/v1".to_string()
}

fn default_audio_dir() -> String {
    "audio_responses".to_string()
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            stt_model: default_stt_model(),
            stt_endpoint: default_groq_endpoint(),
            tts_model: default_tts_model(),
            tts_endpoint: default_tts_endpoint(),
            audio_dir: default_audio_dir(),
        }
    }
}

/// Conversation memory and logging paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySettings {
    /// JSON conversation memory file
    #[serde(default = "default_memory_path")]
    pub path: String,

    /// Interaction log file
    #[serde(default = "default_log_path")]
    pub log_path: String,
}

fn default_memory_path() -> String {
    "conversation_memory.json".to_string()
}

fn default_log_path() -> String {
    "logs/interactions.log".to_string()
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self {
            path: default_memory_path(),
            log_path: default_log_path(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON-formatted logs
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.max_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "llm.max_tokens".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "llm.temperature".to_string(),
                message: "must be between 0.0 and 2.0".to_string(),
            });
        }
        if self.speech.audio_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "speech.audio_dir".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Load settings from files and environment
///
/// Priority: env vars > `config/{env}.yaml` > `config/default.yaml`
/// > built-in defaults. All files are optional.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder().add_source(File::with_name("config/default").required(false));

    if let Some(env) = env {
        builder = builder.add_source(File::with_name(&format!("config/{env}")).required(false));
    }

    let config = builder
        .add_source(Environment::with_prefix("FARMWISE").separator("__"))
        .build()?;

    let settings: Settings = config.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}
