//! Configuration management for the FarmWise backend
//!
//! Supports loading configuration from:
//! - YAML files (`config/default.yaml`, then `config/{env}.yaml`)
//! - Environment variables (`FARMWISE_` prefix, `__` separator)
//!
//! Secrets stay out of files: the Groq API key is read from the
//! process environment at startup.

pub mod settings;

pub use settings::{
    load_settings, LlmSettings, MemorySettings, ObservabilityConfig, ServerConfig, Settings,
    SpeechSettings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
