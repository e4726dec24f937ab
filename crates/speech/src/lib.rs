//! Speech-to-text and text-to-speech wrappers
//!
//! Thin shims over hosted speech services:
//! - Whisper transcription via multipart upload, with the retry
//!   discipline (one no-hint retry) owned by callers
//! - Neural synthesis writing uniquely named MP3 files into a
//!   directory the server exposes statically
//!
//! Synthesis failures never fail the overall request; the server maps
//! them to an absent audio URL.

pub mod stt;
pub mod tts;

pub use stt::{SttConfig, WhisperStt, TRANSCRIPTION_ERROR};
pub use tts::{voice_for, NeuralTts, TtsConfig};

use thiserror::Error;

/// Speech errors
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        SpeechError::Network(err.to_string())
    }
}
