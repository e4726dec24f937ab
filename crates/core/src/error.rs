//! Shared error type

use thiserror::Error;

/// Result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by backend collaborators
///
/// The tip-selection path deliberately has no error channel: it is
/// total and always yields a usable string. Errors here come from the
/// I/O-bound collaborators (LLM, speech, storage) and are recovered by
/// the request layer with fixed fallbacks.
#[derive(Error, Debug)]
pub enum Error {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Speech-to-text error: {0}")]
    Stt(String),

    #[error("Text-to-speech error: {0}")]
    Tts(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
