//! Core traits and types for the FarmWise assistant
//!
//! This crate provides foundational types used across all other crates:
//! - Language definitions (English + 4 African languages) and the
//!   normalization contract shared by tips, speech, and the server
//! - Conversation turn types
//! - Traits for pluggable backends (LLM, STT, TTS, memory, logging)
//! - Error types

pub mod conversation;
pub mod error;
pub mod language;
pub mod traits;

pub use conversation::{Turn, TurnRole};
pub use error::{Error, Result};
pub use language::{detect_language, normalize_language, Language};
pub use traits::{
    ConversationStore, InteractionLog, LanguageModel, SpeechToText, TextToSpeech,
};
