//! Traits for pluggable backends
//!
//! The request layer depends on these interfaces rather than concrete
//! services, so each collaborator can be swapped (e.g. an in-memory
//! conversation store in tests) without touching callers.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::conversation::{Turn, TurnRole};
use crate::Result;

/// Hosted large-language-model backend
///
/// Implementations may fail or time out; callers substitute a fixed
/// fallback string on any failure.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate an answer for `message` given prior `context`,
    /// replying in `language` (canonical full name or pass-through)
    async fn respond(&self, message: &str, context: &[Turn], language: &str) -> Result<String>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}

/// Speech-to-text backend
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe uploaded audio bytes
    ///
    /// `language` is an ISO short code hint; `None` lets the model
    /// auto-detect. Callers retry once without the hint before giving
    /// up.
    async fn transcribe(&self, audio: &[u8], language: Option<&str>) -> Result<String>;

    /// Model name for logging
    fn model_name(&self) -> &str;
}

/// Text-to-speech backend
///
/// Synthesis is a soft feature: the request layer converts any error
/// into an absent audio URL and never fails the overall request.
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Synthesize `text` in the voice for `language` (canonical full
    /// name or short code), returning the written audio file path
    async fn synthesize(&self, text: &str, language: &str) -> Result<PathBuf>;
}

/// Durable conversation memory keyed by user identifier
///
/// Last-write-wins; the only guarantee is read-your-writes for a
/// single user.
pub trait ConversationStore: Send + Sync {
    /// Append a turn to a user's history
    fn remember(&self, user_id: &str, role: TurnRole, content: &str) -> Result<()>;

    /// Fetch a user's history in insertion order
    fn context(&self, user_id: &str) -> Result<Vec<Turn>>;

    /// Drop a user's history
    fn clear(&self, user_id: &str) -> Result<()>;
}

/// Append-only interaction log, best-effort
pub trait InteractionLog: Send + Sync {
    /// Record one request/response pair; failures are swallowed
    fn log_interaction(&self, user_text: &str, response: &str, language: &str, intent: &str);
}
