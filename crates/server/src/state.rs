//! Application state

use std::sync::Arc;

use farmwise_config::Settings;
use farmwise_core::{ConversationStore, InteractionLog, LanguageModel, SpeechToText, TextToSpeech};
use farmwise_tips::TipSelector;

/// Shared application state
///
/// Everything here is constructed once at startup, before any traffic
/// is accepted, and injected into handlers. The tip selector and its
/// topic model are immutable after construction, so clones of this
/// state can serve arbitrarily many concurrent requests without
/// coordination.
#[derive(Clone)]
pub struct AppState {
    /// Application settings
    pub settings: Arc<Settings>,
    /// Tip selector (topic model built once)
    pub tips: Arc<TipSelector>,
    /// LLM backend
    pub llm: Arc<dyn LanguageModel>,
    /// Speech-to-text backend, absent when speech is disabled
    pub stt: Option<Arc<dyn SpeechToText>>,
    /// Text-to-speech backend, absent when speech is disabled
    pub tts: Option<Arc<dyn TextToSpeech>>,
    /// Conversation memory
    pub store: Arc<dyn ConversationStore>,
    /// Interaction log
    pub log: Arc<dyn InteractionLog>,
}

impl AppState {
    /// Assemble state from constructed collaborators
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        settings: Settings,
        tips: TipSelector,
        llm: Arc<dyn LanguageModel>,
        stt: Option<Arc<dyn SpeechToText>>,
        tts: Option<Arc<dyn TextToSpeech>>,
        store: Arc<dyn ConversationStore>,
        log: Arc<dyn InteractionLog>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            tips: Arc::new(tips),
            llm,
            stt,
            tts,
            store,
            log,
        }
    }
}
