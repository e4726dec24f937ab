//! Core message processing
//!
//! Orchestrates one chat turn: resolve the response language, classify
//! intent, replay conversation context into the LLM, append the
//! per-intent hint, persist both turns, synthesize audio, log the
//! interaction, and attach a topic-matched tip. Collaborator failures
//! degrade to fixed fallbacks; this function itself never fails.

use serde::Serialize;
use tracing::warn;

use farmwise_core::{detect_language, normalize_language, TurnRole};
use farmwise_llm::FALLBACK_RESPONSE;
use farmwise_nlu::{classify_intent, personalized_hint};

use crate::state::AppState;

/// Composed response for one chat turn
#[derive(Debug, Clone, Serialize)]
pub struct ChatOutcome {
    /// Language the request resolved to (normalized hint, detected
    /// code, or `"unknown"`)
    pub detected_language: String,
    /// Classified intent wire name
    pub intent: String,
    /// Echo of the processed user text
    pub user_text: String,
    /// LLM answer plus personalized hint
    pub ai_response: String,
    /// Topic-matched localized tip
    pub tip: String,
    /// Relative URL of the synthesized audio, when available
    pub audio_url: Option<String>,
}

/// Process one user message end to end
pub async fn process_message(
    state: &AppState,
    user_text: &str,
    user_id: &str,
    lang_hint: Option<&str>,
) -> ChatOutcome {
    // Hint wins over detection; both funnel through normalization so
    // downstream consumers see either a canonical name or a verbatim
    // pass-through that catalog fallback makes harmless.
    let hint = lang_hint.filter(|s| !s.trim().is_empty());
    let (detected_language, response_lang) = match hint {
        Some(h) => {
            let normalized = normalize_language(Some(h));
            (normalized.clone(), normalized)
        }
        None => {
            let detected = detect_language(user_text)
                .map(|l| l.code().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let normalized = normalize_language(Some(&detected));
            (detected, normalized)
        }
    };

    let intent = classify_intent(user_text);

    let context = match state.store.context(user_id) {
        Ok(context) => context,
        Err(e) => {
            warn!(error = %e, user_id, "failed to load conversation context");
            Vec::new()
        }
    };

    let response_text = match state.llm.respond(user_text, &context, &response_lang).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "LLM response failed, using fallback");
            FALLBACK_RESPONSE.to_string()
        }
    };
    let full_response = format!("{response_text}\n\n{}", personalized_hint(intent));

    if let Err(e) = state.store.remember(user_id, TurnRole::User, user_text) {
        warn!(error = %e, user_id, "failed to remember user turn");
    }
    if let Err(e) = state
        .store
        .remember(user_id, TurnRole::Assistant, &full_response)
    {
        warn!(error = %e, user_id, "failed to remember assistant turn");
    }

    let audio_url = match &state.tts {
        Some(tts) => match tts.synthesize(&full_response, &response_lang).await {
            Ok(path) => path
                .file_name()
                .map(|name| format!("audio_responses/{}", name.to_string_lossy())),
            Err(e) => {
                warn!(error = %e, "TTS generation failed");
                None
            }
        },
        None => None,
    };

    state
        .log
        .log_interaction(user_text, &full_response, &response_lang, intent.as_str());

    let tip = state.tips.select_tip(user_text, Some(&response_lang));

    ChatOutcome {
        detected_language,
        intent: intent.as_str().to_string(),
        user_text: user_text.to_string(),
        ai_response: full_response,
        tip,
        audio_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use farmwise_config::Settings;
    use farmwise_core::{Error, InteractionLog, LanguageModel, Result, Turn};
    use farmwise_persistence::InMemoryConversationStore;
    use farmwise_tips::TipSelector;

    struct ScriptedLlm {
        reply: Option<&'static str>,
    }

    #[async_trait]
    impl LanguageModel for ScriptedLlm {
        async fn respond(&self, _message: &str, _context: &[Turn], _language: &str) -> Result<String> {
            match self.reply {
                Some(text) => Ok(text.to_string()),
                None => Err(Error::Llm("scripted failure".to_string())),
            }
        }

        fn model_name(&self) -> &str {
            "scripted"
        }
    }

    struct NullLog;

    impl InteractionLog for NullLog {
        fn log_interaction(&self, _u: &str, _r: &str, _l: &str, _i: &str) {}
    }

    fn test_state(reply: Option<&'static str>) -> AppState {
        AppState::new(
            Settings::default(),
            TipSelector::new(),
            Arc::new(ScriptedLlm { reply }),
            None,
            None,
            Arc::new(InMemoryConversationStore::new()),
            Arc::new(NullLog),
        )
    }

    #[tokio::test]
    async fn test_hint_sets_both_languages() {
        let state = test_state(Some("Eko ni owo"));
        let outcome = process_message(&state, "How do I save money?", "guest", Some("yo")).await;

        assert_eq!(outcome.detected_language, "yoruba");
        assert_eq!(outcome.intent, "loan_inquiry"); // "money" keyword
        assert!(outcome.ai_response.starts_with("Eko ni owo"));
        assert!(outcome.audio_url.is_none());
        assert!(!outcome.tip.is_empty());
    }

    #[tokio::test]
    async fn test_llm_failure_uses_fallback() {
        let state = test_state(None);
        let outcome = process_message(&state, "hello there", "guest", None).await;

        assert!(outcome.ai_response.starts_with(FALLBACK_RESPONSE));
        assert!(outcome.ai_response.contains("Keep good farm records"));
    }

    #[tokio::test]
    async fn test_gibberish_detects_unknown() {
        let state = test_state(Some("hi"));
        let outcome = process_message(&state, "asdkj qwexyz", "guest", None).await;

        assert_eq!(outcome.detected_language, "unknown");
        // Tie-break topic + english fallback still yields a tip
        assert!(!outcome.tip.is_empty());
    }

    #[tokio::test]
    async fn test_turns_are_remembered() {
        let state = test_state(Some("answer"));
        process_message(&state, "first question", "amina", None).await;

        let context = state.store.context("amina").unwrap();
        assert_eq!(context.len(), 2);
        assert_eq!(context[0].role, TurnRole::User);
        assert_eq!(context[0].content, "first question");
        assert_eq!(context[1].role, TurnRole::Assistant);
    }

    #[tokio::test]
    async fn test_hint_appended_to_response() {
        let state = test_state(Some("Maize likes rain."));
        let outcome = process_message(&state, "when to plant maize?", "guest", Some("en")).await;

        assert_eq!(outcome.intent, "crop_advice");
        assert!(outcome.ai_response.contains("drought-resistant crops"));
    }

    #[tokio::test]
    async fn test_empty_hint_falls_back_to_detection() {
        let state = test_state(Some("ok"));
        let outcome = process_message(&state, "how is the weather for you", "guest", Some("  ")).await;

        // Blank hint is treated as absent; English stopwords detect
        assert_eq!(outcome.detected_language, "en");
        assert_eq!(outcome.intent, "weather_update");
    }
}
