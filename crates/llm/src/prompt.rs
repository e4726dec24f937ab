//! Prompt construction for the FarmWise persona

use serde::{Deserialize, Serialize};

use farmwise_core::Turn;

/// Fixed fallback answer substituted by callers when the LLM fails
pub const FALLBACK_RESPONSE: &str = "⚠️ An error occurred while generating a response.\n\n\
    💡 Tip: You can check local cooperative societies for lower-interest agricultural loans, \
    or just say hi to chat casually with FarmWise AI!";

/// One chat message on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

impl From<&Turn> for ChatMessage {
    fn from(turn: &Turn) -> Self {
        Self::new(turn.role.as_str(), turn.content.clone())
    }
}

/// Build the FarmWise system prompt with the reply-language directive
pub fn system_prompt(language: &str) -> String {
    let language = if language.is_empty() {
        "en".to_string()
    } else {
        language.to_lowercase()
    };

    format!(
        "You are FarmWise AI — a friendly, approachable, and knowledgeable assistant for farmers. \
         You can handle both professional financial/farming questions and casual conversation. \
         When users ask about farming, finance, savings, digital payments, or cooperative models, \
         give clear, simple, and helpful guidance. \
         When users chat casually (greetings, jokes, or general conversation), respond warmly and naturally, \
         like a human friend, while keeping a slight educational/farming tone if possible. \
         Reply in the user's language. If a language is specified, reply in {language}. \
         Use a warm, female voice/tone, normal pace, and keep responses concise and easy to understand for low-literacy users."
    )
}

/// Assemble the full message sequence: system prompt, prior
/// conversation context in order, then the new user message
pub fn build_messages(message: &str, context: &[Turn], language: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(context.len() + 2);
    messages.push(ChatMessage::new("system", system_prompt(language)));
    messages.extend(context.iter().map(ChatMessage::from));
    messages.push(ChatMessage::new("user", message));
    messages
}
