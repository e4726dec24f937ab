//! File-backed conversation memory and interaction logging
//!
//! Implements the `ConversationStore` and `InteractionLog` traits from
//! `farmwise-core`:
//! - `FileConversationStore`: one JSON document keyed by user id,
//!   last-write-wins, read-your-writes per user
//! - `InMemoryConversationStore`: drop-in replacement for tests
//! - `FileInteractionLog`: append-only analytics log, best-effort

pub mod logger;
pub mod store;

pub use logger::FileInteractionLog;
pub use store::{FileConversationStore, InMemoryConversationStore};
