//! Rule-based natural-language understanding
//!
//! Keyword intent classification plus per-intent personalized hints.
//! Deliberately simple: a fixed keyword table covers the farming and
//! finance queries the assistant sees, and everything else lands on
//! `General`. Can be replaced with a learned classifier later without
//! touching callers.

pub mod intent;

pub use intent::{classify_intent, personalized_hint, Intent};
