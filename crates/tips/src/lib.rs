//! Multilingual financial-tip selection
//!
//! Maps free-form user text to one of five financial-literacy topics
//! via TF-IDF cosine similarity, then narrows to a single localized
//! tip string given a normalized language code.
//!
//! Every public operation is total: unsupported languages fall back to
//! English, topic-model faults fall back to the `General` topic, and
//! the ultimate fallback is a random `general`/`english` tip. Callers
//! never handle an error from this crate.

pub mod catalog;
pub mod selector;
pub mod topic;
pub mod vectorizer;

pub use catalog::tips_for;
pub use selector::TipSelector;
pub use topic::{Topic, TopicModel};
pub use vectorizer::TfidfVectorizer;

use thiserror::Error;

/// Internal topic-model faults
///
/// Never surfaced past the selector: any variant resolves to the
/// `General` topic before a tip is chosen.
#[derive(Error, Debug)]
pub enum TipsError {
    #[error("Topic model has an empty vocabulary")]
    EmptyVocabulary,
}
