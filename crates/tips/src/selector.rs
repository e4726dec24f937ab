//! Tip selection
//!
//! Orchestrates the core: normalize the language, match the topic,
//! look up candidates with catalog-miss fallback to English, then
//! pick one uniformly at random. Stateless after construction, so a
//! single instance behind an `Arc` serves arbitrarily many concurrent
//! callers.

use rand::Rng;

use farmwise_core::normalize_language;

use crate::catalog::{tips_for, FALLBACK_TIPS};
use crate::topic::TopicModel;

/// Topic-matched localized tip selector
pub struct TipSelector {
    model: TopicModel,
}

impl TipSelector {
    /// Build the selector, fitting the topic model once
    pub fn new() -> Self {
        Self {
            model: TopicModel::new(),
        }
    }

    /// Select a tip using thread-local randomness
    ///
    /// Never fails and never returns an empty string, whatever the
    /// inputs.
    pub fn select_tip(&self, user_text: &str, language_hint: Option<&str>) -> String {
        self.select_tip_with(&mut rand::thread_rng(), user_text, language_hint)
    }

    /// Select a tip with an injected random source
    ///
    /// The random choice among candidates is the only
    /// non-deterministic step; tests pass a seeded generator to assert
    /// exact selection.
    pub fn select_tip_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        user_text: &str,
        language_hint: Option<&str>,
    ) -> String {
        let language = normalize_language(language_hint);
        let topic = self.model.best_topic_or_general(user_text);

        let candidates = tips_for(topic, &language)
            .or_else(|| tips_for(topic, "english"))
            .unwrap_or(FALLBACK_TIPS);

        candidates[rng.gen_range(0..candidates.len())].to_string()
    }
}

impl Default for TipSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::Topic;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn selector() -> TipSelector {
        TipSelector::new()
    }

    #[test]
    fn test_never_empty() {
        let s = selector();
        for (text, hint) in [
            ("", None),
            ("asdkj qwexyz", None),
            ("How do I save?", Some("fr")),
            ("loan", Some("")),
            ("  ", Some("german")),
        ] {
            let tip = s.select_tip(text, hint);
            assert!(!tip.is_empty(), "empty tip for {text:?}/{hint:?}");
        }
    }

    #[test]
    fn test_credit_query_returns_english_credit_tip() {
        let s = selector();
        let expected = tips_for(Topic::Credit, "english").unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let tip = s.select_tip_with(&mut rng, "I want a loan with low interest rate", None);
            assert!(expected.contains(&tip.as_str()));
        }
    }

    #[test]
    fn test_yoruba_savings_scenario() {
        let s = selector();
        let expected = tips_for(Topic::Savings, "yoruba").unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let tip =
                s.select_tip_with(&mut rng, "How do I save money for emergencies?", Some("yo"));
            assert!(expected.contains(&tip.as_str()));
        }
    }

    #[test]
    fn test_gibberish_tie_breaks_to_english_savings() {
        let s = selector();
        let expected = tips_for(Topic::Savings, "english").unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let tip = s.select_tip_with(&mut rng, "asdkj qwexyz", None);
            assert!(expected.contains(&tip.as_str()));
        }
    }

    #[test]
    fn test_unsupported_hint_falls_back_to_english() {
        let s = selector();
        // "fr" passes through normalization verbatim, misses the
        // catalog, and falls back to (topic, english)
        let expected = tips_for(Topic::Credit, "english").unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let tip = s.select_tip_with(&mut rng, "check the interest rate on loans", Some("fr"));
            assert!(expected.contains(&tip.as_str()));
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let s = selector();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            s.select_tip_with(&mut a, "save money", Some("sw")),
            s.select_tip_with(&mut b, "save money", Some("sw")),
        );
    }

    #[test]
    fn test_both_candidates_reachable() {
        let s = selector();
        let mut seen = std::collections::HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            seen.insert(s.select_tip_with(&mut rng, "asdkj qwexyz", None));
        }
        assert_eq!(seen.len(), 2);
    }
}
