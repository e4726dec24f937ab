//! TF-IDF vector space
//!
//! A small fixed corpus (the five topic descriptions) is fit once at
//! startup; queries are projected into the same space. Weights use
//! term presence with smoothed inverse document frequency
//! (`ln((1 + n) / (1 + df)) + 1`) and L2 normalization, so cosine
//! similarity reduces to a dot product. Out-of-vocabulary query terms
//! contribute zero weight, which is expected rather than an error.

use std::collections::{BTreeSet, HashMap};
use unicode_segmentation::UnicodeSegmentation;

/// Tokenize text: lowercase word segmentation, dropping
/// single-character tokens
fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(|w| w.to_lowercase())
        .filter(|w| w.chars().count() >= 2)
        .collect()
}

/// TF-IDF vectorizer over a fixed document corpus
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Term -> dimension index, in sorted term order for determinism
    vocabulary: HashMap<String, usize>,
    /// Per-dimension inverse document frequency
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Fit the vocabulary and document frequencies
    pub fn fit(documents: &[&str]) -> Self {
        let tokenized: Vec<BTreeSet<String>> = documents
            .iter()
            .map(|doc| tokenize(doc).into_iter().collect())
            .collect();

        let mut terms: BTreeSet<String> = BTreeSet::new();
        for doc in &tokenized {
            terms.extend(doc.iter().cloned());
        }

        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();

        let n = documents.len() as f32;
        let mut idf = vec![0.0f32; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = tokenized.iter().filter(|doc| doc.contains(term)).count() as f32;
            idf[idx] = ((1.0 + n) / (1.0 + df)).ln() + 1.0;
        }

        Self { vocabulary, idf }
    }

    /// Project text into the fitted space (L2-normalized)
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.vocabulary.len()];

        let present: BTreeSet<String> = tokenize(text).into_iter().collect();
        for term in &present {
            if let Some(&idx) = self.vocabulary.get(term) {
                vector[idx] = self.idf[idx];
            }
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }

    /// Number of dimensions in the fitted space
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Cosine similarity between two vectors from the same space
///
/// Both inputs are already L2-normalized, so this is a dot product;
/// a zero vector yields zero similarity.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_short_tokens() {
        let tokens = tokenize("How do I save money?");
        assert!(tokens.contains(&"save".to_string()));
        assert!(tokens.contains(&"money".to_string()));
        assert!(!tokens.contains(&"i".to_string()));
    }

    #[test]
    fn test_fit_builds_sorted_vocabulary() {
        let v = TfidfVectorizer::fit(&["banana apple", "apple cherry"]);
        assert_eq!(v.vocabulary_size(), 3);
    }

    #[test]
    fn test_transform_is_normalized() {
        let v = TfidfVectorizer::fit(&["saving money emergency", "loans interest borrowing"]);
        let vec = v.transform("saving money");
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_oov_terms_are_zero() {
        let v = TfidfVectorizer::fit(&["saving money", "loans interest"]);
        let vec = v.transform("zebra quantum");
        assert!(vec.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_cosine_prefers_overlapping_document() {
        let v = TfidfVectorizer::fit(&["saving money emergency funds", "loans interest borrowing"]);
        let savings = v.transform("saving money emergency funds");
        let credit = v.transform("loans interest borrowing");
        let query = v.transform("interest on loans");
        assert!(cosine_similarity(&query, &credit) > cosine_similarity(&query, &savings));
    }
}
