use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use stop_words::LANGUAGE;
use tracing::debug;

use super::SparseVector;

/// English stopword list used when a vectorizer artifact does not embed
/// its own list.
static ENGLISH_STOP_WORDS: Lazy<HashSet<String>> =
    Lazy::new(|| {
        stop_words::get(LANGUAGE::English)
            .into_iter()
            .map(|word| word.to_string())
            .collect()
    });

/// Fitted TF-IDF model produced by the offline training pipeline.
///
/// Invariant, enforced when the artifact is loaded: every vocabulary slot
/// is a valid index into `idf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term to vocabulary slot.
    pub vocabulary: HashMap<String, usize>,
    /// IDF weight per vocabulary slot.
    pub idf: Vec<f32>,
    /// Stopword list the model was fitted with. When absent, the standard
    /// English list applies.
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,
}

impl TfidfVectorizer {
    /// Dimensionality of every vector this model produces.
    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }

    /// Map text to a TF-IDF weighted sparse vector over the fitted
    /// vocabulary. Terms outside the vocabulary contribute nothing.
    pub fn transform(&self, text: &str) -> SparseVector {
        let embedded: Option<HashSet<&str>> = self
            .stop_words
            .as_ref()
            .map(|words| words.iter().map(String::as_str).collect());
        let is_stop = |token: &str| match &embedded {
            Some(words) => words.contains(token),
            None => ENGLISH_STOP_WORDS.contains(token),
        };

        // Term frequency per slot, keyed so indices come out ascending
        let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
        for token in tokenize(text) {
            if is_stop(&token) {
                continue;
            }
            if let Some(&slot) = self.vocabulary.get(&token) {
                *counts.entry(slot).or_insert(0.0) += 1.0;
            }
        }

        debug!("Vectorized text into {} active terms", counts.len());

        let mut indices = Vec::with_capacity(counts.len());
        let mut values = Vec::with_capacity(counts.len());
        for (slot, tf) in counts {
            indices.push(slot as u32);
            values.push(tf * self.idf[slot]);
        }

        SparseVector {
            dim: self.dimensions(),
            indices,
            values,
        }
    }
}

/// Tokenize text into lowercase terms, dropping single characters
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty() && s.len() > 1)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> TfidfVectorizer {
        let mut vocabulary = HashMap::new();
        vocabulary.insert("python".to_string(), 0);
        vocabulary.insert("sql".to_string(), 1);
        vocabulary.insert("statistics".to_string(), 2);
        TfidfVectorizer {
            vocabulary,
            idf: vec![2.0, 3.0, 1.5],
            stop_words: Some(vec!["and".to_string()]),
        }
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Python, SQL & Machine-Learning!");
        assert_eq!(tokens, vec!["python", "sql", "machine", "learning"]);
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        let tokens = tokenize("C and R and Go");
        assert_eq!(tokens, vec!["and", "and", "go"]);
    }

    #[test]
    fn test_transform_weights_counts_by_idf() {
        let v = model().transform("python and sql python");
        assert_eq!(v.dim, 3);
        assert_eq!(v.indices, vec![0, 1]);
        assert_eq!(v.values, vec![4.0, 3.0]);
    }

    #[test]
    fn test_transform_drops_out_of_vocabulary_terms() {
        let v = model().transform("haskell prolog");
        assert!(v.indices.is_empty());
        assert_eq!(v.norm(), 0.0);
    }

    #[test]
    fn test_transform_uses_default_stopword_list() {
        let mut m = model();
        m.vocabulary.insert("the".to_string(), 2);
        m.stop_words = None;
        let v = m.transform("the python");
        assert_eq!(v.indices, vec![0]);
    }

    #[test]
    fn test_transform_is_deterministic() {
        let m = model();
        let a = m.transform("statistics python sql");
        let b = m.transform("statistics python sql");
        assert_eq!(a, b);
        assert!(a.validate().is_ok());
    }
}
