//! Normalized word-frequency table
//!
//! Every occurrence of a significant word counts once. Raw counts are
//! divided by the largest count, so the most frequent word weighs exactly
//! `1.0` and every other weight lies in `(0, 1]`.

use rustc_hash::FxHashMap;

use crate::nlp::{LanguageModel, Tokenizer};
use crate::types::TokenFilter;

/// Mapping from lower-cased word to its normalized weight
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    weights: FxHashMap<String, f64>,
}

impl FrequencyTable {
    /// Count the significant words in `words` and normalize the counts.
    ///
    /// A token is dropped when it is a stop word, or, under
    /// [`TokenFilter::Alphabetic`], when it is not purely alphabetic.
    pub fn build<T: Tokenizer>(
        words: &[&str],
        model: &LanguageModel<T>,
        filter: TokenFilter,
    ) -> Self {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();

        for word in words {
            let normalized = word.to_lowercase();
            if model.stopwords().contains_normalized(&normalized) {
                continue;
            }
            if filter == TokenFilter::Alphabetic && !model.tokenizer().is_alphabetic(&normalized)
            {
                continue;
            }
            *counts.entry(normalized).or_insert(0) += 1;
        }

        Self::from_counts(counts)
    }

    /// Normalize raw occurrence counts by the largest count.
    pub fn from_counts(counts: FxHashMap<String, usize>) -> Self {
        let max_count = counts.values().copied().max().unwrap_or(0);

        let weights = counts
            .into_iter()
            .map(|(word, count)| {
                let weight = if max_count > 0 {
                    count as f64 / max_count as f64
                } else {
                    0.0
                };
                (word, weight)
            })
            .collect();

        Self { weights }
    }

    /// Weight of an already lower-cased word, if it is in the table.
    #[inline]
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    /// Largest weight in the table (`0.0` when empty).
    pub fn max_weight(&self) -> f64 {
        self.weights.values().copied().fold(0.0, f64::max)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(w, &s)| (w.as_str(), s))
    }

    /// Entries sorted by descending weight, ties alphabetical.
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{StopwordFilter, UnicodeTokenizer};

    fn model() -> LanguageModel {
        LanguageModel::with_parts(
            UnicodeTokenizer,
            StopwordFilter::from_list(&["the", "of", "and", "a", "is"]),
            "test",
        )
    }

    #[test]
    fn test_counts_are_normalized_by_max() {
        let words = ["Rust", "rust", "RUST", "memory", "memory", "safety"];
        let table = FrequencyTable::build(&words, &model(), TokenFilter::Alphabetic);

        assert_eq!(table.len(), 3);
        assert_eq!(table.weight("rust"), Some(1.0));
        assert!((table.weight("memory").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((table.weight("safety").unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(table.max_weight(), 1.0);
    }

    #[test]
    fn test_stopwords_are_dropped() {
        let words = ["The", "state", "of", "the", "art"];
        let table = FrequencyTable::build(&words, &model(), TokenFilter::Alphabetic);

        assert!(!table.contains("the"));
        assert!(!table.contains("of"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_alphabetic_filter_drops_punctuation() {
        let words = ["fast", ",", "fast", ".", "42", "ok"];
        let strict = FrequencyTable::build(&words, &model(), TokenFilter::Alphabetic);
        let lenient = FrequencyTable::build(&words, &model(), TokenFilter::StopwordsOnly);

        assert!(!strict.contains(","));
        assert!(!strict.contains("42"));
        assert_eq!(strict.len(), 2);

        assert!(lenient.contains(","));
        assert!(lenient.contains("."));
        assert!(lenient.contains("42"));
        assert_eq!(lenient.weight("fast"), Some(1.0));
        assert_eq!(lenient.weight(","), Some(0.5));
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let table = FrequencyTable::build(&[], &model(), TokenFilter::Alphabetic);

        assert!(table.is_empty());
        assert_eq!(table.max_weight(), 0.0);
    }

    #[test]
    fn test_only_stopwords_yields_empty_table() {
        let words = ["the", "of", "and", "a"];
        let table = FrequencyTable::build(&words, &model(), TokenFilter::StopwordsOnly);

        assert!(table.is_empty());
    }

    #[test]
    fn test_zero_counts_do_not_divide_by_zero() {
        let mut counts = FxHashMap::default();
        counts.insert("ghost".to_string(), 0);
        let table = FrequencyTable::from_counts(counts);

        assert_eq!(table.weight("ghost"), Some(0.0));
    }

    #[test]
    fn test_top_n_orders_by_weight() {
        let words = ["b", "a", "a", "c", "c", "c"];
        let model = LanguageModel::with_parts(UnicodeTokenizer, StopwordFilter::empty(), "test");
        let table = FrequencyTable::build(&words, &model, TokenFilter::Alphabetic);

        let top = table.top_n(2);
        assert_eq!(top, vec![("c", 1.0), ("a", 2.0 / 3.0)]);
    }
}
