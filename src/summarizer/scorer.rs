//! Sentence scoring against a [`FrequencyTable`].
//!
//! A sentence scores the sum of the weights of its words that appear in the
//! table. Sentences are keyed by their exact text, so repeated sentences
//! accumulate into a single entry. Sentences of [`MAX_SENTENCE_WORDS`] words
//! or more are left out entirely, as are sentences with no word in the table.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::frequency::FrequencyTable;
use crate::nlp::{LanguageModel, Tokenizer};
use crate::types::MAX_SENTENCE_WORDS;

/// A candidate sentence and its accumulated score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    /// Exact sentence text
    pub text: String,
    /// Sum of word weights over every occurrence of this text
    pub score: f64,
    /// Index of the first sentence with this text
    pub position: usize,
}

/// Score table keyed by sentence text, kept in first-appearance order
#[derive(Debug, Clone, Default)]
pub struct SentenceScores {
    entries: Vec<ScoredSentence>,
    by_text: FxHashMap<String, usize>,
}

impl SentenceScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to the entry for `text`, creating it at `position` if
    /// it does not exist yet.
    pub fn add(&mut self, text: &str, position: usize, weight: f64) {
        match self.by_text.get(text) {
            Some(&idx) => self.entries[idx].score += weight,
            None => {
                self.by_text.insert(text.to_string(), self.entries.len());
                self.entries.push(ScoredSentence {
                    text: text.to_string(),
                    score: weight,
                    position,
                });
            }
        }
    }

    /// Score of the sentence with exactly this text, if it qualified.
    pub fn get(&self, text: &str) -> Option<f64> {
        self.by_text.get(text).map(|&idx| self.entries[idx].score)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.by_text.contains_key(text)
    }

    /// Entries in first-appearance order.
    pub fn entries(&self) -> &[ScoredSentence] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Number of whitespace-separated words in `sentence`.
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}

/// Sentence scorer
#[derive(Debug, Clone, Copy)]
pub struct SentenceScorer {
    max_words: usize,
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self {
            max_words: MAX_SENTENCE_WORDS,
        }
    }
}

impl SentenceScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `sentences` (in document order) against `table`.
    pub fn score<T: Tokenizer>(
        &self,
        sentences: &[&str],
        table: &FrequencyTable,
        model: &LanguageModel<T>,
    ) -> SentenceScores {
        let mut scores = SentenceScores::new();
        if table.is_empty() {
            return scores;
        }

        for (position, sentence) in sentences.iter().enumerate() {
            if word_count(sentence) >= self.max_words {
                continue;
            }

            let lowered = sentence.to_lowercase();
            for word in model.tokenizer().words(&lowered) {
                if let Some(weight) = table.weight(word) {
                    scores.add(sentence, position, weight);
                }
            }
        }

        scores
    }
}
