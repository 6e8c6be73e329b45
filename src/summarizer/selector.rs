//! Top-K sentence selection
//!
//! Picks the highest-scoring sentences from a [`SentenceScores`] table and
//! returns them in descending score order. Equal scores keep the order in
//! which the sentences first appeared in the document.

use super::scorer::SentenceScores;
use crate::pipeline::artifacts::{SelectedSentence, Summary};
use crate::types::SUMMARY_SENTENCES;

/// Top-K selector
#[derive(Debug, Clone, Copy)]
pub struct SentenceSelector {
    num_sentences: usize,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self {
            num_sentences: SUMMARY_SENTENCES,
        }
    }
}

impl SentenceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select up to `num_sentences` entries, best first.
    pub fn select(&self, scores: &SentenceScores) -> Summary {
        let mut ranked: Vec<_> = scores.entries().iter().collect();
        // Stable sort: entries are already in first-appearance order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(self.num_sentences);

        let sentences = ranked
            .into_iter()
            .map(|s| SelectedSentence {
                text: s.text.clone(),
                score: s.score,
                position: s.position,
            })
            .collect();

        Summary::new(sentences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(&str, f64)]) -> SentenceScores {
        let mut scores = SentenceScores::new();
        for (i, (text, score)) in entries.iter().enumerate() {
            scores.add(text, i, *score);
        }
        scores
    }

    #[test]
    fn test_selects_in_descending_score_order() {
        let table = scores(&[("Low.", 0.5), ("High.", 3.0), ("Mid.", 1.5)]);

        let summary = SentenceSelector::new().select(&table);

        assert_eq!(summary.texts(), vec!["High.", "Mid.", "Low."]);
        assert_eq!(summary.as_str(), "High. Mid. Low.");
    }

    #[test]
    fn test_caps_at_eight_sentences() {
        let entries: Vec<(String, f64)> = (0..12)
            .map(|i| (format!("Sentence {i}."), i as f64))
            .collect();
        let refs: Vec<(&str, f64)> = entries.iter().map(|(t, s)| (t.as_str(), *s)).collect();

        let summary = SentenceSelector::new().select(&scores(&refs));

        assert_eq!(summary.len(), SUMMARY_SENTENCES);
        assert_eq!(summary.sentences()[0].text, "Sentence 11.");
        assert_eq!(summary.sentences()[7].text, "Sentence 4.");
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        let table = scores(&[("First.", 1.0), ("Second.", 2.0), ("Third.", 1.0)]);

        let summary = SentenceSelector::new().select(&table);

        assert_eq!(summary.texts(), vec!["Second.", "First.", "Third."]);
    }

    #[test]
    fn test_zero_scored_entries_are_still_candidates() {
        let table = scores(&[("Zero.", 0.0)]);

        let summary = SentenceSelector::new().select(&table);

        assert_eq!(summary.as_str(), "Zero.");
    }

    #[test]
    fn test_empty_table_gives_empty_summary() {
        let summary = SentenceSelector::new().select(&SentenceScores::new());

        assert!(summary.is_empty());
        assert_eq!(summary.as_str(), "");
    }
}
