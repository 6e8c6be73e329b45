//! Pipeline artifacts.
//!
//! Typed intermediates flowing between stages. [`TokenizedDocument`] borrows
//! from the (preprocessed) input; [`Summary`] is the owned public result.

use std::fmt;

use serde::Serialize;

use crate::nlp::{LanguageModel, Tokenizer};

/// Sentence and word segmentation of one document.
#[derive(Debug, Clone)]
pub struct TokenizedDocument<'a> {
    sentences: Vec<&'a str>,
    words: Vec<&'a str>,
}

impl<'a> TokenizedDocument<'a> {
    /// Segment `text` with the model's tokenizer.
    pub fn new<T: Tokenizer>(text: &'a str, model: &LanguageModel<T>) -> Self {
        let tokenizer = model.tokenizer();
        Self {
            sentences: tokenizer.sentences(text),
            words: tokenizer.words(text),
        }
    }

    /// Sentences in document order
    pub fn sentences(&self) -> &[&'a str] {
        &self.sentences
    }

    /// Every word token of the document, in order, duplicates included
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A sentence chosen for the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSentence {
    pub text: String,
    pub score: f64,
    /// Index of the sentence's first occurrence in the document
    pub position: usize,
}

/// Extractive summary: selected sentences, best first, joined by single
/// spaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    text: String,
    sentences: Vec<SelectedSentence>,
}

impl Summary {
    pub fn new(sentences: Vec<SelectedSentence>) -> Self {
        let text = sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self { text, sentences }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[SelectedSentence] {
        &self.sentences
    }

    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected(text: &str, score: f64, position: usize) -> SelectedSentence {
        SelectedSentence {
            text: text.to_string(),
            score,
            position,
        }
    }

    #[test]
    fn test_tokenized_document_segments_text() {
        let model = LanguageModel::new("en");
        let doc = TokenizedDocument::new("Rust is fast. Go is simple.", &model);

        assert_eq!(doc.sentences(), &["Rust is fast.", "Go is simple."]);
        assert_eq!(doc.words().len(), 8);
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let model = LanguageModel::new("en");
        let doc = TokenizedDocument::new("", &model);

        assert!(doc.is_empty());
        assert!(doc.words().is_empty());
    }

    #[test]
    fn test_summary_joins_with_single_space() {
        let summary = Summary::new(vec![selected("B.", 2.0, 1), selected("A.", 1.0, 0)]);

        assert_eq!(summary.as_str(), "B. A.");
        assert_eq!(summary.to_string(), "B. A.");
        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_summary_serializes_sentences() {
        let summary = Summary::new(vec![selected("Only.", 1.5, 3)]);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["text"], "Only.");
        assert_eq!(json["sentences"][0]["score"], 1.5);
        assert_eq!(json["sentences"][0]["position"], 3);
    }
}
