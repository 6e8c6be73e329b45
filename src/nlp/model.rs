//! Shared language resources.
//!
//! A [`LanguageModel`] bundles the tokenizer and stop-word list. Build it
//! once at startup and hand out references (or an `Arc`) to every pipeline
//! run; nothing in it is mutated after construction.

use super::stopwords::StopwordFilter;
use super::tokenizer::{Tokenizer, UnicodeTokenizer};

/// Read-only tokenizer + stop-word bundle
#[derive(Debug, Clone)]
pub struct LanguageModel<T = UnicodeTokenizer> {
    tokenizer: T,
    stopwords: StopwordFilter,
    language: String,
}

impl LanguageModel<UnicodeTokenizer> {
    /// Build the default model for `language` (see
    /// [`StopwordFilter::new`] for the fallback rules).
    pub fn new(language: &str) -> Self {
        tracing::debug!(language, "loading language model");
        Self::with_parts(UnicodeTokenizer, StopwordFilter::new(language), language)
    }
}

impl Default for LanguageModel<UnicodeTokenizer> {
    fn default() -> Self {
        Self::new("en")
    }
}

impl<T: Tokenizer> LanguageModel<T> {
    /// Assemble a model from a custom tokenizer and stop-word list.
    pub fn with_parts(tokenizer: T, stopwords: StopwordFilter, language: &str) -> Self {
        Self {
            tokenizer,
            stopwords,
            language: language.to_string(),
        }
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}
