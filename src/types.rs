//! Core types shared across the summarizer.

use serde::{Deserialize, Serialize};

/// Number of sentences a summary holds at most.
pub const SUMMARY_SENTENCES: usize = 8;

/// Sentences with this many whitespace-separated words or more are never
/// scored.
pub const MAX_SENTENCE_WORDS: usize = 30;

/// Default minimum input length, in whitespace-separated words.
pub const DEFAULT_MIN_WORDS: usize = 20;

/// Which tokens count towards word frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenFilter {
    /// Drop stop words and any token that is not purely alphabetic.
    #[default]
    Alphabetic,
    /// Drop stop words only; punctuation and numbers are counted.
    StopwordsOnly,
}

impl TokenFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alphabetic => "alphabetic",
            Self::StopwordsOnly => "stopwords_only",
        }
    }
}

/// Resolved summarizer settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizerConfig {
    /// Stop-word language code
    pub language: String,
    /// Token filtering variant
    pub filter: TokenFilter,
    /// Run the regex cleanup before summarizing
    pub cleanup: bool,
    /// Minimum input length accepted by [`crate::input::check_input`]
    pub min_words: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            filter: TokenFilter::default(),
            cleanup: true,
            min_words: DEFAULT_MIN_WORDS,
        }
    }
}

impl SummarizerConfig {
    pub fn with_cleanup(mut self, cleanup: bool) -> Self {
        self.cleanup = cleanup;
        self
    }
}
