//! # freqsum
//!
//! Frequency-based extractive text summarization.
//!
//! Words are counted across the whole document (stop words and, by default,
//! non-alphabetic tokens excluded), the counts are normalized so the most
//! frequent word weighs `1.0`, and each sentence scores the sum of its word
//! weights. The eight best sentences under thirty words form the summary,
//! best first.
//!
//! ## Quick start
//!
//! ```
//! use freqsum::{LanguageModel, Pipeline};
//!
//! let model = LanguageModel::new("en");
//! let summary = Pipeline::new().summarize(
//!     "Rust is a systems language. Rust is fast. Rust is safe. Cats nap.",
//!     &model,
//! );
//! assert!(summary.as_str().starts_with("Rust"));
//! ```

pub mod error;
pub mod input;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use error::{Error, Result};
pub use input::{check_input, InputError};
pub use nlp::{LanguageModel, StopwordFilter, Tokenizer, UnicodeTokenizer};
pub use pipeline::{Pipeline, Summary, SummarizerSpec};
pub use summarizer::{FrequencyTable, SentenceScorer, SentenceScores, SentenceSelector};
pub use types::{
    SummarizerConfig, TokenFilter, DEFAULT_MIN_WORDS, MAX_SENTENCE_WORDS, SUMMARY_SENTENCES,
};

/// Summarize `text` with the default English model and no preprocessing.
///
/// Builds a fresh [`LanguageModel`] on every call; long-running callers
/// should build one model and use [`Pipeline::summarize`].
pub fn summarize(text: &str) -> String {
    Pipeline::new()
        .summarize(text, &LanguageModel::new("en"))
        .into_string()
}
