//! Summarization components
//!
//! Frequency-based extractive summarization: word frequencies weight the
//! sentences, and the best sentences form the summary.

pub mod frequency;
pub mod scorer;
pub mod selector;

pub use frequency::FrequencyTable;
pub use scorer::{word_count, ScoredSentence, SentenceScorer, SentenceScores};
pub use selector::SentenceSelector;
