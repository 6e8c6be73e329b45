//! Natural Language Processing components
//!
//! Segmentation, stop-word filtering, input cleanup and the shared
//! [`LanguageModel`] handle that bundles them.

pub mod clean;
pub mod model;
pub mod stopwords;
pub mod tokenizer;

pub use clean::clean_text;
pub use model::LanguageModel;
pub use stopwords::{is_supported_language, StopwordFilter, SUPPORTED_LANGUAGES};
pub use tokenizer::{Tokenizer, UnicodeTokenizer};
