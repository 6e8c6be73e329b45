//! Stop-word membership test
//!
//! Backed by the `stop-words` crate. Entries are stored lower-cased, so the
//! membership test is case-insensitive.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Language codes with a bundled stop-word list.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "ru", "sv", "no", "da", "fi", "hu", "tr", "pl",
    "ar",
];

/// A set of low-information words excluded from frequency counting
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Load the bundled list for `language`.
    ///
    /// Unknown languages fall back to English; use [`is_supported_language`]
    /// to detect that case up front.
    pub fn new(language: &str) -> Self {
        let lang = language_for(language).unwrap_or(LANGUAGE::English);
        Self {
            words: get(lang).iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// A filter that treats nothing as a stop word
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Build a filter from an explicit word list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add words to the list
    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.words.extend(words.iter().map(|w| w.to_lowercase()));
    }

    /// Remove words from the list
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.words.remove(&word.to_lowercase());
        }
    }

    /// Membership test. Callers that already hold a lower-cased token should
    /// prefer [`StopwordFilter::contains_normalized`].
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Membership test for a token that is already lower-cased.
    #[inline]
    pub fn contains_normalized(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Whether `language` maps to a bundled stop-word list.
pub fn is_supported_language(language: &str) -> bool {
    language_for(language).is_some()
}

fn language_for(language: &str) -> Option<LANGUAGE> {
    let lang = match language.to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        "pl" | "polish" => LANGUAGE::Polish,
        "ar" | "arabic" => LANGUAGE::Arabic,
        _ => return None,
    };
    Some(lang)
}
