//! Sentence and word segmentation
//!
//! [`Tokenizer`] is the seam for plugging in a different segmenter. The
//! default [`UnicodeTokenizer`] follows UAX #29 sentence and word boundaries,
//! and additionally breaks after `.`, `!` or `?` followed by whitespace even
//! when the next word starts lowercase.

use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences and words.
///
/// Implementations must be pure: the same input always yields the same
/// segments, in document order. Returned slices borrow from the input.
pub trait Tokenizer: Send + Sync {
    /// Split `text` into sentences, trimmed of surrounding whitespace.
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Split `text` into word tokens. Punctuation marks are returned as their
    /// own tokens; whitespace is never returned.
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Whether `token` consists only of alphabetic characters.
    fn is_alphabetic(&self, token: &str) -> bool {
        !token.is_empty() && token.chars().all(char::is_alphabetic)
    }
}

/// Unicode-aware tokenizer based on `unicode-segmentation`
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_sentence_bounds()
            .flat_map(split_after_terminators)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .collect()
    }
}

/// Split after every `.`, `!` or `?` that is followed by whitespace.
fn split_after_terminators(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        if let Some(&(next, following)) = chars.peek() {
            if following.is_whitespace() {
                pieces.push(&text[start..next]);
                start = next;
            }
        }
    }

    pieces.push(&text[start..]);
    pieces
}
