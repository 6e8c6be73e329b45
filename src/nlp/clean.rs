//! Regular-expression cleanup applied to raw input before summarizing.
//!
//! The passes run in a fixed order:
//! 1. bracketed numeric citation markers (`[12]`, `[]`) become a space
//! 2. every character outside `[a-zA-Z.,]` becomes a space
//! 3. single-letter words are deleted
//! 4. one uppercase letter at the very end of the text is deleted
//! 5. whitespace runs collapse to a single space
//!
//! The result keeps only ASCII letters, `.`, `,` and single spaces.

use once_cell::sync::Lazy;
use regex::Regex;

static CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[0-9]*\]").expect("citation pattern is valid"));
static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z.,]").expect("charset pattern is valid"));
static SINGLE_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]\b").expect("single-letter pattern is valid"));
static TRAILING_CAPITAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]\z").expect("trailing capital pattern is valid"));
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Run every cleanup pass over `text`.
pub fn clean_text(text: &str) -> String {
    let text = CITATION.replace_all(text, " ");
    let text = DISALLOWED.replace_all(&text, " ");
    let text = SINGLE_LETTER.replace_all(&text, "");
    let text = TRAILING_CAPITAL.replace(&text, "");
    WHITESPACE.replace_all(&text, " ").into_owned()
}
