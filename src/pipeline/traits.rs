//! Stage trait definitions for the pipeline.

use std::borrow::Cow;

use crate::nlp::clean_text;

// ============================================================================
// Preprocessor — optional text cleanup (stage 0)
// ============================================================================

/// Optional text preprocessing stage.
///
/// # Contract
///
/// - **Input**: the raw document.
/// - **Output**: the text handed to the tokenizer. Return
///   [`Cow::Borrowed`] when nothing changes.
pub trait Preprocessor {
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

impl<P: Preprocessor + ?Sized> Preprocessor for Box<P> {
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str> {
        (**self).preprocess(text)
    }
}

/// Passes the text through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreprocessor;

impl Preprocessor for NoopPreprocessor {
    #[inline]
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// Regex cleanup, see [`crate::nlp::clean`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanupPreprocessor;

impl Preprocessor for CleanupPreprocessor {
    fn preprocess<'a>(&self, text: &'a str) -> Cow<'a, str> {
        Cow::Owned(clean_text(text))
    }
}

/// Shared, dynamically chosen preprocessor.
pub type DynPreprocessor = Box<dyn Preprocessor + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_borrows_input() {
        let text = "Unchanged [1] text 42.";
        let out = NoopPreprocessor.preprocess(text);

        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, text);
    }

    #[test]
    fn test_cleanup_strips_noise() {
        let out = CleanupPreprocessor.preprocess("Rust[1] shipped in 2015 , a year.");

        assert_eq!(out, "Rust shipped in , year.");
    }

    #[test]
    fn test_cleanup_output_is_stable_on_second_pass() {
        let once = CleanupPreprocessor.preprocess("Mixed  (input) [3] with X");
        let twice = CleanupPreprocessor.preprocess(&once).into_owned();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_preprocessor_as_trait_object() {
        let pre: DynPreprocessor = Box::new(CleanupPreprocessor);

        assert_eq!(pre.preprocess("tabs\t\there"), "tabs here");
    }
}
