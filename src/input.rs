//! Caller-side input guard.
//!
//! The summarizer itself accepts any string. Front-ends use
//! [`check_input`] to turn away text that is blank or too short to be worth
//! summarizing, and show the error as a warning to the user.

use thiserror::Error;

/// Why an input was turned away
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter some text to summarize.")]
    Blank,
    #[error(
        "Please provide more information to summarize correctly \
         ({words} words, at least {min_words} needed)."
    )]
    TooShort { words: usize, min_words: usize },
}

/// Reject blank text and text with fewer than `min_words`
/// whitespace-separated words.
pub fn check_input(text: &str, min_words: usize) -> Result<(), InputError> {
    if text.trim().is_empty() {
        return Err(InputError::Blank);
    }

    let words = text.split_whitespace().count();
    if words < min_words {
        return Err(InputError::TooShort { words, min_words });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input() {
        assert_eq!(check_input("", 20), Err(InputError::Blank));
        assert_eq!(check_input(" \n\t ", 20), Err(InputError::Blank));
    }

    #[test]
    fn test_too_short() {
        let text = vec!["word"; 19].join(" ");
        assert_eq!(
            check_input(&text, 20),
            Err(InputError::TooShort {
                words: 19,
                min_words: 20
            })
        );
    }

    #[test]
    fn test_exactly_min_words_is_accepted() {
        let text = vec!["word"; 20].join(" ");
        assert_eq!(check_input(&text, 20), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            InputError::Blank.to_string(),
            "Please enter some text to summarize."
        );
        assert!(InputError::TooShort {
            words: 3,
            min_words: 20
        }
        .to_string()
        .contains("3 words"));
    }
}
