//! Summarizer specification document.
//!
//! A [`SummarizerSpec`] is the JSON configuration accepted by the CLI and by
//! library callers that want file-driven settings. It is checked by the
//! [`super::validation::ValidationEngine`] and resolved into a
//! [`SummarizerConfig`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "language": "en",
//!   "filter": "alphabetic",
//!   "preprocess": "cleanup",
//!   "input": { "min_words": 20 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::validation::{ValidationEngine, ValidationReport};
use crate::error::{Error, Result};
use crate::types::{SummarizerConfig, TokenFilter, DEFAULT_MIN_WORDS};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Top-level summarizer specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Stop-word language code. Defaults to `"en"`.
    #[serde(default)]
    pub language: Option<String>,

    /// Token filtering variant. Defaults to `alphabetic`.
    #[serde(default)]
    pub filter: Option<TokenFilter>,

    /// Preprocessing stage. Defaults to `cleanup`.
    #[serde(default)]
    pub preprocess: Option<PreprocessType>,

    /// Input acceptance limits.
    #[serde(default)]
    pub input: InputSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Preprocessing applied before tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreprocessType {
    /// Use the text as given.
    None,
    /// Regex cleanup of citations, symbols and stray letters.
    Cleanup,
}

/// Input acceptance limits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSpec {
    /// Minimum number of whitespace-separated words.
    #[serde(default)]
    pub min_words: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for SummarizerSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            language: None,
            filter: None,
            preprocess: None,
            input: InputSpec::default(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl SummarizerSpec {
    /// Parse a spec from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a spec file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Run the default validation rules.
    pub fn validate(&self) -> ValidationReport {
        ValidationEngine::with_defaults().validate(self)
    }

    /// Validate and convert into a [`SummarizerConfig`].
    ///
    /// Warnings are logged; any error fails the whole spec.
    pub fn resolve(&self) -> Result<SummarizerConfig> {
        let report = self.validate();
        for warning in report.warnings() {
            tracing::warn!(%warning, "summarizer spec warning");
        }
        if report.has_errors() {
            return Err(Error::InvalidSpec(report));
        }
        Ok(self.to_config())
    }

    /// Convert into a [`SummarizerConfig`] without validating.
    pub fn to_config(&self) -> SummarizerConfig {
        SummarizerConfig {
            language: self.language.clone().unwrap_or_else(|| "en".to_string()),
            filter: self.filter.unwrap_or_default(),
            cleanup: self.preprocess.unwrap_or(PreprocessType::Cleanup) == PreprocessType::Cleanup,
            min_words: self.input.min_words.unwrap_or(DEFAULT_MIN_WORDS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_deserialize_minimal_spec() {
        let spec = SummarizerSpec::from_json(r#"{ "v": 1 }"#).unwrap();

        assert_eq!(spec.v, 1);
        assert!(spec.language.is_none());
        assert!(!spec.strict);
        assert_eq!(spec.to_config(), SummarizerConfig::default());
    }

    #[test]
    fn test_deserialize_full_spec() {
        let json = r#"{
            "v": 1,
            "language": "de",
            "filter": "stopwords_only",
            "preprocess": "none",
            "input": { "min_words": 5 },
            "strict": true
        }"#;
        let spec = SummarizerSpec::from_json(json).unwrap();
        let config = spec.resolve().unwrap();

        assert_eq!(config.language, "de");
        assert_eq!(config.filter, TokenFilter::StopwordsOnly);
        assert!(!config.cleanup);
        assert_eq!(config.min_words, 5);
    }

    #[test]
    fn test_unknown_fields_captured() {
        let json = r#"{ "v": 1, "max_sentences": 3, "input": { "max_words": 10 } }"#;
        let spec = SummarizerSpec::from_json(json).unwrap();

        assert!(spec.unknown_fields.contains_key("max_sentences"));
        assert!(spec.input.unknown_fields.contains_key("max_words"));
    }

    #[test]
    fn test_resolve_rejects_invalid_spec() {
        let spec = SummarizerSpec::from_json(r#"{ "v": 2 }"#).unwrap();

        match spec.resolve() {
            Err(Error::InvalidSpec(report)) => assert!(report.has_errors()),
            other => panic!("expected InvalidSpec, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = SummarizerSpec::from_json(r#"{ "v": "one" }"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "v": 1, "filter": "stopwords_only" }}"#).unwrap();

        let spec = SummarizerSpec::from_path(file.path()).unwrap();
        assert_eq!(spec.filter, Some(TokenFilter::StopwordsOnly));
    }

    #[test]
    fn test_from_missing_path() {
        let err = SummarizerSpec::from_path("/nonexistent/freqsum.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
