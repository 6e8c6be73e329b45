//! Stable error codes for configuration diagnostics.

use std::fmt;

use serde::Serialize;

/// Machine-readable category of a [`super::errors::PipelineSpecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The `v` field names a version this build does not understand.
    UnsupportedVersion,
    /// A field holds a value outside its allowed range.
    InvalidValue,
    /// No stop-word list exists for the requested language.
    UnknownLanguage,
    /// A field the schema does not define.
    UnknownField,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidValue => "invalid_value",
            Self::UnknownLanguage => "unknown_language",
            Self::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
