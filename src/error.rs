//! Crate-level error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::validation::ValidationReport;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid summarizer spec ({} error(s)){}", .0.errors().count(), first_error(.0))]
    InvalidSpec(ValidationReport),

    #[error("malformed summarizer spec: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

fn first_error(report: &ValidationReport) -> String {
    report
        .errors()
        .next()
        .map(|e| format!(": {e}"))
        .unwrap_or_default()
}
