//! Pipeline configuration, validation, and execution.
//!
//! ## Submodules
//!
//! - [`artifacts`] — typed intermediates flowing between stages
//! - [`traits`] — stage trait definitions
//! - [`runner`] — pipeline orchestration and artifact threading
//! - [`observer`] — logging, profiling, and debug hooks
//! - [`spec`] / [`validation`] — JSON configuration and its checks

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;

pub use artifacts::{SelectedSentence, Summary, TokenizedDocument};
pub use error_code::ErrorCode;
pub use errors::PipelineSpecError;
pub use observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageTimingObserver,
    TracingObserver, STAGES, STAGE_FREQUENCY, STAGE_PREPROCESS, STAGE_SCORE, STAGE_SELECT,
    STAGE_TOKENIZE,
};
pub use runner::Pipeline;
pub use spec::{InputSpec, PreprocessType, SummarizerSpec, SPEC_VERSION};
pub use traits::{CleanupPreprocessor, DynPreprocessor, NoopPreprocessor, Preprocessor};
pub use validation::{
    Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule,
};
