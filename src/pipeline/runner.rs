//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`Pipeline::run`] executes Preprocess → Tokenize → Frequency → Score →
//! Select, threading artifacts forward and notifying a
//! [`PipelineObserver`] at each boundary. A run keeps no state: the same
//! pipeline and [`LanguageModel`] can serve any number of runs, including
//! concurrent ones.

use std::borrow::Cow;

use rayon::prelude::*;

use crate::input::{check_input, InputError};
use crate::nlp::{LanguageModel, Tokenizer};
use crate::pipeline::artifacts::{Summary, TokenizedDocument};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, STAGE_FREQUENCY, STAGE_PREPROCESS,
    STAGE_SCORE, STAGE_SELECT, STAGE_TOKENIZE,
};
use crate::pipeline::traits::{CleanupPreprocessor, DynPreprocessor, NoopPreprocessor, Preprocessor};
use crate::summarizer::{FrequencyTable, SentenceScorer, SentenceSelector};
use crate::types::{SummarizerConfig, TokenFilter};

/// Enter a tracing span for a pipeline stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline
// ============================================================================

/// Frequency-based extractive summarization pipeline.
///
/// Generic over the preprocessing stage so the common cases stay statically
/// dispatched; [`Pipeline::from_config`] picks one at runtime.
#[derive(Debug, Clone)]
pub struct Pipeline<Pre = NoopPreprocessor> {
    pub preprocessor: Pre,
    pub filter: TokenFilter,
    pub scorer: SentenceScorer,
    pub selector: SentenceSelector,
}

impl Pipeline<NoopPreprocessor> {
    /// Pipeline without preprocessing, using the alphabetic token filter.
    pub fn new() -> Self {
        Self::with_preprocessor(NoopPreprocessor)
    }
}

impl Default for Pipeline<NoopPreprocessor> {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline<CleanupPreprocessor> {
    /// Pipeline that runs the regex cleanup first.
    pub fn with_cleanup() -> Self {
        Self::with_preprocessor(CleanupPreprocessor)
    }
}

impl Pipeline<DynPreprocessor> {
    /// Build a pipeline from resolved settings.
    pub fn from_config(config: &SummarizerConfig) -> Self {
        let preprocessor: DynPreprocessor = if config.cleanup {
            Box::new(CleanupPreprocessor)
        } else {
            Box::new(NoopPreprocessor)
        };
        Self::with_preprocessor(preprocessor).with_filter(config.filter)
    }
}

impl<Pre: Preprocessor> Pipeline<Pre> {
    pub fn with_preprocessor(preprocessor: Pre) -> Self {
        Pipeline {
            preprocessor,
            filter: TokenFilter::default(),
            scorer: SentenceScorer::default(),
            selector: SentenceSelector::default(),
        }
    }

    /// Choose which tokens count towards word frequencies.
    pub fn with_filter(mut self, filter: TokenFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Summarize `text` without observation.
    pub fn summarize<T: Tokenizer>(&self, text: &str, model: &LanguageModel<T>) -> Summary {
        self.run(text, model, &mut NoopObserver)
    }

    /// Execute every stage on `text`.
    ///
    /// Total over all inputs: empty or degenerate text yields an empty
    /// [`Summary`].
    pub fn run<T: Tokenizer>(
        &self,
        text: &str,
        model: &LanguageModel<T>,
        observer: &mut impl PipelineObserver,
    ) -> Summary {
        let prepared = self.prepare(text, observer);
        self.run_prepared(&prepared, model, observer)
    }

    /// Like [`Pipeline::run`], but rejects input that is blank or shorter
    /// than `min_words` after preprocessing.
    pub fn run_checked<T: Tokenizer>(
        &self,
        text: &str,
        model: &LanguageModel<T>,
        min_words: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary, InputError> {
        let prepared = self.prepare(text, observer);
        check_input(&prepared, min_words)?;
        Ok(self.run_prepared(&prepared, model, observer))
    }

    fn prepare<'a>(&self, text: &'a str, observer: &mut impl PipelineObserver) -> Cow<'a, str> {
        trace_stage!(STAGE_PREPROCESS);
        observer.on_stage_start(STAGE_PREPROCESS);
        let clock = StageClock::start();
        let prepared = self.preprocessor.preprocess(text);
        let report = StageReport::new(clock.elapsed()).with_items(prepared.len());
        observer.on_stage_end(STAGE_PREPROCESS, &report);
        prepared
    }

    fn run_prepared<T: Tokenizer>(
        &self,
        text: &str,
        model: &LanguageModel<T>,
        observer: &mut impl PipelineObserver,
    ) -> Summary {
        // Stage 1: Tokenize
        let document = {
            trace_stage!(STAGE_TOKENIZE);
            observer.on_stage_start(STAGE_TOKENIZE);
            let clock = StageClock::start();
            let document = TokenizedDocument::new(text, model);
            tracing::debug!(
                sentences = document.sentences().len(),
                words = document.words().len(),
                "tokenized document"
            );
            let report = StageReport::new(clock.elapsed()).with_items(document.words().len());
            observer.on_stage_end(STAGE_TOKENIZE, &report);
            observer.on_document(&document);
            document
        };

        // Stage 2: Frequency table
        let table = {
            trace_stage!(STAGE_FREQUENCY);
            observer.on_stage_start(STAGE_FREQUENCY);
            let clock = StageClock::start();
            let table = FrequencyTable::build(document.words(), model, self.filter);
            tracing::debug!(
                entries = table.len(),
                filter = self.filter.as_str(),
                "built frequency table"
            );
            let report = StageReport::new(clock.elapsed()).with_items(table.len());
            observer.on_stage_end(STAGE_FREQUENCY, &report);
            observer.on_frequencies(&table);
            table
        };

        // Stage 3: Score sentences
        let scores = {
            trace_stage!(STAGE_SCORE);
            observer.on_stage_start(STAGE_SCORE);
            let clock = StageClock::start();
            let scores = self.scorer.score(document.sentences(), &table, model);
            tracing::debug!(candidates = scores.len(), "scored sentences");
            let report = StageReport::new(clock.elapsed()).with_items(scores.len());
            observer.on_stage_end(STAGE_SCORE, &report);
            observer.on_scores(&scores);
            scores
        };

        // Stage 4: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let summary = self.selector.select(&scores);
        tracing::debug!(selected = summary.len(), "selected summary sentences");
        let report = StageReport::new(clock.elapsed()).with_items(summary.len());
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_summary(&summary);

        summary
    }
}

impl<Pre: Preprocessor + Sync> Pipeline<Pre> {
    /// Summarize several documents in parallel. Results keep input order.
    pub fn run_batch<T, S>(&self, texts: &[S], model: &LanguageModel<T>) -> Vec<Summary>
    where
        T: Tokenizer,
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref(), model))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
