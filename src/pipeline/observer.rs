//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Every hook has an empty default, so an observer only
//! implements what it needs.

use std::time::{Duration, Instant};

use serde::Serialize;

use super::artifacts::{Summary, TokenizedDocument};
use crate::summarizer::{FrequencyTable, SentenceScores};

pub const STAGE_PREPROCESS: &str = "preprocess";
pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_FREQUENCY: &str = "frequency";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";

/// Stage names in execution order.
pub const STAGES: [&str; 5] = [
    STAGE_PREPROCESS,
    STAGE_TOKENIZE,
    STAGE_FREQUENCY,
    STAGE_SCORE,
    STAGE_SELECT,
];

/// Wall-clock timer for one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Measurements for a completed stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageReport {
    elapsed_us: u64,
    /// Size of the stage's output (words, table entries, sentences)
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            items: None,
        }
    }

    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_micros(self.elapsed_us)
    }

    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Receives callbacks while a pipeline runs.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_document(&mut self, _document: &TokenizedDocument<'_>) {}

    fn on_frequencies(&mut self, _table: &FrequencyTable) {}

    fn on_scores(&mut self, _scores: &SentenceScores) {}

    fn on_summary(&mut self, _summary: &Summary) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Records a [`StageReport`] for every stage, in execution order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}

/// Emits a `tracing` debug event per finished stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        tracing::debug!(
            stage,
            elapsed_us = report.elapsed_us,
            items = report.items,
            "stage finished"
        );
    }

    fn on_frequencies(&mut self, table: &FrequencyTable) {
        tracing::trace!(top = ?table.top_n(5), "most frequent words");
    }
}

/// Forwards every hook to both observers, left first.
impl<A: PipelineObserver, B: PipelineObserver> PipelineObserver for (A, B) {
    fn on_stage_start(&mut self, stage: &'static str) {
        self.0.on_stage_start(stage);
        self.1.on_stage_start(stage);
    }

    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.0.on_stage_end(stage, report);
        self.1.on_stage_end(stage, report);
    }

    fn on_document(&mut self, document: &TokenizedDocument<'_>) {
        self.0.on_document(document);
        self.1.on_document(document);
    }

    fn on_frequencies(&mut self, table: &FrequencyTable) {
        self.0.on_frequencies(table);
        self.1.on_frequencies(table);
    }

    fn on_scores(&mut self, scores: &SentenceScores) {
        self.0.on_scores(scores);
        self.1.on_scores(scores);
    }

    fn on_summary(&mut self, summary: &Summary) {
        self.0.on_summary(summary);
        self.1.on_summary(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_items() {
        let report = StageReport::new(Duration::from_micros(1500)).with_items(7);

        assert_eq!(report.items(), Some(7));
        assert_eq!(report.elapsed(), Duration::from_micros(1500));
    }

    #[test]
    fn test_report_serialization_skips_missing_items() {
        let json = serde_json::to_value(StageReport::new(Duration::from_micros(3))).unwrap();

        assert_eq!(json["elapsed_us"], 3);
        assert!(json.get("items").is_none());
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_TOKENIZE, &StageReport::new(Duration::from_micros(10)));
        obs.on_stage_end(STAGE_SCORE, &StageReport::new(Duration::from_micros(5)));

        let names: Vec<_> = obs.reports().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec![STAGE_TOKENIZE, STAGE_SCORE]);
        assert_eq!(obs.total(), Duration::from_micros(15));
    }

    #[test]
    fn test_paired_observers_both_receive_stages() {
        let mut pair = (StageTimingObserver::new(), StageTimingObserver::new());
        pair.on_stage_start(STAGE_FREQUENCY);
        pair.on_stage_end(STAGE_FREQUENCY, &StageReport::new(Duration::from_micros(4)));

        assert_eq!(pair.0.reports().len(), 1);
        assert_eq!(pair.1.reports().len(), 1);
        assert_eq!(pair.1.reports()[0].0, STAGE_FREQUENCY);
    }

    #[test]
    fn test_timing_paired_with_tracing() {
        let mut pair = (StageTimingObserver::new(), TracingObserver);
        for stage in STAGES {
            pair.on_stage_end(stage, &StageReport::new(Duration::from_micros(1)));
        }

        assert_eq!(pair.0.reports().len(), STAGES.len());
    }
}
