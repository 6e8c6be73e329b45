//! freqsum CLI - frequency-based extractive summarization
//!
//! ```bash
//! # Summarize a file
//! freqsum summarize article.txt
//!
//! # Read stdin, keep the text as is, count punctuation too
//! cat notes.txt | freqsum summarize --raw --lenient
//!
//! # Several documents at once, JSON output
//! freqsum batch a.txt b.txt --json
//!
//! # Check a config file
//! freqsum check freqsum.json
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use freqsum::pipeline::{
    DynPreprocessor, Severity, StageReport, StageTimingObserver, TracingObserver,
};
use freqsum::{
    InputError, LanguageModel, Pipeline, Summary, SummarizerConfig, SummarizerSpec, TokenFilter,
};

// =============================================================================
// Command Line
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "freqsum", version, about = "Frequency-based extractive summarizer")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Summarize one document (stdin when FILE is omitted)
    Summarize {
        file: Option<PathBuf>,

        #[command(flatten)]
        opts: SummarizeOpts,

        /// Print per-stage timings to stderr
        #[arg(long)]
        timings: bool,
    },

    /// Summarize several documents in parallel
    Batch {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        opts: SummarizeOpts,
    },

    /// Validate a JSON config file and print its diagnostics
    Check { config: PathBuf },
}

#[derive(Debug, Args)]
struct SummarizeOpts {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Count punctuation and numbers as words (stop words are still dropped)
    #[arg(long)]
    lenient: bool,

    /// Skip the regex cleanup of the input
    #[arg(long)]
    raw: bool,

    /// Stop-word language code
    #[arg(long)]
    language: Option<String>,

    /// Minimum number of words accepted
    #[arg(long)]
    min_words: Option<usize>,

    /// Emit JSON instead of plain text
    #[arg(long)]
    json: bool,
}

impl SummarizeOpts {
    /// Config file (or defaults) overlaid with command-line flags.
    fn resolve(&self) -> Result<SummarizerConfig> {
        let mut config = match &self.config {
            Some(path) => SummarizerSpec::from_path(path)?
                .resolve()
                .with_context(|| format!("invalid config {}", path.display()))?,
            None => SummarizerConfig::default(),
        };

        if self.lenient {
            config.filter = TokenFilter::StopwordsOnly;
        }
        if self.raw {
            config.cleanup = false;
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(min_words) = self.min_words {
            anyhow::ensure!(min_words > 0, "--min-words must be greater than 0");
            config.min_words = min_words;
        }
        Ok(config)
    }
}

// =============================================================================
// Output
// =============================================================================

#[derive(Debug, Serialize)]
struct DocumentReport<'a> {
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stages: Vec<StageEntry>,
}

#[derive(Debug, Serialize)]
struct StageEntry {
    stage: &'static str,
    #[serde(flatten)]
    report: StageReport,
}

fn print_outcome(
    source: &str,
    outcome: &std::result::Result<Summary, InputError>,
    stages: Vec<StageEntry>,
    json: bool,
) -> Result<()> {
    if json {
        let report = DocumentReport {
            source: source.to_string(),
            summary: outcome.as_ref().ok(),
            warning: outcome.as_ref().err().map(ToString::to_string),
            stages,
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    match outcome {
        Ok(summary) => println!("{summary}"),
        Err(warning) => eprintln!("warning: {source}: {warning}"),
    }
    Ok(())
}

// =============================================================================
// Commands
// =============================================================================

fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

type Prepared = (SummarizerConfig, Pipeline<DynPreprocessor>, LanguageModel);

fn build(opts: &SummarizeOpts) -> Result<Prepared> {
    let config = opts.resolve()?;
    tracing::debug!(?config, "resolved configuration");
    let pipeline = Pipeline::from_config(&config);
    let model = LanguageModel::new(&config.language);
    Ok((config, pipeline, model))
}

fn cmd_summarize(file: Option<PathBuf>, opts: SummarizeOpts, timings: bool) -> Result<()> {
    let (config, pipeline, model) = build(&opts)?;
    let text = read_document(file.as_deref())?;
    let source = file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());

    let mut observers = (StageTimingObserver::new(), TracingObserver);
    let outcome = pipeline.run_checked(&text, &model, config.min_words, &mut observers);
    let observer = observers.0;

    if timings {
        for (stage, report) in observer.reports() {
            eprintln!("{stage:>10}: {:?}", report.elapsed());
        }
        eprintln!("{:>10}: {:?}", "total", observer.total());
    }

    let stages = if opts.json && timings {
        observer
            .reports()
            .iter()
            .map(|&(stage, report)| StageEntry { stage, report })
            .collect()
    } else {
        Vec::new()
    };
    print_outcome(&source, &outcome, stages, opts.json)
}

fn cmd_batch(files: Vec<PathBuf>, opts: SummarizeOpts) -> Result<()> {
    let (config, pipeline, model) = build(&opts)?;

    let documents = files
        .iter()
        .map(|path| read_document(Some(path)).map(|text| (path, text)))
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(documents = documents.len(), "summarizing batch");
    let outcomes: Vec<_> = documents
        .par_iter()
        .map(|(_, text)| {
            pipeline.run_checked(text, &model, config.min_words, &mut TracingObserver)
        })
        .collect();

    for ((path, _), outcome) in documents.iter().zip(&outcomes) {
        print_outcome(&path.display().to_string(), outcome, Vec::new(), opts.json)?;
    }
    Ok(())
}

fn cmd_check(path: PathBuf) -> Result<()> {
    let spec = SummarizerSpec::from_path(&path)?;
    let report = spec.validate();

    for diagnostic in &report.diagnostics {
        let level = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        eprintln!("{level}: {}", diagnostic.error);
        if let Some(hint) = &diagnostic.error.hint {
            eprintln!("  hint: {hint}");
        }
    }

    anyhow::ensure!(report.is_valid(), "{} is not a valid config", path.display());
    println!("{}: ok", path.display());
    Ok(())
}

// =============================================================================
// Main Entry Point
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Summarize {
            file,
            opts,
            timings,
        } => cmd_summarize(file, opts, timings),
        Commands::Batch { files, opts } => cmd_batch(files, opts),
        Commands::Check { config } => cmd_check(config),
    }
}
