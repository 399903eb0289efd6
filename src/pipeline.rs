//! End-to-end scoring run
//!
//! load → drop `user` → load lexicons → score → evaluate → write

use crate::data::{DatasetLoader, DatasetWriter, SENTIMENT_COLUMN, USER_COLUMN};
use crate::evaluation::{evaluate, Evaluation};
use crate::models::{LabelDistribution, ScoredRecord};
use crate::sentiment::{Lexicon, LexiconStatus, SentimentAnalyzer};
use crate::utils::AppConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub records: Vec<ScoredRecord>,
    pub evaluation: Evaluation,
    pub distribution: LabelDistribution,
    pub lexicon_status: LexiconStatus,
    /// Malformed input rows skipped by the loader
    pub skipped_rows: usize,
    /// Whether a `user` column was dropped
    pub dropped_user: bool,
    pub output: PathBuf,
}

/// Load the lexicon pair named by the configuration
pub fn load_lexicon(config: &AppConfig) -> Lexicon {
    Lexicon::from_files(
        &config.lexicon.positive,
        &config.lexicon.negative,
        config.lexicon.lowercase,
    )
}

/// Run the whole pipeline. A dataset load failure aborts before any other
/// stage; a lexicon load failure only degrades scoring.
pub fn run_pipeline(config: &AppConfig) -> Result<PipelineReport> {
    info!("Loading dataset: {}", config.data.input.display());
    let mut dataset = DatasetLoader::load(&config.data.input)
        .with_context(|| format!("Error loading dataset {:?}", config.data.input))?;

    let (rows, columns) = dataset.shape();
    info!(rows, columns, "Dataset shape (before preprocessing)");

    let dropped_user = dataset.drop_column(USER_COLUMN);
    if dropped_user {
        info!("Dropped '{USER_COLUMN}' column");
    }

    let lexicon = load_lexicon(config);
    let analyzer = SentimentAnalyzer::new(&lexicon);

    info!("Scoring {} tweets...", dataset.len());
    let headers = dataset.headers.clone();
    let has_ground_truth = dataset.has_column(SENTIMENT_COLUMN);
    let skipped_rows = dataset.skipped_rows;
    let records = analyzer.score_batch(dataset.records);

    let distribution = LabelDistribution::from_records(&records);
    info!("{distribution}");

    let evaluation = if has_ground_truth {
        let predicted: Vec<&str> = records.iter().map(|r| r.predicted.as_str()).collect();
        let actual: Vec<&str> = records.iter().map(|r| r.actual().unwrap_or_default()).collect();
        evaluate(&predicted, &actual)?
    } else {
        Evaluation::not_computed(format!("'{SENTIMENT_COLUMN}' column not found"))
    };

    match &evaluation {
        Evaluation::Computed(metrics) => {
            info!(
                accuracy = metrics.accuracy,
                f1 = metrics.weighted_f1,
                evaluated = metrics.total,
                "Evaluation complete"
            );
        }
        Evaluation::NotComputed { reason } => {
            info!("Cannot compute Accuracy & F1 Score: {reason}");
        }
    }

    DatasetWriter::write(&config.data.output, &headers, &records)
        .with_context(|| format!("Error writing results to {:?}", config.data.output))?;
    debug!(rows = records.len(), "Results written");
    info!("Sentiment analysis completed! Results saved to: {}", config.data.output.display());

    Ok(PipelineReport {
        records,
        evaluation,
        distribution,
        lexicon_status: lexicon.status().clone(),
        skipped_rows,
        dropped_user,
        output: config.data.output.clone(),
    })
}
