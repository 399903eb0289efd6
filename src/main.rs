//! CLI for lexicon-based tweet sentiment scoring
//!
//! Usage:
//! ```bash
//! tweet_sentiment run --input tweets.csv --positive positive-words.txt --negative negative-words.txt
//! tweet_sentiment analyze --text "I do not love this"
//! tweet_sentiment evaluate --input sentiment_analysis_results.csv
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;
use tweet_sentiment::{
    data::{DatasetLoader, SENTIMENT_COLUMN},
    evaluate,
    pipeline::{load_lexicon, run_pipeline},
    utils::{load_config, setup_logging, AppConfig},
    Evaluation, SentimentAnalyzer,
};

#[derive(Parser)]
#[command(name = "tweet_sentiment")]
#[command(version)]
#[command(about = "Lexicon-based sentiment scoring for tweet datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,
}

/// Lexicon overrides shared by `run` and `analyze`
#[derive(clap::Args)]
struct LexiconArgs {
    /// Positive word list
    #[arg(long)]
    positive: Option<PathBuf>,

    /// Negative word list
    #[arg(long)]
    negative: Option<PathBuf>,

    /// Lowercase lexicon entries on load
    #[arg(long)]
    lowercase_lexicon: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a CSV dataset and evaluate against its `sentiment` column
    Run {
        /// Input CSV with a `text` column
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output CSV
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        lexicon: LexiconArgs,

        /// Print the per-class classification report
        #[arg(long)]
        report: bool,

        /// Write evaluation metrics as JSON
        #[arg(long)]
        metrics_json: Option<PathBuf>,
    },

    /// Show every pipeline stage for a single text
    Analyze {
        /// Text to analyze
        #[arg(short, long)]
        text: String,

        #[command(flatten)]
        lexicon: LexiconArgs,
    },

    /// Evaluate an already scored CSV
    Evaluate {
        /// Scored CSV
        #[arg(short, long)]
        input: PathBuf,

        /// Column with predicted labels
        #[arg(long, default_value = "predicted_sentiment_score")]
        predicted_column: String,

        /// Column with ground-truth labels
        #[arg(long, default_value = SENTIMENT_COLUMN)]
        actual_column: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path).with_context(|| format!("Failed to load config {path:?}"))?,
        None => AppConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    setup_logging(&config.logging.level);

    match cli.command {
        Commands::Run {
            input,
            output,
            lexicon,
            report,
            metrics_json,
        } => {
            if let Some(input) = input {
                config.data.input = input;
            }
            if let Some(output) = output {
                config.data.output = output;
            }
            apply_lexicon_args(&mut config, lexicon);
            run_score(&config, report, metrics_json)?;
        }
        Commands::Analyze { text, lexicon } => {
            apply_lexicon_args(&mut config, lexicon);
            run_analyze(&config, &text);
        }
        Commands::Evaluate {
            input,
            predicted_column,
            actual_column,
        } => {
            run_evaluate(&input, &predicted_column, &actual_column)?;
        }
    }

    Ok(())
}

fn apply_lexicon_args(config: &mut AppConfig, args: LexiconArgs) {
    if let Some(positive) = args.positive {
        config.lexicon.positive = positive;
    }
    if let Some(negative) = args.negative {
        config.lexicon.negative = negative;
    }
    if args.lowercase_lexicon {
        config.lexicon.lowercase = true;
    }
}

fn run_score(config: &AppConfig, report: bool, metrics_json: Option<PathBuf>) -> Result<()> {
    let result = run_pipeline(config)?;

    println!("\n{}", result.distribution);
    if result.lexicon_status.is_degraded() {
        println!("Lexicon: {} - every tweet is neutral", result.lexicon_status);
    }
    if result.skipped_rows > 0 {
        println!("Skipped {} malformed rows", result.skipped_rows);
    }

    print_evaluation(&result.evaluation, report);

    if let Some(path) = metrics_json {
        let file = File::create(&path).with_context(|| format!("Failed to create {path:?}"))?;
        serde_json::to_writer_pretty(file, &result.evaluation)?;
        info!("Metrics written to {}", path.display());
    }

    println!("\nResults saved to: {}", result.output.display());
    Ok(())
}

fn run_analyze(config: &AppConfig, text: &str) {
    let lexicon = load_lexicon(config);
    let analyzer = SentimentAnalyzer::new(&lexicon);

    println!("\n{}", analyzer.analyze(text));
}

fn run_evaluate(input: &Path, predicted_column: &str, actual_column: &str) -> Result<()> {
    let dataset = DatasetLoader::load(input)?;

    for column in [predicted_column, actual_column] {
        if !dataset.has_column(column) {
            bail!("Column '{column}' not found in {}", input.display());
        }
    }

    let predicted: Vec<&str> = dataset
        .records
        .iter()
        .map(|r| r.field(predicted_column).unwrap_or_default())
        .collect();
    let actual: Vec<&str> = dataset
        .records
        .iter()
        .map(|r| r.field(actual_column).unwrap_or_default())
        .collect();

    print_evaluation(&evaluate(&predicted, &actual)?, true);
    Ok(())
}

fn print_evaluation(evaluation: &Evaluation, report: bool) {
    match evaluation {
        Evaluation::Computed(metrics) => {
            println!("\nAccuracy: {:.2}", metrics.accuracy);
            println!("F1 Score: {:.2}", metrics.weighted_f1);
            if report {
                println!("\n{}", metrics.report());
            }
        }
        Evaluation::NotComputed { reason } => {
            println!("\nAccuracy & F1 Score not computed: {reason}");
        }
    }
}
