//! # Tweet sentiment
//!
//! Rule-based sentiment scoring for tweet datasets.
//!
//! ## Modules
//!
//! - `nlp` - Text normalization and negation tagging
//! - `sentiment` - Lexicon loading, scoring and labeling
//! - `evaluation` - Accuracy and weighted F1 against ground truth
//! - `data` - CSV dataset loading and saving
//! - `pipeline` - End-to-end run driven by `AppConfig`
//! - `models` - Data models
//! - `utils` - Configuration and logging
//!
//! ## Example
//!
//! ```
//! use tweet_sentiment::{Lexicon, SentimentAnalyzer, SentimentLabel};
//!
//! let lexicon = Lexicon::new(["love"], ["hate"]);
//! let analyzer = SentimentAnalyzer::new(&lexicon);
//!
//! let analysis = analyzer.analyze("RT @bob: I do not love this #great");
//! assert_eq!(analysis.tagged, "i do not NOT_love this");
//! assert_eq!(analysis.label, SentimentLabel::Neutral);
//! ```

pub mod data;
pub mod evaluation;
pub mod models;
pub mod nlp;
pub mod pipeline;
pub mod sentiment;
pub mod utils;

pub use data::{DataError, Dataset, DatasetLoader, DatasetWriter};
pub use evaluation::{evaluate, ClassificationMetrics, Evaluation, EvaluationError};
pub use models::{LabelDistribution, Record, ScoredRecord, SentimentLabel, SentimentScore};
pub use nlp::{normalize, tag_negation, NegationTagger, TextNormalizer};
pub use pipeline::{run_pipeline, PipelineReport};
pub use sentiment::{assign_label, score, Analysis, Lexicon, LexiconStatus, SentimentAnalyzer};
pub use utils::{AppConfig, ConfigError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
