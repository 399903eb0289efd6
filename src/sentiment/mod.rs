//! Sentiment scoring
//!
//! - Lexicon loading (with a degraded empty mode)
//! - Hit counting and percentage scoring
//! - Label assignment and the per-record analyzer

mod analyzer;
mod lexicon;
mod scorer;

pub use analyzer::{Analysis, SentimentAnalyzer};
pub use lexicon::{Lexicon, LexiconStats, LexiconStatus};
pub use scorer::{assign_label, score, LexiconScorer};
