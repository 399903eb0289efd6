//! Text preprocessing
//!
//! - Normalization (retweet markers, mentions, hashtags, non-letters)
//! - Negation tagging

mod negation;
mod normalizer;

pub use negation::{tag_negation, NegationTagger, DEFAULT_MARKER, NEGATION_CUES};
pub use normalizer::{normalize, TextNormalizer};
