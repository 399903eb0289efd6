//! Lexicon hit counting

use crate::models::{SentimentLabel, SentimentScore};
use crate::sentiment::lexicon::Lexicon;

/// Counts lexicon hits over whitespace tokens
#[derive(Debug, Clone, Copy)]
pub struct LexiconScorer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> LexiconScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score a cleaned, negation-tagged text. Membership is an exact,
    /// case-sensitive match against the lexicon.
    pub fn score(&self, text: &str) -> SentimentScore {
        let mut token_count = 0;
        let mut pos_hits = 0;
        let mut neg_hits = 0;

        for token in text.split_whitespace() {
            token_count += 1;
            if self.lexicon.is_positive(token) {
                pos_hits += 1;
            }
            if self.lexicon.is_negative(token) {
                neg_hits += 1;
            }
        }

        SentimentScore::from_hits(token_count, pos_hits, neg_hits)
    }
}

/// `(pos_pct, neg_pct)` for a text
pub fn score(text: &str, lexicon: &Lexicon) -> (f64, f64) {
    let score = LexiconScorer::new(lexicon).score(text);
    (score.pos_pct, score.neg_pct)
}

/// Map percentages to a label: ties (including 0/0) are neutral
pub fn assign_label(pos_pct: f64, neg_pct: f64) -> SentimentLabel {
    SentimentLabel::from_percentages(pos_pct, neg_pct)
}
