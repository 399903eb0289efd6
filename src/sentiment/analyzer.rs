//! Sentiment analyzer
//!
//! Runs one text through normalize → negation tagging → lexicon scoring →
//! labeling. Holds no per-record state, so records can be scored in any order.

use crate::models::{Record, ScoredRecord, SentimentLabel, SentimentScore};
use crate::nlp::{NegationTagger, TextNormalizer};
use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::scorer::LexiconScorer;
use std::fmt;

/// Every intermediate stage for one text
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub raw: String,
    pub normalized: String,
    pub tagged: String,
    pub score: SentimentScore,
    pub label: SentimentLabel,
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input:      {:?}", self.raw)?;
        writeln!(f, "Normalized: {:?}", self.normalized)?;
        writeln!(f, "Tagged:     {:?}", self.tagged)?;
        writeln!(
            f,
            "Tokens: {} (positive hits: {}, negative hits: {})",
            self.score.token_count, self.score.pos_hits, self.score.neg_hits
        )?;
        writeln!(
            f,
            "Positive: {:.3}  Negative: {:.3}",
            self.score.pos_pct, self.score.neg_pct
        )?;
        write!(f, "Label: {}", self.label)
    }
}

/// Sentiment analyzer
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer<'a> {
    normalizer: TextNormalizer,
    tagger: NegationTagger,
    scorer: LexiconScorer<'a>,
}

impl<'a> SentimentAnalyzer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            tagger: NegationTagger::new(),
            scorer: LexiconScorer::new(lexicon),
        }
    }

    /// Replace the negation tagger
    pub fn with_tagger(mut self, tagger: NegationTagger) -> Self {
        self.tagger = tagger;
        self
    }

    /// Normalize and tag, without scoring
    pub fn clean(&self, raw: &str) -> String {
        self.tagger.tag(&self.normalizer.normalize(raw))
    }

    /// Analyze one text, keeping every stage
    pub fn analyze(&self, raw: &str) -> Analysis {
        let normalized = self.normalizer.normalize(raw);
        let tagged = self.tagger.tag(&normalized);
        let score = self.scorer.score(&tagged);

        Analysis {
            raw: raw.to_string(),
            normalized,
            tagged,
            label: score.label(),
            score,
        }
    }

    /// Score one input row
    pub fn score_record(&self, record: Record) -> ScoredRecord {
        let cleaned_text = self.clean(&record.text);
        let score = self.scorer.score(&cleaned_text);

        ScoredRecord {
            record,
            cleaned_text,
            predicted: score.label(),
            score,
        }
    }

    /// Score many rows
    pub fn score_batch(&self, records: Vec<Record>) -> Vec<ScoredRecord> {
        records.into_iter().map(|r| self.score_record(r)).collect()
    }
}
