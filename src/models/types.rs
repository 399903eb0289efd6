//! Data types shared by the scoring pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One input row of the tweet dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Raw tweet text (empty when the field was missing)
    pub text: String,
    /// Ground-truth label, if the dataset carries a `sentiment` column
    pub sentiment: Option<String>,
    /// Remaining columns in input order, `text` excluded
    pub fields: Vec<(String, String)>,
}

impl Record {
    /// Record with text only
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sentiment: None,
            fields: Vec::new(),
        }
    }

    /// Attach a ground-truth label
    pub fn with_sentiment(mut self, sentiment: impl Into<String>) -> Self {
        self.sentiment = Some(sentiment.into());
        self
    }

    /// Value of an extra column, if present
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Ternary sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Positive sentiment
    Positive,
    /// Neutral sentiment
    Neutral,
    /// Negative sentiment
    Negative,
}

impl SentimentLabel {
    /// Assign a label from positive/negative percentages.
    ///
    /// Order matters: equality is checked first, so both the empty case
    /// `(0, 0)` and genuine ties are neutral.
    pub fn from_percentages(pos_pct: f64, neg_pct: f64) -> Self {
        if pos_pct == neg_pct {
            SentimentLabel::Neutral
        } else if pos_pct > neg_pct {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }

    pub fn all() -> [SentimentLabel; 3] {
        [
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Negative,
        ]
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            other => Err(format!("unknown sentiment label: {other}")),
        }
    }
}

/// Lexicon hits for one text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Number of whitespace tokens
    pub token_count: usize,
    /// Tokens found in the positive lexicon
    pub pos_hits: usize,
    /// Tokens found in the negative lexicon
    pub neg_hits: usize,
    /// `pos_hits / token_count`, 0 for an empty text
    pub pos_pct: f64,
    /// `neg_hits / token_count`, 0 for an empty text
    pub neg_pct: f64,
}

impl SentimentScore {
    pub fn from_hits(token_count: usize, pos_hits: usize, neg_hits: usize) -> Self {
        let ratio = |hits: usize| {
            if token_count > 0 {
                hits as f64 / token_count as f64
            } else {
                0.0
            }
        };

        Self {
            token_count,
            pos_hits,
            neg_hits,
            pos_pct: ratio(pos_hits),
            neg_pct: ratio(neg_hits),
        }
    }

    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_percentages(self.pos_pct, self.neg_pct)
    }
}

/// A record with its derived sentiment fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// The input row
    pub record: Record,
    /// Normalized and negation-tagged text
    pub cleaned_text: String,
    /// Hit counts and percentages
    pub score: SentimentScore,
    /// Predicted label
    pub predicted: SentimentLabel,
}

impl ScoredRecord {
    /// Output column `tweet_len`
    pub fn tweet_len(&self) -> usize {
        self.score.token_count
    }

    pub fn pos_percentage(&self) -> f64 {
        self.score.pos_pct
    }

    pub fn neg_percentage(&self) -> f64 {
        self.score.neg_pct
    }

    /// Ground-truth label, if any
    pub fn actual(&self) -> Option<&str> {
        self.record.sentiment.as_deref()
    }
}

/// Number of records per predicted label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl LabelDistribution {
    pub fn from_records(records: &[ScoredRecord]) -> Self {
        let mut distribution = Self::default();
        for record in records {
            match record.predicted {
                SentimentLabel::Positive => distribution.positive += 1,
                SentimentLabel::Neutral => distribution.neutral += 1,
                SentimentLabel::Negative => distribution.negative += 1,
            }
        }
        distribution
    }

    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

impl fmt::Display for LabelDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scored: {} texts ({} positive, {} negative, {} neutral)",
            self.total(),
            self.positive,
            self.negative,
            self.neutral
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_tie_break() {
        assert_eq!(SentimentLabel::from_percentages(0.0, 0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_percentages(0.3, 0.3), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_percentages(0.5, 0.2), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_percentages(0.1, 0.4), SentimentLabel::Negative);
    }

    #[test]
    fn test_label_round_trips_through_str() {
        for label in SentimentLabel::all() {
            assert_eq!(label.as_str().parse::<SentimentLabel>(), Ok(label));
        }
        assert!("Positive".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn test_score_from_zero_tokens() {
        let score = SentimentScore::from_hits(0, 0, 0);
        assert_eq!(score.pos_pct, 0.0);
        assert_eq!(score.neg_pct, 0.0);
        assert_eq!(score.label(), SentimentLabel::Neutral);
    }

    #[test]
    fn test_score_percentages() {
        let score = SentimentScore::from_hits(4, 1, 2);
        assert_eq!(score.pos_pct, 0.25);
        assert_eq!(score.neg_pct, 0.5);
        assert_eq!(score.label(), SentimentLabel::Negative);
    }

    #[test]
    fn test_record_fields() {
        let record = Record {
            text: "hello".to_string(),
            sentiment: None,
            fields: vec![("date".to_string(), "2020-01-01".to_string())],
        };
        assert_eq!(record.field("date"), Some("2020-01-01"));
        assert_eq!(record.field("user"), None);
    }
}
