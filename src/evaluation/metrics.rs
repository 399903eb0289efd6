//! Classification metrics for predicted vs ground-truth labels.
//!
//! Accuracy, per-class precision/recall/F1, macro F1 and support-weighted F1
//! over the union of observed labels.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Errors from the evaluator
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("predicted and actual label sequences differ in length: {predicted} vs {actual}")]
    LengthMismatch { predicted: usize, actual: usize },
}

/// Per-class metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of true instances of the class
    pub support: usize,
}

/// Metrics over all evaluated records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    /// Fraction of exact label matches
    pub accuracy: f64,
    /// Support-weighted mean of per-class F1
    pub weighted_f1: f64,
    /// Unweighted mean of per-class F1
    pub macro_f1: f64,
    /// Metrics per label, keyed and ordered by label
    pub per_class: BTreeMap<String, ClassMetrics>,
    /// `confusion[actual][predicted]` counts
    pub confusion: BTreeMap<String, BTreeMap<String, usize>>,
    /// Number of evaluated records
    pub total: usize,
}

impl ClassificationMetrics {
    /// Per-class table in the style of a classification report
    pub fn report(&self) -> String {
        let mut report = String::new();

        report.push_str(&"=".repeat(60));
        report.push_str("\nSENTIMENT CLASSIFICATION REPORT\n");
        report.push_str(&"=".repeat(60));
        report.push('\n');

        report.push_str(&format!(
            "  {:12} {:>10} {:>10} {:>10} {:>10}\n",
            "label", "precision", "recall", "f1-score", "support"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for (label, m) in &self.per_class {
            report.push_str(&format!(
                "  {:12} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
                label, m.precision, m.recall, m.f1, m.support
            ));
        }

        report.push_str(&"-".repeat(60));
        report.push('\n');
        report.push_str(&format!("  {:12} {:>32.2} {:>10}\n", "accuracy", self.accuracy, self.total));
        report.push_str(&format!("  {:12} {:>32.2} {:>10}\n", "macro f1", self.macro_f1, self.total));
        report.push_str(&format!("  {:12} {:>32.2} {:>10}\n", "weighted f1", self.weighted_f1, self.total));

        report.push_str("\nCONFUSION MATRIX (rows: actual, columns: predicted):\n");
        let labels: Vec<&String> = self.per_class.keys().collect();
        report.push_str(&format!("  {:12}", ""));
        for label in &labels {
            report.push_str(&format!(" {:>10}", label));
        }
        report.push('\n');
        for actual in &labels {
            report.push_str(&format!("  {:12}", actual));
            for predicted in &labels {
                let count = self
                    .confusion
                    .get(*actual)
                    .and_then(|row| row.get(*predicted))
                    .copied()
                    .unwrap_or(0);
                report.push_str(&format!(" {:>10}", count));
            }
            report.push('\n');
        }

        report
    }
}

/// Outcome of an evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Evaluation {
    Computed(ClassificationMetrics),
    NotComputed { reason: String },
}

impl Evaluation {
    pub fn not_computed(reason: impl Into<String>) -> Self {
        Evaluation::NotComputed {
            reason: reason.into(),
        }
    }

    pub fn metrics(&self) -> Option<&ClassificationMetrics> {
        match self {
            Evaluation::Computed(metrics) => Some(metrics),
            Evaluation::NotComputed { .. } => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Evaluation::Computed(_))
    }
}

/// Compare predicted labels with ground truth, aligned by index.
///
/// Pairs whose actual label is blank are left out. When nothing is left the
/// result is [`Evaluation::NotComputed`], not an error.
pub fn evaluate<P, A>(predicted: &[P], actual: &[A]) -> Result<Evaluation, EvaluationError>
where
    P: AsRef<str>,
    A: AsRef<str>,
{
    if predicted.len() != actual.len() {
        return Err(EvaluationError::LengthMismatch {
            predicted: predicted.len(),
            actual: actual.len(),
        });
    }

    let pairs: Vec<(&str, &str)> = predicted
        .iter()
        .zip(actual.iter())
        .map(|(p, a)| (p.as_ref().trim(), a.as_ref().trim()))
        .filter(|(_, a)| !a.is_empty())
        .collect();

    if pairs.is_empty() {
        return Ok(Evaluation::not_computed("no ground-truth labels available"));
    }

    Ok(Evaluation::Computed(compute_metrics(&pairs)))
}

fn compute_metrics(pairs: &[(&str, &str)]) -> ClassificationMetrics {
    let total = pairs.len();

    let correct = pairs.iter().filter(|(p, a)| p == a).count();
    let accuracy = correct as f64 / total as f64;

    let labels: BTreeSet<&str> = pairs.iter().flat_map(|(p, a)| [*p, *a]).collect();

    let mut confusion: BTreeMap<String, BTreeMap<String, usize>> = BTreeMap::new();
    for (p, a) in pairs {
        *confusion
            .entry(a.to_string())
            .or_default()
            .entry(p.to_string())
            .or_insert(0) += 1;
    }

    let mut per_class = BTreeMap::new();
    for &label in &labels {
        let tp = pairs.iter().filter(|(p, a)| *p == label && *a == label).count();
        let fp = pairs.iter().filter(|(p, a)| *p == label && *a != label).count();
        let fn_ = pairs.iter().filter(|(p, a)| *p != label && *a == label).count();

        let precision = if tp + fp > 0 {
            tp as f64 / (tp + fp) as f64
        } else {
            0.0
        };

        let recall = if tp + fn_ > 0 {
            tp as f64 / (tp + fn_) as f64
        } else {
            0.0
        };

        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        per_class.insert(
            label.to_string(),
            ClassMetrics {
                precision,
                recall,
                f1,
                support: tp + fn_,
            },
        );
    }

    let macro_f1 = per_class.values().map(|m| m.f1).sum::<f64>() / per_class.len() as f64;

    // Supports sum to `total`: every kept pair has exactly one actual label.
    let weighted_f1 = per_class
        .values()
        .map(|m| m.f1 * m.support as f64)
        .sum::<f64>()
        / total as f64;

    ClassificationMetrics {
        accuracy,
        weighted_f1,
        macro_f1,
        per_class,
        confusion,
        total,
    }
}
