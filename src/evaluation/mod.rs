//! Evaluation of predicted labels against ground truth

mod metrics;

pub use metrics::{evaluate, ClassMetrics, ClassificationMetrics, Evaluation, EvaluationError};
