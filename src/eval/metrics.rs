use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{NetError, Result};
use crate::eval::confusion::ConfusionCounts;

/// What to do when a ratio has a zero denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricPolicy {
    /// Fail with `NetError::DegenerateMetric`.
    Abort,
    /// Record the metric (and anything derived from it) as undefined.
    #[default]
    ReportUndefined,
}

/// Accuracy, precision, recall and F1. `None` means undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub accuracy: Option<f64>,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1: Option<f64>,
}

impl Metrics {
    /// Metrics for one set of counts. `unit` is `None` for the micro aggregate.
    pub fn from_counts(counts: &ConfusionCounts, unit: Option<usize>, policy: MetricPolicy) -> Result<Metrics> {
        let ConfusionCounts { a, b, c, d } = *counts;
        let guard = Guard { unit, policy };

        let accuracy = guard.ratio("accuracy", (a + d) as f64, counts.total() as f64)?;
        let precision = guard.ratio("precision", a as f64, (a + b) as f64)?;
        let recall = guard.ratio("recall", a as f64, (a + c) as f64)?;
        let f1 = guard.f1(precision, recall)?;

        Ok(Metrics { accuracy, precision, recall, f1 })
    }

    /// Macro aggregate: mean accuracy, precision and recall across units, with
    /// F1 derived from the mean precision and recall.
    pub fn macro_average(units: &[Metrics], policy: MetricPolicy) -> Result<Metrics> {
        let guard = Guard { unit: None, policy };
        let accuracy = mean(units.iter().map(|m| m.accuracy));
        let precision = mean(units.iter().map(|m| m.precision));
        let recall = mean(units.iter().map(|m| m.recall));
        let f1 = guard.f1(precision, recall)?;
        Ok(Metrics { accuracy, precision, recall, f1 })
    }
}

struct Guard {
    unit: Option<usize>,
    policy: MetricPolicy,
}

impl Guard {
    fn ratio(&self, metric: &'static str, numerator: f64, denominator: f64) -> Result<Option<f64>> {
        if denominator != 0.0 {
            return Ok(Some(numerator / denominator));
        }
        match self.policy {
            MetricPolicy::Abort => Err(NetError::DegenerateMetric { metric, unit: self.unit }),
            MetricPolicy::ReportUndefined => {
                warn!(metric, unit = ?self.unit, "metric undefined: zero denominator");
                Ok(None)
            }
        }
    }

    fn f1(&self, precision: Option<f64>, recall: Option<f64>) -> Result<Option<f64>> {
        match (precision, recall) {
            (Some(p), Some(r)) => self.ratio("F1", 2.0 * p * r, p + r),
            _ => Ok(None),
        }
    }
}

/// Mean of the values, or `None` if any is undefined or there are none.
fn mean<I: Iterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    let values: Option<Vec<f64>> = values.collect();
    let values = values?;
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
