use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::eval::confusion::ConfusionCounts;
use crate::eval::metrics::{MetricPolicy, Metrics};
use crate::network::network::Network;

/// A sigmoid output at or above this value is a positive prediction.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Evaluation options. The decision threshold is fixed at `DEFAULT_THRESHOLD`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EvaluateConfig {
    pub policy: MetricPolicy,
}

impl EvaluateConfig {
    pub fn with_policy(policy: MetricPolicy) -> Self {
        EvaluateConfig { policy }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitReport {
    pub counts: ConfusionCounts,
    pub metrics: Metrics,
}

/// Per-unit and aggregate classification metrics over a test set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub rows: usize,
    pub units: Vec<UnitReport>,
    pub micro: Metrics,
    pub macro_avg: Metrics,
}

/// Tallies confusion counts for every output unit over `dataset`.
///
/// An output is a positive prediction iff it is `>= DEFAULT_THRESHOLD`.
pub fn confusion_counts(network: &Network, dataset: &Dataset) -> Result<Vec<ConfusionCounts>> {
    dataset.check_against(network)?;
    let mut counts = vec![ConfusionCounts::default(); network.output_size()];
    for example in &dataset.examples {
        let outputs = network.predict(&example.features);
        for ((unit, output), target) in counts.iter_mut().zip(outputs.iter()).zip(example.targets.iter()) {
            unit.record(*output >= DEFAULT_THRESHOLD, *target == 1.0);
        }
    }
    Ok(counts)
}

/// Runs the network over `dataset` and derives per-unit, micro and macro metrics.
pub fn evaluate(network: &Network, dataset: &Dataset, config: &EvaluateConfig) -> Result<EvaluationReport> {
    info!(rows = dataset.len(), "Testing...");
    let counts = confusion_counts(network, dataset)?;

    let units = counts
        .iter()
        .enumerate()
        .map(|(k, c)| -> Result<UnitReport> {
            Ok(UnitReport {
                counts: *c,
                metrics: Metrics::from_counts(c, Some(k), config.policy)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let pooled: ConfusionCounts = counts.iter().copied().sum();
    let micro = Metrics::from_counts(&pooled, None, config.policy)?;

    let per_unit: Vec<Metrics> = units.iter().map(|u| u.metrics).collect();
    let macro_avg = Metrics::macro_average(&per_unit, config.policy)?;

    info!("Testing Complete");
    Ok(EvaluationReport {
        rows: dataset.len(),
        units,
        micro,
        macro_avg,
    })
}
