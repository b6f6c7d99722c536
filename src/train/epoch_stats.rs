use serde::{Deserialize, Serialize};

/// Per-epoch training statistics emitted by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Sum over rows and output units of `(target - output)²`, measured
    /// before each row's weight update.
    pub error_sum: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
