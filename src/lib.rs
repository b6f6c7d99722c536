pub mod activation;
pub mod data;
pub mod error;
pub mod eval;
pub mod layers;
pub mod network;
pub mod optim;
pub mod prep;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_derivative, BIAS_INPUT};
pub use data::{Dataset, Example};
pub use error::{NetError, Result};
pub use eval::{evaluate, EvaluateConfig, EvaluationReport, MetricPolicy, Metrics};
pub use layers::dense::Layer;
pub use network::{ForwardPass, Network, Neuron};
pub use optim::sgd::Sgd;
pub use train::{backpropagate, train_loop, train_network, train_step, Deltas, EpochStats, TrainConfig};
