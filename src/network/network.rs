use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NetError, Result};
use crate::layers::dense::Layer;

/// Activations produced by one forward pass over a single row.
///
/// Backpropagation and the weight update read these values instead of state
/// cached on the neurons, so a pass can only ever be paired with the row that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    /// Hidden layer activations, in neuron order.
    pub hidden: Vec<f64>,
    /// Output layer activations, in neuron order.
    pub output: Vec<f64>,
}

/// A feed-forward network with exactly one hidden layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub hidden: Layer,
    pub output: Layer,
}

impl Network {
    /// Builds a network from weight rows (bias first) for each layer.
    ///
    /// Fails with `NetError::Shape` if a layer is empty or ragged, or if the
    /// output rows are not `hidden_init.len() + 1` long.
    pub fn from_weights(hidden_init: Vec<Vec<f64>>, output_init: Vec<Vec<f64>>) -> Result<Network> {
        let hidden = Layer::from_weights("hidden", hidden_init)?;
        let output = Layer::from_weights("output", output_init)?;
        let network = Network { hidden, output };
        network.validate()?;
        debug!(
            inputs = network.input_size(),
            hidden = network.hidden_size(),
            outputs = network.output_size(),
            "network constructed"
        );
        Ok(network)
    }

    /// Checks the layer invariants. Used after deserializing a snapshot.
    pub fn validate(&self) -> Result<()> {
        for (name, layer) in [("hidden", &self.hidden), ("output", &self.output)] {
            let rows = layer.neurons.iter().map(|n| n.weights.clone()).collect();
            Layer::from_weights(name, rows)?;
        }
        if self.output.input_size() != self.hidden.size() {
            return Err(NetError::Shape(format!(
                "output neurons have {} weights, expected {} (hidden size + bias)",
                self.output.input_size() + 1,
                self.hidden.size() + 1
            )));
        }
        Ok(())
    }

    pub fn input_size(&self) -> usize {
        self.hidden.input_size()
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden.size()
    }

    pub fn output_size(&self) -> usize {
        self.output.size()
    }

    /// Forward pass for one row. Pure: calling it twice yields identical activations.
    ///
    /// `features` must hold exactly `input_size()` values; width is only
    /// debug-asserted here. `train_step`, `train_loop` and `evaluate` check it
    /// up front, direct callers should use `Dataset::check_against`.
    pub fn forward(&self, features: &[f64]) -> ForwardPass {
        debug_assert_eq!(features.len(), self.input_size());
        let hidden = self.hidden.feed_from(features);
        let output = self.output.feed_from(&hidden);
        ForwardPass { hidden, output }
    }

    /// Output layer activations only.
    pub fn predict(&self, features: &[f64]) -> Vec<f64> {
        self.forward(features).output
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a network written by `save_json`.
    pub fn load_json(path: &str) -> Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let network: Network = serde_json::from_reader(reader)?;
        network.validate()?;
        Ok(network)
    }
}
