use serde::{Deserialize, Serialize};

use crate::error::{NetError, Result};
use crate::network::neuron::Neuron;

/// An ordered row of sigmoid neurons sharing one input vector.
///
/// Neuron order is positional: hidden neuron `i` is read through weight
/// `i + 1` of every output neuron during backpropagation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    /// Builds a layer from one weight row per neuron (bias first).
    ///
    /// Every row must have the same length, and at least one input besides the bias.
    pub fn from_weights(name: &str, rows: Vec<Vec<f64>>) -> Result<Layer> {
        let width = match rows.first() {
            Some(row) => row.len(),
            None => return Err(NetError::Shape(format!("{name} layer has no neurons"))),
        };
        if width < 2 {
            return Err(NetError::Shape(format!(
                "{name} layer weight rows need a bias and at least one input weight, got length {width}"
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(NetError::Shape(format!(
                "{name} layer neuron {i} has {} weights, expected {width}",
                row.len()
            )));
        }
        Ok(Layer {
            neurons: rows.into_iter().map(Neuron::new).collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Number of inputs each neuron expects (bias excluded).
    pub fn input_size(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::input_size)
    }

    /// Activations of every neuron for `inputs`, in neuron order.
    pub fn feed_from(&self, inputs: &[f64]) -> Vec<f64> {
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }
}
