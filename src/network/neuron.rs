use serde::{Deserialize, Serialize};

use crate::activation::{sigmoid, BIAS_INPUT};

/// A single sigmoid unit. `weights[0]` is the bias, `weights[i]` pairs with input `i - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub weights: Vec<f64>,
}

impl Neuron {
    pub fn new(weights: Vec<f64>) -> Neuron {
        Neuron { weights }
    }

    /// Number of inputs this neuron consumes (excludes the bias).
    pub fn input_size(&self) -> usize {
        self.weights.len().saturating_sub(1)
    }

    /// Weighted sum `z = BIAS_INPUT * w[0] + Σ w[i] * inputs[i-1]`.
    pub fn pre_activation(&self, inputs: &[f64]) -> f64 {
        debug_assert_eq!(inputs.len(), self.input_size());
        let bias = BIAS_INPUT * self.weights[0];
        self.weights[1..]
            .iter()
            .zip(inputs.iter())
            .fold(bias, |acc, (w, x)| acc + w * x)
    }

    /// `sigmoid(pre_activation(inputs))`.
    pub fn activate(&self, inputs: &[f64]) -> f64 {
        sigmoid(self.pre_activation(inputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn bias_is_subtracted() {
        let neuron = Neuron::new(vec![2.0, 1.0]);
        assert_abs_diff_eq!(neuron.pre_activation(&[3.0]), 1.0);
    }

    #[test]
    fn activate_matches_hand_value() {
        let neuron = Neuron::new(vec![0.1, 0.2, 0.3]);
        // z = -0.1 + 0.2 * 1.0 + 0.3 * 0.0 = 0.1
        assert_abs_diff_eq!(neuron.activate(&[1.0, 0.0]), 0.52497918747894, epsilon = 1e-12);
    }

    #[test]
    fn activate_is_in_open_unit_interval() {
        let neuron = Neuron::new(vec![-3.0, 4.5, -2.25, 0.75]);
        for inputs in [[0.0, 0.0, 0.0], [1.0, -1.0, 2.0], [-4.0, 3.0, 10.0]] {
            let a = neuron.activate(&inputs);
            assert!(a > 0.0 && a < 1.0);
        }
    }
}
