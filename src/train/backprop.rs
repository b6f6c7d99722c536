use crate::activation::sigmoid_derivative;
use crate::network::{ForwardPass, Network};

/// Error terms for one row, one per neuron, in layer order.
#[derive(Debug, Clone, PartialEq)]
pub struct Deltas {
    pub hidden: Vec<f64>,
    pub output: Vec<f64>,
}

/// Computes the error term of every neuron for the row that produced `pass`.
///
/// Output: `δ_j = (t_j - o_j) · o_j(1 - o_j)`.
/// Hidden: `δ_i = a_i(1 - a_i) · Σ_j w_j[i+1] · δ_j`, where `w_j[i+1]` skips
/// the output neuron's bias weight.
pub fn backpropagate(network: &Network, pass: &ForwardPass, targets: &[f64]) -> Deltas {
    debug_assert_eq!(targets.len(), network.output_size());

    let output: Vec<f64> = pass
        .output
        .iter()
        .zip(targets.iter())
        .map(|(&o, &t)| (t - o) * sigmoid_derivative(o))
        .collect();

    let hidden = pass
        .hidden
        .iter()
        .enumerate()
        .map(|(i, &a)| {
            let weighted: f64 = network
                .output
                .neurons
                .iter()
                .zip(output.iter())
                .map(|(neuron, delta)| neuron.weights[i + 1] * delta)
                .sum();
            sigmoid_derivative(a) * weighted
        })
        .collect();

    Deltas { hidden, output }
}
