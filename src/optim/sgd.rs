use crate::activation::BIAS_INPUT;
use crate::layers::dense::Layer;
use crate::network::{ForwardPass, Network};
use crate::train::backprop::Deltas;

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one gradient-descent step for a single row.
    ///
    /// The hidden layer learns from `features`, the output layer from the
    /// hidden activations recorded in `pass` for that same row.
    pub fn step(&self, network: &mut Network, features: &[f64], pass: &ForwardPass, deltas: &Deltas) {
        self.step_layer(&mut network.hidden, features, &deltas.hidden);
        self.step_layer(&mut network.output, &pass.hidden, &deltas.output);
    }

    fn step_layer(&self, layer: &mut Layer, inputs: &[f64], deltas: &[f64]) {
        for (neuron, &delta) in layer.neurons.iter_mut().zip(deltas.iter()) {
            let scale = self.learning_rate * delta;
            for (w, x) in neuron.weights[1..].iter_mut().zip(inputs.iter()) {
                *w += scale * x;
            }
            neuron.weights[0] += scale * BIAS_INPUT;
        }
    }
}
