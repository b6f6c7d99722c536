pub mod activation;

pub use activation::{sigmoid, sigmoid_derivative, BIAS_INPUT};
