pub mod init;
pub mod network;
pub mod neuron;
pub mod weights_file;

pub use init::random_network;
pub use network::{ForwardPass, Network};
pub use neuron::Neuron;
pub use weights_file::{format_network, load_network, parse_network, save_network};
