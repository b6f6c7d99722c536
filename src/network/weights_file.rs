//! Plain-text weight file.
//!
//! ```text
//! n_inputs n_hidden n_outputs
//! <n_hidden rows of n_inputs + 1 floats, bias first>
//! <n_outputs rows of n_hidden + 1 floats, bias first>
//! ```

use std::path::Path;

use tracing::debug;

use crate::data::text::{format_row, numbered_lines, parse_floats, parse_header};
use crate::error::{NetError, Result};
use crate::network::network::Network;

/// Parses weight file text into a validated network.
pub fn parse_network(text: &str) -> Result<Network> {
    let mut lines = numbered_lines(text);
    let (line_no, header) = lines
        .next()
        .ok_or_else(|| NetError::Shape("weight file is empty".into()))?;
    let [n_inputs, n_hidden, n_outputs] = parse_header(header, line_no)?;

    let mut rows = Vec::with_capacity(n_hidden + n_outputs);
    for (line_no, line) in lines {
        rows.push(parse_floats(line, line_no)?);
    }
    if rows.len() != n_hidden + n_outputs {
        return Err(NetError::Shape(format!(
            "header declares {} weight rows, file has {}",
            n_hidden + n_outputs,
            rows.len()
        )));
    }

    let output_init = rows.split_off(n_hidden);
    let network = Network::from_weights(rows, output_init)?;
    if network.input_size() != n_inputs {
        return Err(NetError::Shape(format!(
            "header declares {n_inputs} inputs, hidden rows carry {}",
            network.input_size()
        )));
    }
    Ok(network)
}

/// Renders the network in weight file format, 3 decimals per weight.
pub fn format_network(network: &Network) -> String {
    let mut out = format!(
        "{} {} {}\n",
        network.input_size(),
        network.hidden_size(),
        network.output_size()
    );
    for neuron in network.hidden.neurons.iter().chain(network.output.neurons.iter()) {
        out.push_str(&format_row(&neuron.weights));
        out.push('\n');
    }
    out
}

pub fn load_network<P: AsRef<Path>>(path: P) -> Result<Network> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading weight file");
    parse_network(&std::fs::read_to_string(path)?)
}

pub fn save_network<P: AsRef<Path>>(network: &Network, path: P) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "writing weight file");
    std::fs::write(path, format_network(network))?;
    Ok(())
}
