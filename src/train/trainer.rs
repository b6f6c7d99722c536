use crate::{
    data::dataset::Example,
    error::{NetError, Result},
    network::network::Network,
    optim::sgd::Sgd,
    train::backprop::backpropagate,
};

/// Trains on a single row: forward, backpropagate, update.
///
/// Returns the row's squared error `Σ (t_k - o_k)²`, measured before the update.
/// Fails with `NetError::Shape`, leaving the network untouched, if the row does
/// not match the network's input and output widths.
pub fn train_step(network: &mut Network, example: &Example, optimizer: &Sgd) -> Result<f64> {
    if example.features.len() != network.input_size() || example.targets.len() != network.output_size() {
        return Err(NetError::Shape(format!(
            "row has {} features and {} targets, network expects {} and {}",
            example.features.len(),
            example.targets.len(),
            network.input_size(),
            network.output_size()
        )));
    }

    let pass = network.forward(&example.features);

    let squared_error: f64 = pass
        .output
        .iter()
        .zip(example.targets.iter())
        .map(|(o, t)| (t - o).powi(2))
        .sum();

    let deltas = backpropagate(network, &pass, &example.targets);
    optimizer.step(network, &example.features, &pass, &deltas);

    Ok(squared_error)
}

/// One online pass over `examples` in order, updating after every row.
///
/// Returns the summed squared error of the pass. Stops at the first row whose
/// width does not fit the network.
pub fn train_network(network: &mut Network, examples: &[Example], optimizer: &Sgd) -> Result<f64> {
    examples
        .iter()
        .map(|example| train_step(network, example, optimizer))
        .sum()
}
