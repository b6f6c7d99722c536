use std::time::Instant;

use tracing::info;

use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_network;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` in place for `config.epochs` epochs and returns one
/// `EpochStats` per epoch.
///
/// Rows are visited in dataset order every epoch with a weight update after
/// each row. The epoch error is reported only; it never stops training early.
///
/// # Errors
/// `NetError::Config` for an invalid learning rate, `NetError::Shape` if the
/// dataset does not fit the network. Both are raised before any update.
pub fn train_loop(network: &mut Network, dataset: &Dataset, config: &TrainConfig) -> Result<Vec<EpochStats>> {
    config.validate()?;
    dataset.check_against(network)?;

    info!(
        "Training for {} epochs with a learning rate of {}",
        config.epochs, config.learning_rate
    );

    let optimizer = Sgd::new(config.learning_rate);
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();
        let error_sum = train_network(network, &dataset.examples, &optimizer)?;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        info!("Epoch: {}/{}, error = {:.3}", epoch, config.epochs, error_sum);

        history.push(EpochStats {
            epoch,
            total_epochs: config.epochs,
            error_sum,
            elapsed_ms,
        });
    }

    info!("Training Complete");
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Example;
    use crate::error::NetError;

    fn xor() -> Dataset {
        let rows = [([0.0, 0.0], 0.0), ([0.0, 1.0], 1.0), ([1.0, 0.0], 1.0), ([1.0, 1.0], 0.0)];
        let examples = rows
            .iter()
            .map(|(f, t)| Example { features: f.to_vec(), targets: vec![*t] })
            .collect();
        Dataset::new(examples, 2, 1).unwrap()
    }

    fn net() -> Network {
        Network::from_weights(
            vec![vec![0.5, 0.9, 0.4], vec![0.1, 0.3, 0.8]],
            vec![vec![0.2, 0.6, 0.7]],
        )
        .unwrap()
    }

    #[test]
    fn runs_every_requested_epoch() {
        let mut network = net();
        let history = train_loop(&mut network, &xor(), &TrainConfig::new(25, 0.5)).unwrap();
        assert_eq!(history.len(), 25);
        assert_eq!(history[0].epoch, 1);
        assert_eq!(history[24].total_epochs, 25);
    }

    #[test]
    fn zero_epochs_leaves_network_untouched() {
        let mut network = net();
        let history = train_loop(&mut network, &xor(), &TrainConfig::new(0, 0.5)).unwrap();
        assert!(history.is_empty());
        assert_eq!(network, net());
    }

    #[test]
    fn training_is_deterministic() {
        let (mut a, mut b) = (net(), net());
        let ha = train_loop(&mut a, &xor(), &TrainConfig::new(10, 0.3)).unwrap();
        let hb = train_loop(&mut b, &xor(), &TrainConfig::new(10, 0.3)).unwrap();
        assert_eq!(a, b);
        let errors = |h: &[EpochStats]| h.iter().map(|s| s.error_sum).collect::<Vec<_>>();
        assert_eq!(errors(&ha), errors(&hb));
    }

    #[test]
    fn mismatched_dataset_is_rejected_before_training() {
        let mut network = net();
        let wide = Dataset::new(vec![Example { features: vec![1.0; 3], targets: vec![1.0] }], 3, 1).unwrap();
        let err = train_loop(&mut network, &wide, &TrainConfig::new(5, 0.5));
        assert!(matches!(err, Err(NetError::Shape(_))));
        assert_eq!(network, net());
    }
}
