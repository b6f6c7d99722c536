use rand::Rng;

use crate::error::{NetError, Result};
use crate::network::network::Network;

/// Builds a network whose weights are drawn uniformly from `[0, 1)`.
///
/// Weights are rounded to 3 decimals so the in-memory network matches what
/// the weight file will hold after saving.
pub fn random_network<R: Rng>(
    n_inputs: usize,
    n_hidden: usize,
    n_outputs: usize,
    rng: &mut R,
) -> Result<Network> {
    if n_inputs == 0 {
        return Err(NetError::Shape("network needs at least one input".into()));
    }
    let mut rows = |count: usize, width: usize| -> Vec<Vec<f64>> {
        (0..count)
            .map(|_| (0..width).map(|_| round3(rng.gen::<f64>())).collect())
            .collect()
    };
    let hidden = rows(n_hidden, n_inputs + 1);
    let output = rows(n_outputs, n_hidden + 1);
    Network::from_weights(hidden, output)
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shapes_follow_arguments() {
        let mut rng = StdRng::seed_from_u64(7);
        let net = random_network(13, 5, 1, &mut rng).unwrap();
        assert_eq!(net.input_size(), 13);
        assert_eq!(net.hidden_size(), 5);
        assert_eq!(net.output_size(), 1);
        assert!(net
            .hidden
            .neurons
            .iter()
            .flat_map(|n| n.weights.iter())
            .all(|w| (0.0..=1.0).contains(w)));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = random_network(3, 4, 2, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = random_network(3, 4, 2, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_hidden_is_a_shape_error() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(random_network(2, 0, 1, &mut rng), Err(NetError::Shape(_))));
    }
}
