use crate::error::{NetError, Result};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — full passes over the training data; `0` trains nothing
/// - `learning_rate` — gradient-descent step size, finite and positive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig { epochs, learning_rate }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(NetError::Config(format!(
                "learning rate must be a positive number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learning_rate_must_be_positive() {
        assert!(TrainConfig::new(10, 0.1).validate().is_ok());
        assert!(TrainConfig::new(0, 0.1).validate().is_ok());
        assert!(matches!(TrainConfig::new(10, 0.0).validate(), Err(NetError::Config(_))));
        assert!(matches!(TrainConfig::new(10, -1.0).validate(), Err(NetError::Config(_))));
        assert!(matches!(TrainConfig::new(10, f64::NAN).validate(), Err(NetError::Config(_))));
    }
}
