/// Input value paired with `weights[0]` of every neuron.
///
/// The bias weight is subtracted during activation (`z = -w[0] + ...`), which
/// is the same as treating it as an ordinary weight on a constant input of
/// `-1.0`. Both the forward pass and the weight update read this constant so
/// the two cannot disagree.
pub const BIAS_INPUT: f64 = -1.0;

/// Beyond this magnitude `exp(-z)` leaves the finite `f64` range.
const SATURATION_LIMIT: f64 = 709.0;

/// Logistic sigmoid `1 / (1 + e^-z)`.
///
/// In `f64` the result already rounds to exactly `1.0` for `z >= ~37` and
/// underflows toward `0.0` for very negative `z`; the open interval `(0, 1)`
/// only holds for moderate `|z|`. Beyond `|z| > 709`, where `e^-z` would
/// overflow, the value is pinned to `0.0` / `1.0` explicitly.
pub fn sigmoid(z: f64) -> f64 {
    if z > SATURATION_LIMIT {
        1.0
    } else if z < -SATURATION_LIMIT {
        0.0
    } else {
        1.0 / (1.0 + (-z).exp())
    }
}

/// Sigmoid derivative expressed through the activation `a = sigmoid(z)`.
pub fn sigmoid_derivative(activation: f64) -> f64 {
    activation * (1.0 - activation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sigmoid_at_zero_is_half() {
        assert_abs_diff_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn sigmoid_stays_in_open_interval() {
        for z in [-30.0, -5.0, -0.1, 0.0, 0.1, 5.0, 30.0] {
            let a = sigmoid(z);
            assert!(a > 0.0 && a < 1.0, "sigmoid({z}) = {a}");
        }
    }

    #[test]
    fn sigmoid_rounds_to_one_before_overflow_guard() {
        assert_eq!(sigmoid(37.0), 1.0);
        assert!(sigmoid(30.0) < 1.0);
        assert!(sigmoid(-37.0) > 0.0);
    }

    #[test]
    fn sigmoid_saturates_without_overflow() {
        assert_eq!(sigmoid(1e6), 1.0);
        assert_eq!(sigmoid(-1e6), 0.0);
        assert!(sigmoid(-709.0).is_finite());
    }

    #[test]
    fn derivative_peaks_at_half() {
        assert_abs_diff_eq!(sigmoid_derivative(0.5), 0.25);
        assert_abs_diff_eq!(sigmoid_derivative(1.0), 0.0);
    }
}
