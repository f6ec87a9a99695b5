//! Numeric transforms for detection decoding.

/// Logistic function, split by sign so the exponential never overflows.
#[inline]
pub(crate) fn sigmoid(value: f32) -> f32 {
    if value >= 0.0 {
        1.0 / (1.0 + (-value).exp())
    } else {
        let e = value.exp();
        e / (1.0 + e)
    }
}

/// Normalizes logits into a probability distribution, in place.
///
/// Subtracts the maximum logit before exponentiating; the normalized result
/// is unchanged and the exponentials stay bounded.
pub(crate) fn softmax_in_place(logits: &mut [f32]) {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let mut sum = 0.0f32;
    for logit in logits.iter_mut() {
        *logit = (*logit - max).exp();
        sum += *logit;
    }
    for weight in logits.iter_mut() {
        *weight /= sum;
    }
}

#[cfg(test)]
mod tests {
    use super::{sigmoid, softmax_in_place};

    #[test]
    fn sigmoid_matches_known_values() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!((sigmoid(2.0) - 0.880_797).abs() < 1e-5);
        assert!((sigmoid(-2.0) - 0.119_203).abs() < 1e-5);
    }

    #[test]
    fn sigmoid_saturates_without_overflow() {
        assert!((sigmoid(100.0) - 1.0).abs() < 1e-6);
        assert!(sigmoid(-100.0) >= 0.0);
        assert!(sigmoid(-100.0) < 1e-6);
    }

    #[test]
    fn softmax_is_uniform_for_equal_logits() {
        let mut logits = [3.0f32; 4];
        softmax_in_place(&mut logits);
        for weight in logits {
            assert!((weight - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn softmax_sums_to_one_and_orders_by_logit() {
        let mut logits = [1.0f32, 3.0, 2.0];
        softmax_in_place(&mut logits);
        let sum: f32 = logits.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(logits[1] > logits[2] && logits[2] > logits[0]);
    }

    #[test]
    fn softmax_is_stable_for_large_logits() {
        let mut logits = [1000.0f32, 999.0, 998.0];
        softmax_in_place(&mut logits);
        let sum: f32 = logits.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(logits.iter().all(|w| w.is_finite()));
    }
}
