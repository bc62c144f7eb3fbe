//! Convergence metrics for system identification

/// Floor added before taking the logarithm, bounds dB values at -400 dB
pub const DB_FLOOR: f64 = 1e-40;

/// Power ratio in dB: 10 * log10(floor + value)
#[inline]
pub fn to_db(value: f64, floor: f64) -> f64 {
    10.0 * (floor + value).log10()
}

/// Squared estimation error (d - y)²
#[inline]
pub fn squared_error(desired: f64, output: f64) -> f64 {
    let error = desired - output;
    error * error
}

/// Normalized weight misalignment ||w* - w||² / ||w*||²
///
/// Falls back to the unnormalized distance when the target has zero energy.
/// Extra entries in the longer slice are ignored.
pub fn misalignment(target: &[f64], estimate: &[f64]) -> f64 {
    let mut diff_norm = 0.0;
    let mut target_norm = 0.0;

    for (t, w) in target.iter().zip(estimate.iter()) {
        let difference = t - w;
        diff_norm += difference * difference;
        target_norm += t * t;
    }

    if target_norm == 0.0 {
        diff_norm
    } else {
        diff_norm / target_norm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_db() {
        assert!((to_db(1.0, 0.0) - 0.0).abs() < 1e-12);
        assert!((to_db(0.01, 0.0) + 20.0).abs() < 1e-9);
        // Floor keeps zero finite
        assert!((to_db(0.0, DB_FLOOR) + 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_squared_error() {
        assert_eq!(squared_error(1.5, 0.5), 1.0);
        assert_eq!(squared_error(-2.0, 1.0), 9.0);
    }

    #[test]
    fn test_misalignment() {
        let target = [1.0, -1.0, 0.5];

        assert_eq!(misalignment(&target, &target), 0.0);
        // Zero estimate has misalignment 1 (0 dB)
        assert!((misalignment(&target, &[0.0; 3]) - 1.0).abs() < 1e-12);

        let estimate = [1.0, -1.0, 0.0];
        assert!((misalignment(&target, &estimate) - 0.25 / 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_misalignment_zero_target() {
        assert!((misalignment(&[0.0, 0.0], &[0.5, 0.5]) - 0.5).abs() < 1e-12);
    }
}
