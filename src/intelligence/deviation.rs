// ABOUTME: Realistic deviation scoring - exponential closeness of an actual value to a target
// ABOUTME: Small misses stay high while large misses fall off smoothly instead of hitting zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Closeness of `actual` to `target` on a 0-100 scale
///
/// Formula: `100 * e^(-decay * |actual - target| / target)`
///
/// Returns 0 when the target is not positive or either input is not finite.
/// Exactly on target scores 100.
#[must_use]
pub fn closeness(actual: f64, target: f64, decay: f64) -> f64 {
    if !actual.is_finite() || !target.is_finite() || !decay.is_finite() || target <= 0.0 {
        return 0.0;
    }
    let deviation = (actual - target).abs() / target;
    (100.0 * (-decay * deviation).exp()).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECAY: f64 = 1.5;

    #[test]
    fn test_on_target_is_perfect() {
        assert!((closeness(2664.0, 2664.0, DECAY) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_half_target_scores_about_47() {
        let score = closeness(1332.0, 2664.0, DECAY);
        assert!((score - 47.236_655).abs() < 1e-5);
    }

    #[test]
    fn test_strictly_decreasing_with_distance() {
        let target = 150.0;
        let scores: Vec<f64> = [150.0, 160.0, 180.0, 220.0, 400.0]
            .iter()
            .map(|actual| closeness(*actual, target, DECAY))
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_symmetric_around_target() {
        let over = closeness(110.0, 100.0, DECAY);
        let under = closeness(90.0, 100.0, DECAY);
        assert!((over - under).abs() < 1e-9);
    }

    #[test]
    fn test_zero_or_invalid_target() {
        assert!(closeness(0.0, 0.0, DECAY).abs() < f64::EPSILON);
        assert!(closeness(50.0, -10.0, DECAY).abs() < f64::EPSILON);
        assert!(closeness(f64::NAN, 100.0, DECAY).abs() < f64::EPSILON);
        assert!(closeness(100.0, f64::INFINITY, DECAY).abs() < f64::EPSILON);
    }
}
