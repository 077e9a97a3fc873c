// ABOUTME: Shared weighted-average helper that re-normalizes over populated components
// ABOUTME: Used by every category aggregator so missing metrics never count as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One populated input to a category score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponent {
    /// Metric key or group name
    pub label: String,
    /// Component score on a 0-100 scale
    pub score: f64,
    /// Points this component carries
    pub weight: f64,
}

impl ScoreComponent {
    /// Create a component, clamping the score into 0-100
    #[must_use]
    pub fn new(label: impl Into<String>, score: f64, weight: f64) -> Self {
        Self {
            label: label.into(),
            score: clamp_score(score),
            weight,
        }
    }
}

/// Weighted mean of `(score, weight)` pairs, clamped to 0-100
///
/// Pairs with a non-finite score or a non-positive weight are skipped, so the
/// remaining weights are re-normalized. No usable pairs yields 0.
#[must_use]
pub fn weighted_average(pairs: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let (weighted_sum, total_weight) = pairs
        .into_iter()
        .filter(|(score, weight)| score.is_finite() && weight.is_finite() && *weight > 0.0)
        .fold((0.0, 0.0), |(sum, total), (score, weight)| {
            (score.mul_add(weight, sum), total + weight)
        });

    if total_weight > 0.0 {
        clamp_score(weighted_sum / total_weight)
    } else {
        0.0
    }
}

/// Weighted mean over components
#[must_use]
pub fn weighted_average_of(components: &[ScoreComponent]) -> f64 {
    weighted_average(components.iter().map(|c| (c.score, c.weight)))
}

/// Clamp into 0-100, mapping NaN to 0
#[must_use]
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}
