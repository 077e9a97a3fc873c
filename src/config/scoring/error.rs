// ABOUTME: Configuration error types for scoring configuration loading and validation
// ABOUTME: Defines error variants for invalid ranges, unparsable overrides and inconsistent weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for scoring configuration validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Range bounds or tiers out of order (e.g., min >= max)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Point budgets or weights not usable (e.g., non-positive)
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// A metric catalog entry is inconsistent
    #[error("Invalid metric '{metric}': {reason}")]
    InvalidMetric {
        /// Record key of the offending metric
        metric: &'static str,
        /// What is wrong with it
        reason: &'static str,
    },
}
