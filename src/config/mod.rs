// ABOUTME: Configuration management module for scoring engine settings
// ABOUTME: Exposes the scoring configuration tree, its global singleton and error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the scoring engine
//!
//! - **Scoring**: metric catalog, metabolic coefficients, category point
//!   budgets, tactical placeholder and overall aggregation settings

/// Scoring configuration and validation
pub mod scoring;

pub use scoring::{ConfigError, ScoringConfig};
