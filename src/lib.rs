// ABOUTME: Main library entry point for the athlete skill and nutrition scoring engine
// ABOUTME: Converts raw athletic test inputs into normalized category scores and an overall score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Athlete Scoring
//!
//! The computational core of a coaching dashboard: pure functions that turn
//! heterogeneous test inputs (reps, times, distances, self-ratings,
//! macronutrient grams) into 0-100 category scores and a single overall
//! progress score.
//!
//! ## Features
//!
//! - **Metabolic calculator**: Mifflin-St Jeor BMR, TDEE, goal-adjusted calories,
//!   macro split and water target
//! - **Deviation scoring**: exponential closeness to personalized targets
//! - **Category aggregators**: physical, mental, nutrition, technical and tactical
//! - **Overall progress**: mean of populated categories with a badge band
//! - **Cohort comparison**: athlete vs. age-group means on the same metric ranges
//!
//! ## Architecture
//!
//! - **Models**: records, metric identifiers, selections and cohort averages
//! - **Config**: immutable scoring configuration with defaults and env overrides
//! - **Intelligence**: the scoring functions
//! - **Errors**: error codes for the fallible edges (parsing, decoding, config)
//!
//! ## Example Usage
//!
//! ```rust
//! use athlete_scoring::config::ScoringConfig;
//! use athlete_scoring::intelligence::score_record;
//! use athlete_scoring::models::{
//!     AthleteProfile, Metric, PhysicalMetric, RawSkillRecord, ScoringSelections,
//! };
//!
//! let record = RawSkillRecord::with_profile(AthleteProfile::new(17, 178.0, 68.0))
//!     .with(Metric::Physical(PhysicalMetric::Pushups), 70.0);
//!
//! let scorecard = score_record(&record, ScoringSelections::default(), ScoringConfig::global());
//! assert!(scorecard.overall <= 100);
//! ```

/// Scoring configuration
pub mod config;

/// Error codes and application error type
pub mod errors;

/// Scoring engine
pub mod intelligence;

/// Logging setup for host applications
pub mod logging;

/// Engine input models
pub mod models;
