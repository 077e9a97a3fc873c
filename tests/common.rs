// ABOUTME: Shared test utilities and record fixtures for integration tests
// ABOUTME: Provides quiet logging setup and representative athlete records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `athlete_scoring`

use athlete_scoring::models::{
    AthleteProfile, MentalMetric, Metric, NutritionMetric, PhysicalMetric, RawSkillRecord,
    TechnicalSkill,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 20-year-old, 175 cm, 70 kg
pub fn senior_profile() -> AthleteProfile {
    AthleteProfile::new(20, 175.0, 70.0)
}

/// 17-year-old, 178 cm, 68 kg
pub fn under_18_profile() -> AthleteProfile {
    AthleteProfile::new(17, 178.0, 68.0)
}

/// Record with at least one metric in every measured category
pub fn full_record(profile: AthleteProfile) -> RawSkillRecord {
    RawSkillRecord::with_profile(profile)
        .with(Metric::Physical(PhysicalMetric::Pushups), 65.0)
        .with(Metric::Physical(PhysicalMetric::GripStrength), 42.0)
        .with(Metric::Physical(PhysicalMetric::Sprint50m), 7.0)
        .with(Metric::Physical(PhysicalMetric::Run5kTime), 20.0)
        .with(Metric::Physical(PhysicalMetric::YoyoTest), 18.5)
        .with(Metric::Mental(MentalMetric::Mood), 8.0)
        .with(Metric::Mental(MentalMetric::Sleep), 6.0)
        .with(Metric::Nutrition(NutritionMetric::Calories), 2400.0)
        .with(Metric::Nutrition(NutritionMetric::Protein), 120.0)
        .with(Metric::Nutrition(NutritionMetric::Water), 2.5)
        .with(Metric::Technical(TechnicalSkill::CoverDrive), 7.0)
        .with(Metric::Technical(TechnicalSkill::PullShot), 6.0)
        .with(Metric::Technical(TechnicalSkill::LineConsistency), 8.0)
        .with(Metric::Technical(TechnicalSkill::CloseCatching), 5.5)
}

/// Approximate float comparison
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
