// ABOUTME: Integration tests for the physical, mental, nutrition, technical and tactical aggregators
// ABOUTME: Checks benchmark ratios, age tiers, re-normalization over populated metrics and bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use athlete_scoring::{
    config::ScoringConfig,
    intelligence::{
        closeness, mental_score, nutrition_score, physical_score, physical_test_score,
        tactical_score, technical_score, NutritionScoringMode,
    },
    models::{
        AgeGroup, AthleteProfile, Metric, NutritionMetric, PhysicalMetric, RawSkillRecord,
        ScoringSelections, TechnicalSkill,
    },
};
use common::assert_close;

// ============================================================================
// Physical
// ============================================================================

#[test]
fn test_pushups_at_under_18_benchmark_score_full_marks() {
    common::init_test_logging();
    let config = ScoringConfig::default();
    let pushups = Metric::Physical(PhysicalMetric::Pushups);
    let record = RawSkillRecord::with_profile(common::under_18_profile()).with(pushups, 70.0);

    let spec = config.metrics.spec(pushups);
    let test = physical_test_score(70.0, spec, AgeGroup::Under18, 10.0).unwrap();
    assert_close(test, 10.0, 0.0);

    let physical = physical_score(&record, &config.metrics, &config.physical);
    assert_eq!(physical.metrics_used, 1);
    assert_close(physical.score, 100.0, 1e-9);
}

#[test]
fn test_benchmark_ratio_clamps_at_ten() {
    let config = ScoringConfig::default();
    let pullups = Metric::Physical(PhysicalMetric::Pullups);
    let spec = config.metrics.spec(pullups);
    let test = physical_test_score(45.0, spec, AgeGroup::Senior, 10.0).unwrap();
    assert_close(test, 10.0, 0.0);
}

#[test]
fn test_recorded_zero_time_is_best_not_undefined() {
    let config = ScoringConfig::default();
    let record = RawSkillRecord::default().with(Metric::Physical(PhysicalMetric::SprintTime), 0.0);
    let physical = physical_score(&record, &config.metrics, &config.physical);
    assert_eq!(physical.metrics_used, 1);
    assert_close(physical.score, 100.0, 1e-9);
}

#[test]
fn test_recorded_zero_reps_is_a_real_measurement() {
    let config = ScoringConfig::default();
    let record = RawSkillRecord::default().with(Metric::Physical(PhysicalMetric::Pullups), 0.0);
    let physical = physical_score(&record, &config.metrics, &config.physical);
    assert!(physical.has_data());
    assert_close(physical.score, 0.0, 0.0);
}

#[test]
fn test_physical_weighting_across_sections() {
    let config = ScoringConfig::default();
    let record = common::full_record(common::under_18_profile());
    let physical = physical_score(&record, &config.metrics, &config.physical);

    assert_eq!(physical.metrics_used, 5);
    assert_eq!(physical.components.len(), 3);
    // strength: pushups 65/70 -> 9.2857, grip 42/40 -> 10; mean 96.4286 * 40
    // speed: sprint50m 6.5/7.0 -> 9.2857; 92.8571 * 30
    // endurance: run5k 17/20 -> 8.5, yoyo 18.5/25 -> 7.4; mean 79.5 * 30
    // (3857.1429 + 2785.7143 + 2385) / 100
    assert_close(physical.score, 90.278_571, 1e-5);
}

#[test]
fn test_partially_populated_section_keeps_its_points() {
    let config = ScoringConfig::default();
    let record = RawSkillRecord::with_profile(common::senior_profile())
        .with(Metric::Physical(PhysicalMetric::Pushups), 80.0)
        .with(Metric::Physical(PhysicalMetric::Sprint50m), 13.0)
        .with(Metric::Physical(PhysicalMetric::ShuttleRun), 24.0)
        .with(Metric::Physical(PhysicalMetric::SprintTime), 20.0);
    let physical = physical_score(&record, &config.metrics, &config.physical);

    assert_eq!(physical.metrics_used, 4);
    // strength: pushups 80/80 -> 10, 100 * 40
    // speed: 6.5/13, 12/24, 10/20 -> 5 each, 50 * 30
    // endurance unpopulated: (4000 + 1500) / 70
    assert_close(physical.score, 5500.0 / 70.0, 1e-9);
}

#[test]
fn test_single_populated_section_renormalizes() {
    let config = ScoringConfig::default();
    let record = RawSkillRecord::with_profile(common::senior_profile())
        .with(Metric::Physical(PhysicalMetric::YoyoTest), 20.0);
    let physical = physical_score(&record, &config.metrics, &config.physical);

    assert_eq!(physical.components.len(), 1);
    // yoyo 20/25 -> 8, the only section populated
    assert_close(physical.score, 80.0, 1e-9);
}

#[test]
fn test_recorded_zero_run_time_is_best() {
    let config = ScoringConfig::default();
    let record = RawSkillRecord::with_profile(common::senior_profile())
        .with(Metric::Physical(PhysicalMetric::Run5kTime), 0.0);
    let physical = physical_score(&record, &config.metrics, &config.physical);

    assert_eq!(physical.metrics_used, 1);
    assert_close(physical.score, 100.0, 1e-9);
}

#[test]
fn test_run_5k_benchmark_is_age_tiered() {
    let config = ScoringConfig::default();
    let run = Metric::Physical(PhysicalMetric::Run5kTime);
    let under_16 = AthleteProfile::new(15, 165.0, 55.0);
    let younger = RawSkillRecord::with_profile(under_16).with(run, 18.0);
    let senior = RawSkillRecord::with_profile(common::senior_profile()).with(run, 18.0);

    let younger_score = physical_score(&younger, &config.metrics, &config.physical).score;
    let senior_score = physical_score(&senior, &config.metrics, &config.physical).score;
    assert_close(younger_score, 100.0, 1e-9);
    assert!(senior_score < younger_score);
}

#[test]
fn test_invalid_measurements_are_ignored() {
    let config = ScoringConfig::default();
    let record = RawSkillRecord::default()
        .with(Metric::Physical(PhysicalMetric::Pushups), -5.0)
        .with(Metric::Physical(PhysicalMetric::VerticalJump), f64::NAN);
    let physical = physical_score(&record, &config.metrics, &config.physical);
    assert!(!physical.has_data());
    assert_close(physical.score, 0.0, 0.0);
}

// ============================================================================
// Mental
// ============================================================================

#[test]
fn test_mental_average_of_mood_and_sleep() {
    let config = ScoringConfig::default();
    let record = common::full_record(common::senior_profile());
    let mental = mental_score(&record, &config.metrics, &config.mental);
    assert_eq!(mental.metrics_used, 2);
    assert_close(mental.score, 70.0, 1e-9);
}

// ============================================================================
// Nutrition
// ============================================================================

#[test]
fn test_deviation_scenarios() {
    assert_close(closeness(2664.0, 2664.0, 1.5), 100.0, 0.0);
    assert_close(closeness(1332.0, 2664.0, 1.5), 47.2, 0.05);
}

#[test]
fn test_calories_on_personalized_target_score_100() {
    let config = ScoringConfig::default();
    let record = RawSkillRecord::with_profile(common::senior_profile())
        .with(Metric::Nutrition(NutritionMetric::Calories), 2633.0);
    let assessment = nutrition_score(&record, ScoringSelections::default(), &config);

    assert_eq!(assessment.mode, NutritionScoringMode::Personalized);
    assert_close(assessment.score.score, 100.0, 1e-9);
    let targets = assessment.metabolic_profile.unwrap().targets;
    assert_close(targets.calories, 2633.0, 0.0);
}

#[test]
fn test_personalized_nutrition_weights() {
    let config = ScoringConfig::default();
    let record = common::full_record(common::under_18_profile());
    let assessment = nutrition_score(&record, ScoringSelections::default(), &config);

    assert_eq!(assessment.score.metrics_used, 3);
    // Calories and protein at 25 points, water at 12.5
    assert_close(assessment.score.score, 87.820_095, 1e-4);
}

#[test]
fn test_generic_nutrition_without_age() {
    let config = ScoringConfig::default();
    let profile = AthleteProfile {
        age: None,
        height_cm: Some(175.0),
        weight_kg: Some(70.0),
    };
    let record = RawSkillRecord::with_profile(profile)
        .with(Metric::Nutrition(NutritionMetric::Calories), 2350.0)
        .with(Metric::Nutrition(NutritionMetric::Fats), 30.0);
    let assessment = nutrition_score(&record, ScoringSelections::default(), &config);

    assert_eq!(assessment.mode, NutritionScoringMode::Generic);
    // calories at 50% of 1200-3500 (25 points), fats at the range floor (12.5 points)
    assert_close(assessment.score.score, 50.0 * 25.0 / 37.5, 1e-9);
}

#[test]
fn test_nutrition_without_intake_is_unpopulated() {
    let config = ScoringConfig::default();
    let record = RawSkillRecord::with_profile(common::senior_profile());
    let assessment = nutrition_score(&record, ScoringSelections::default(), &config);
    assert!(!assessment.score.has_data());
    assert_close(assessment.score.score, 0.0, 0.0);
    assert!(assessment.metabolic_profile.is_some());
}

// ============================================================================
// Technical and tactical
// ============================================================================

#[test]
fn test_technical_groups_renormalize() {
    let config = ScoringConfig::default();
    let record = common::full_record(common::senior_profile());
    let technical = technical_score(&record, &config.metrics, &config.technical);

    assert_eq!(technical.metrics_used, 4);
    assert_eq!(technical.components.len(), 3);
    // batting 65 * 35 + bowling 80 * 35 + fielding 55 * 30
    assert_close(technical.score, 67.25, 1e-9);
}

#[test]
fn test_single_technical_group() {
    let config = ScoringConfig::default();
    let record = RawSkillRecord::default()
        .with(Metric::Technical(TechnicalSkill::WicketKeeping), 9.0)
        .with(Metric::Technical(TechnicalSkill::DivingStops), 7.0);
    let technical = technical_score(&record, &config.metrics, &config.technical);
    assert_close(technical.score, 80.0, 1e-9);
}

#[test]
fn test_tactical_placeholder_from_config() {
    let mut config = ScoringConfig::default();
    config.tactical.placeholder_score = 40.0;
    let tactical = tactical_score(&config.tactical);
    assert!(tactical.is_placeholder);
    assert_close(tactical.score, 40.0, 0.0);
}

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn test_extreme_inputs_stay_within_bounds() {
    let config = ScoringConfig::default();
    let mut record = RawSkillRecord::with_profile(common::senior_profile());
    for metric in Metric::all() {
        record.set(metric, Some(1.0e9));
    }

    let scores = [
        physical_score(&record, &config.metrics, &config.physical),
        mental_score(&record, &config.metrics, &config.mental),
        nutrition_score(&record, ScoringSelections::default(), &config).score,
        technical_score(&record, &config.metrics, &config.technical),
    ];
    for score in scores {
        assert!(
            (0.0..=100.0).contains(&score.score),
            "{} out of bounds: {}",
            score.category,
            score.score
        );
    }
}
