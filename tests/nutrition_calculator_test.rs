// ABOUTME: Integration tests for the metabolic calculator and personalized nutrition targets
// ABOUTME: Covers BMR, TDEE ordering, goal adjustments, macro splits, water and the macro-calorie gap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Metabolic calculator tests
//!
//! - Mifflin-St Jeor BMR for both sexes
//! - TDEE across all activity levels
//! - Goal-adjusted calories and per-goal macro splits
//! - Water target with the high-intensity bonus
//! - Macro-calorie gap surfaced, not reconciled

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use athlete_scoring::{
    config::scoring::NutritionConfig,
    intelligence::nutrition_calculator::{
        calculate_bmr, calculate_tdee, compute_targets, metabolic_profile, MetabolicInputs,
    },
    models::{ActivityLevel, AthleteProfile, NutritionGoal, ScoringSelections, Sex},
};
use common::assert_close;

fn maintaining_moderate_male() -> ScoringSelections {
    ScoringSelections::new(
        NutritionGoal::Maintaining,
        ActivityLevel::Moderate,
        Sex::Male,
    )
}

// ============================================================================
// BMR and TDEE
// ============================================================================

#[test]
fn test_bmr_reference_athlete() {
    let config = NutritionConfig::default();
    // 10*70 + 6.25*175 - 5*20 + 5
    let bmr = calculate_bmr(70.0, 175.0, 20, Sex::Male, &config.bmr);
    assert_close(bmr, 1698.75, 1e-9);
}

#[test]
fn test_bmr_female() {
    let config = NutritionConfig::default();
    // 10*60 + 6.25*165 - 5*25 - 161
    let bmr = calculate_bmr(60.0, 165.0, 25, Sex::Female, &config.bmr);
    assert_close(bmr, 1345.25, 1e-9);
}

#[test]
fn test_tdee_strictly_increasing_across_levels() {
    let config = NutritionConfig::default();
    let mut previous = 0.0;
    for level in ActivityLevel::ALL {
        let tdee = calculate_tdee(1698.75, level, &config.activity_factors);
        assert!(tdee > previous, "{level} did not increase TDEE");
        previous = tdee;
    }
}

// ============================================================================
// Targets
// ============================================================================

#[test]
fn test_reference_athlete_targets() {
    common::init_test_logging();
    let config = NutritionConfig::default();
    let targets = compute_targets(
        70.0,
        175.0,
        20,
        NutritionGoal::Maintaining,
        ActivityLevel::Moderate,
        Sex::Male,
        &config,
    );

    assert_close(targets.calories, 2633.0, 0.0);
    assert_close(targets.protein, 112.0, 0.0);
    assert_close(targets.carbs, 280.0, 0.0);
    assert_close(targets.fats, 73.0, 0.0);
    assert_close(targets.water, 2.45, 0.06);
}

#[test]
fn test_goal_ordering_of_calories() {
    let config = NutritionConfig::default();
    let calories = |goal| {
        compute_targets(
            70.0,
            175.0,
            20,
            goal,
            ActivityLevel::Moderate,
            Sex::Male,
            &config,
        )
        .calories
    };

    let bulking = calories(NutritionGoal::Bulking);
    let maintaining = calories(NutritionGoal::Maintaining);
    let cutting = calories(NutritionGoal::Cutting);
    assert!(bulking > maintaining);
    assert!(maintaining > cutting);
    assert_close(bulking, 3028.0, 0.0);
    assert_close(cutting, 2238.0, 0.0);
}

#[test]
fn test_cutting_macro_split() {
    let config = NutritionConfig::default();
    let targets = compute_targets(
        70.0,
        175.0,
        20,
        NutritionGoal::Cutting,
        ActivityLevel::Moderate,
        Sex::Male,
        &config,
    );
    // 2.2 g/kg protein, 3.0 g/kg carbs, 20% of 2238 kcal from fat
    assert_close(targets.protein, 154.0, 0.0);
    assert_close(targets.carbs, 210.0, 0.0);
    assert_close(targets.fats, 50.0, 0.0);
}

#[test]
fn test_water_bonus_applies_to_intense_levels_only() {
    let config = NutritionConfig::default();
    let water = |level| {
        compute_targets(
            80.0,
            180.0,
            25,
            NutritionGoal::Maintaining,
            level,
            Sex::Male,
            &config,
        )
        .water
    };
    assert_close(water(ActivityLevel::Light), 2.8, 1e-9);
    assert_close(water(ActivityLevel::Intense), 3.3, 1e-9);
    assert_close(water(ActivityLevel::VeryIntense), 3.3, 1e-9);
}

// ============================================================================
// Profile guard and metabolic profile
// ============================================================================

#[test]
fn test_missing_height_disables_personalization() {
    let profile = AthleteProfile {
        age: Some(20),
        height_cm: None,
        weight_kg: Some(70.0),
    };
    assert!(MetabolicInputs::from_profile(&profile).is_none());
}

#[test]
fn test_macro_calorie_gap_is_surfaced() {
    let config = NutritionConfig::default();
    let inputs = MetabolicInputs::from_profile(&common::senior_profile()).unwrap();
    let profile = metabolic_profile(&inputs, maintaining_moderate_male(), &config);

    assert_close(profile.bmr, 1698.75, 1e-9);
    assert_close(profile.tdee, 2633.0625, 1e-9);
    // (112 + 280) * 4 + 73 * 9
    assert_close(profile.macro_calorie_gap.macro_calories, 2225.0, 1e-9);
    assert_close(profile.macro_calorie_gap.difference, -408.0, 1e-9);
}

#[test]
fn test_targets_are_deterministic() {
    let config = NutritionConfig::default();
    let inputs = MetabolicInputs::from_profile(&common::under_18_profile()).unwrap();
    let first = metabolic_profile(&inputs, maintaining_moderate_male(), &config);
    let second = metabolic_profile(&inputs, maintaining_moderate_male(), &config);
    assert_eq!(first, second);
}

#[test]
fn test_targets_serialize_camel_case() {
    let config = NutritionConfig::default();
    let inputs = MetabolicInputs::from_profile(&common::senior_profile()).unwrap();
    let profile = metabolic_profile(&inputs, maintaining_moderate_male(), &config);
    let json = serde_json::to_value(profile).unwrap();
    assert!(json["macroCalorieGap"]["macroCalories"].is_number());
    assert_eq!(json["targets"]["protein"], 112.0);
}
