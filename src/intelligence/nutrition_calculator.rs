// ABOUTME: Metabolic calculator deriving personalized daily nutrition targets
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, goal-adjusted calories, macro split and water target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Derives daily nutrition targets from an athlete's biometrics and the three
//! dashboard selections. Every function is infallible; callers obtain valid
//! inputs through [`MetabolicInputs::from_profile`], which returns `None` when
//! the profile cannot support a personalized calculation.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>
//!
//! - Burke, L.M., et al. (2011). Carbohydrates for training and competition.
//!   *Journal of Sports Sciences*, 29(sup1), S17-S27.
//!   <https://doi.org/10.1080/02640414.2011.585473>

use crate::config::scoring::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, HydrationConfig, MacroSplit,
    NutritionConfig,
};
use crate::models::{ActivityLevel, AthleteProfile, NutritionGoal, ScoringSelections, Sex};
use serde::{Deserialize, Serialize};

/// Energy density of protein and carbohydrate (kcal/g)
const KCAL_PER_GRAM_PROTEIN_CARB: f64 = 4.0;
/// Energy density of fat (kcal/g)
const KCAL_PER_GRAM_FAT: f64 = 9.0;
/// Upper plausibility bound for weight (kg) and height (cm)
const MAX_BODY_MEASURE: f64 = 300.0;

/// Biometrics sufficient for a personalized calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetabolicInputs {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
}

impl MetabolicInputs {
    /// Extract inputs from a profile
    ///
    /// Returns `None` unless weight, height and age are all present and weight
    /// and height are finite, positive and at most 300.
    #[must_use]
    pub fn from_profile(profile: &AthleteProfile) -> Option<Self> {
        let plausible = |v: f64| v.is_finite() && v > 0.0 && v <= MAX_BODY_MEASURE;
        let weight_kg = profile.weight_kg.filter(|w| plausible(*w))?;
        let height_cm = profile.height_cm.filter(|h| plausible(*h))?;
        let age_years = profile.age?;
        Some(Self {
            weight_kg,
            height_cm,
            age_years,
        })
    }
}

/// Daily nutrition targets
///
/// Calories and grams are whole numbers; water is rounded to one decimal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTargets {
    /// Goal-adjusted calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fats (g)
    pub fats: f64,
    /// Water (L)
    pub water: f64,
}

/// Difference between the calorie target and the energy implied by the macro targets
///
/// Protein and carbs are derived per kilogram while calories come from TDEE,
/// so the two rarely agree. Surfaced for display instead of silently reconciled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MacroCalorieGap {
    /// Calorie target
    pub target_calories: f64,
    /// 4 kcal/g protein + 4 kcal/g carbs + 9 kcal/g fat
    pub macro_calories: f64,
    /// `macro_calories - target_calories`
    pub difference: f64,
}

impl MacroCalorieGap {
    /// Gap for a set of targets
    #[must_use]
    pub fn from_targets(targets: &NutritionTargets) -> Self {
        let macro_calories = (targets.protein + targets.carbs) * KCAL_PER_GRAM_PROTEIN_CARB
            + targets.fats * KCAL_PER_GRAM_FAT;
        Self {
            target_calories: targets.calories,
            macro_calories,
            difference: macro_calories - targets.calories,
        }
    }
}

/// Intermediate energy values alongside the final targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetabolicProfile {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Daily targets
    pub targets: NutritionTargets,
    /// Macro energy versus calorie target
    pub macro_calorie_gap: MacroCalorieGap,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// Never negative.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age_years);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    (weight_component + height_component + age_component + sex_constant).max(0.0)
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Intense: 1.725
/// - Very intense: 1.9
#[must_use]
pub fn calculate_tdee(bmr: f64, level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * config.factor(level)
}

/// Goal-adjusted calorie target: TDEE x 1.15 bulking, x 1.0 maintaining, x 0.85 cutting
#[must_use]
pub fn goal_adjusted_calories(
    tdee: f64,
    goal: NutritionGoal,
    config: &GoalAdjustmentConfig,
) -> f64 {
    tdee * config.multiplier(goal)
}

/// Protein, carbohydrate and fat grams for a calorie target
///
/// Protein and carbs scale with bodyweight; fat is a share of calories at 9 kcal/g.
/// Returns `(protein_g, carbs_g, fat_g)` unrounded.
#[must_use]
pub fn calculate_macros(weight_kg: f64, calories: f64, split: &MacroSplit) -> (f64, f64, f64) {
    let protein_g = weight_kg * split.protein_g_per_kg;
    let carbs_g = weight_kg * split.carbs_g_per_kg;
    let fat_g = calories * split.fat_percent_of_calories / 100.0 / KCAL_PER_GRAM_FAT;
    (protein_g, carbs_g, fat_g)
}

/// Daily water target in liters, rounded to one decimal
///
/// Formula: weight x 0.035 L, plus 0.5 L for intense and very intense activity
#[must_use]
pub fn calculate_water(weight_kg: f64, level: ActivityLevel, config: &HydrationConfig) -> f64 {
    let bonus = if level.is_high_intensity() {
        config.high_intensity_bonus_liters
    } else {
        0.0
    };
    round_to_tenth(weight_kg.mul_add(config.liters_per_kg, bonus))
}

/// Compute daily nutrition targets
///
/// Calories are the goal-adjusted TDEE and are not re-derived from the macros;
/// see [`MacroCalorieGap`].
#[must_use]
pub fn compute_targets(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    goal: NutritionGoal,
    activity: ActivityLevel,
    sex: Sex,
    config: &NutritionConfig,
) -> NutritionTargets {
    let bmr = calculate_bmr(weight_kg, height_cm, age_years, sex, &config.bmr);
    let tdee = calculate_tdee(bmr, activity, &config.activity_factors);
    targets_from_tdee(weight_kg, tdee, goal, activity, config)
}

/// BMR, TDEE, targets and macro-calorie gap in one pass
#[must_use]
pub fn metabolic_profile(
    inputs: &MetabolicInputs,
    selections: ScoringSelections,
    config: &NutritionConfig,
) -> MetabolicProfile {
    let bmr = calculate_bmr(
        inputs.weight_kg,
        inputs.height_cm,
        inputs.age_years,
        selections.sex,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, selections.activity_level, &config.activity_factors);
    let targets = targets_from_tdee(
        inputs.weight_kg,
        tdee,
        selections.goal,
        selections.activity_level,
        config,
    );

    MetabolicProfile {
        bmr,
        tdee,
        targets,
        macro_calorie_gap: MacroCalorieGap::from_targets(&targets),
    }
}

fn targets_from_tdee(
    weight_kg: f64,
    tdee: f64,
    goal: NutritionGoal,
    activity: ActivityLevel,
    config: &NutritionConfig,
) -> NutritionTargets {
    let calories = goal_adjusted_calories(tdee, goal, &config.goal_adjustments).round();
    let (protein_g, carbs_g, fat_g) =
        calculate_macros(weight_kg, calories, config.macro_splits.for_goal(goal));

    NutritionTargets {
        calories,
        protein: protein_g.round(),
        carbs: carbs_g.round(),
        fats: fat_g.round(),
        water: calculate_water(weight_kg, activity, &config.hydration),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
