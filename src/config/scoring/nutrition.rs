// ABOUTME: Nutrition configuration for metabolic targets and nutrition category scoring
// ABOUTME: Configures BMR coefficients, activity multipliers, goal adjustments, macro splits and hydration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! Provides the constants behind personalized nutrition targets and the
//! nutrition category score.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
//! - Carbs: Burke et al. (2011) DOI: 10.1080/02640414.2011.585473

use super::error::ConfigError;
use crate::models::{ActivityLevel, NutritionGoal};
use serde::{Deserialize, Serialize};

/// Nutrition Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustment per goal
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Macro split per goal
    pub macro_splits: MacroSplitConfig,
    /// Daily water target
    pub hydration: HydrationConfig,
    /// Deviation curve used to score intake against targets
    pub deviation: DeviationConfig,
    /// Point budget per nutrition metric
    pub weights: NutritionWeights,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Intense: 1.725
    pub intense: f64,
    /// Very intense: 1.9
    pub very_intense: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for a level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Intense => self.intense,
            ActivityLevel::VeryIntense => self.very_intense,
        }
    }
}

/// Calorie multiplier applied to TDEE per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Surplus multiplier: 1.15
    pub bulking: f64,
    /// Balance multiplier: 1.0
    pub maintaining: f64,
    /// Deficit multiplier: 0.85
    pub cutting: f64,
}

impl GoalAdjustmentConfig {
    /// Multiplier for a goal
    #[must_use]
    pub const fn multiplier(&self, goal: NutritionGoal) -> f64 {
        match goal {
            NutritionGoal::Bulking => self.bulking,
            NutritionGoal::Maintaining => self.maintaining,
            NutritionGoal::Cutting => self.cutting,
        }
    }
}

/// Macro targets for one goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Protein per kg bodyweight (g/kg)
    pub protein_g_per_kg: f64,
    /// Carbohydrates per kg bodyweight (g/kg)
    pub carbs_g_per_kg: f64,
    /// Share of target calories from fat (percent)
    pub fat_percent_of_calories: f64,
}

/// Macro split per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Bulking: 2.0 g/kg protein, 5.0 g/kg carbs, 20% fat
    pub bulking: MacroSplit,
    /// Maintaining: 1.6 g/kg protein, 4.0 g/kg carbs, 25% fat
    pub maintaining: MacroSplit,
    /// Cutting: 2.2 g/kg protein, 3.0 g/kg carbs, 20% fat
    pub cutting: MacroSplit,
}

impl MacroSplitConfig {
    /// Split for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: NutritionGoal) -> &MacroSplit {
        match goal {
            NutritionGoal::Bulking => &self.bulking,
            NutritionGoal::Maintaining => &self.maintaining,
            NutritionGoal::Cutting => &self.cutting,
        }
    }
}

/// Daily water target configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Liters per kg bodyweight: 0.035
    pub liters_per_kg: f64,
    /// Extra liters for intense and very intense activity: 0.5
    pub high_intensity_bonus_liters: f64,
}

/// Exponential decay curve for closeness-to-target scoring
///
/// `score = 100 * e^(-decay * |actual - target| / target)`; with the default
/// decay of 1.5 a 12% miss scores about 83 and a 50% miss about 47.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviationConfig {
    /// Decay rate: 1.5
    pub decay: f64,
}

/// Point budget per nutrition metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionWeights {
    /// Calories: 25
    pub calories: f64,
    /// Protein: 25
    pub protein: f64,
    /// Carbohydrates: 25
    pub carbohydrates: f64,
    /// Fats: 12.5
    pub fats: f64,
    /// Water: 12.5
    pub water: f64,
}

impl NutritionConfig {
    /// Validate nutrition configuration
    ///
    /// # Errors
    ///
    /// Returns an error if coefficients, multipliers or weights are inconsistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.very_intense > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.light
            || factors.light >= factors.moderate
            || factors.moderate >= factors.intense
            || factors.intense >= factors.very_intense
        {
            return Err(ConfigError::InvalidRange("Activity factors must be in ascending order"));
        }

        let goals = &self.goal_adjustments;
        if !(goals.cutting < goals.maintaining && goals.maintaining < goals.bulking)
            || goals.cutting <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "Goal multipliers must satisfy 0 < cutting < maintaining < bulking",
            ));
        }

        for split in [
            &self.macro_splits.bulking,
            &self.macro_splits.maintaining,
            &self.macro_splits.cutting,
        ] {
            if !(0.5..=3.0).contains(&split.protein_g_per_kg) {
                return Err(ConfigError::ValueOutOfRange(
                    "Protein recommendations must be between 0.5 and 3.0 g/kg",
                ));
            }
            if !(1.0..=15.0).contains(&split.carbs_g_per_kg) {
                return Err(ConfigError::ValueOutOfRange(
                    "Carb recommendations must be between 1.0 and 15.0 g/kg",
                ));
            }
            if !(10.0..=50.0).contains(&split.fat_percent_of_calories) {
                return Err(ConfigError::ValueOutOfRange(
                    "Fat percentage must be between 10% and 50% of calories",
                ));
            }
        }

        if self.hydration.liters_per_kg <= 0.0 || self.hydration.high_intensity_bonus_liters < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Hydration rate must be positive and bonus non-negative",
            ));
        }

        if !self.deviation.decay.is_finite() || self.deviation.decay <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("Deviation decay must be a positive number"));
        }

        let weights = &self.weights;
        if [
            weights.calories,
            weights.protein,
            weights.carbohydrates,
            weights.fats,
            weights.water,
        ]
        .iter()
        .any(|weight| *weight <= 0.0)
        {
            return Err(ConfigError::InvalidWeights("Nutrition metric weights must be positive"));
        }

        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            intense: 1.725,
            very_intense: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            bulking: 1.15,
            maintaining: 1.0,
            cutting: 0.85,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            bulking: MacroSplit {
                protein_g_per_kg: 2.0,
                carbs_g_per_kg: 5.0,
                fat_percent_of_calories: 20.0,
            },
            maintaining: MacroSplit {
                protein_g_per_kg: 1.6,
                carbs_g_per_kg: 4.0,
                fat_percent_of_calories: 25.0,
            },
            cutting: MacroSplit {
                protein_g_per_kg: 2.2,
                carbs_g_per_kg: 3.0,
                fat_percent_of_calories: 20.0,
            },
        }
    }
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            liters_per_kg: 0.035,
            high_intensity_bonus_liters: 0.5,
        }
    }
}

impl Default for DeviationConfig {
    fn default() -> Self {
        Self { decay: 1.5 }
    }
}

impl Default for NutritionWeights {
    fn default() -> Self {
        Self {
            calories: 25.0,
            protein: 25.0,
            carbohydrates: 25.0,
            fats: 12.5,
            water: 12.5,
        }
    }
}
