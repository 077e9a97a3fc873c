// ABOUTME: Scoring configuration root aggregating catalog, nutrition and category settings
// ABOUTME: Provides the global singleton, environment overrides and cross-domain validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring Configuration Module
//!
//! Type-safe configuration for every scorer in the engine. Values are plain
//! immutable structs with `Default` implementations, passed by reference into
//! the scoring functions.
//!
//! # Module Structure
//!
//! - `metrics` - Per-metric range, step, direction and benchmark
//! - `nutrition` - Metabolic coefficients, macro splits, hydration and deviation curve
//! - `categories` - Point budgets per category, tactical placeholder and overall settings

/// Category point budgets, tactical placeholder and overall settings
pub mod categories;
/// Configuration error types
pub mod error;
/// Metric catalog
pub mod metrics;
/// Metabolic and nutrition scoring configuration
pub mod nutrition;

pub use categories::{
    MentalScoringConfig, OverallConfig, PhysicalScoringConfig, ScoreBandThresholds,
    TacticalScoringConfig, TechnicalScoringConfig,
};
pub use error::ConfigError;
pub use metrics::{AgeTiers, Benchmark, MetricCatalogConfig, MetricSpec};
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, DeviationConfig, GoalAdjustmentConfig, HydrationConfig,
    MacroSplit, MacroSplitConfig, NutritionConfig, NutritionWeights,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static SCORING_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

/// Main scoring configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Unit/range table shared by display, scoring and cohort comparison
    pub metrics: MetricCatalogConfig,
    /// Physical category point budgets
    pub physical: PhysicalScoringConfig,
    /// Mental category point budgets
    pub mental: MentalScoringConfig,
    /// Metabolic calculator and nutrition scoring
    pub nutrition: NutritionConfig,
    /// Technical group point budgets
    pub technical: TechnicalScoringConfig,
    /// Tactical placeholder
    pub tactical: TacticalScoringConfig,
    /// Overall progress aggregation
    pub overall: OverallConfig,
}

impl ScoringConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load scoring config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every domain configuration
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.metrics.validate()?;
        self.physical.validate()?;
        self.mental.validate()?;
        self.nutrition.validate()?;
        self.technical.validate()?;
        self.tactical.validate()?;
        self.overall.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Physical section budgets
        Self::apply_env_var(
            "SCORING_PHYSICAL_STRENGTH_POINTS",
            &mut self.physical.strength_points,
        )?;
        Self::apply_env_var(
            "SCORING_PHYSICAL_SPEED_AGILITY_POINTS",
            &mut self.physical.speed_agility_points,
        )?;
        Self::apply_env_var(
            "SCORING_PHYSICAL_ENDURANCE_POINTS",
            &mut self.physical.endurance_points,
        )?;

        // Mental budgets
        Self::apply_env_var("SCORING_MENTAL_MOOD_POINTS", &mut self.mental.mood_points)?;
        Self::apply_env_var("SCORING_MENTAL_SLEEP_POINTS", &mut self.mental.sleep_points)?;

        // Nutrition
        Self::apply_env_var(
            "SCORING_NUTRITION_DEVIATION_DECAY",
            &mut self.nutrition.deviation.decay,
        )?;
        Self::apply_env_var(
            "SCORING_NUTRITION_BULKING_MULTIPLIER",
            &mut self.nutrition.goal_adjustments.bulking,
        )?;
        Self::apply_env_var(
            "SCORING_NUTRITION_CUTTING_MULTIPLIER",
            &mut self.nutrition.goal_adjustments.cutting,
        )?;
        Self::apply_env_var(
            "SCORING_HYDRATION_LITERS_PER_KG",
            &mut self.nutrition.hydration.liters_per_kg,
        )?;
        Self::apply_env_var(
            "SCORING_HYDRATION_HIGH_INTENSITY_BONUS",
            &mut self.nutrition.hydration.high_intensity_bonus_liters,
        )?;

        // Technical budgets
        Self::apply_env_var(
            "SCORING_TECHNICAL_BATTING_POINTS",
            &mut self.technical.batting_points,
        )?;
        Self::apply_env_var(
            "SCORING_TECHNICAL_BOWLING_POINTS",
            &mut self.technical.bowling_points,
        )?;
        Self::apply_env_var(
            "SCORING_TECHNICAL_FIELDING_POINTS",
            &mut self.technical.fielding_points,
        )?;

        // Tactical and overall
        Self::apply_env_var(
            "SCORING_TACTICAL_PLACEHOLDER",
            &mut self.tactical.placeholder_score,
        )?;
        Self::apply_env_var(
            "SCORING_INCLUDE_TACTICAL_PLACEHOLDER",
            &mut self.overall.include_tactical_placeholder,
        )?;
        Self::apply_env_var("SCORING_BAND_EXCELLENT", &mut self.overall.bands.excellent)?;
        Self::apply_env_var("SCORING_BAND_GOOD", &mut self.overall.bands.good)?;
        Self::apply_env_var("SCORING_BAND_FAIR", &mut self.overall.bands.fair)?;

        Ok(self)
    }
}
