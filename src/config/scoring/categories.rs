// ABOUTME: Point budgets for the physical, mental and technical categories plus tactical and overall settings
// ABOUTME: Controls how sub-scores re-normalize into 0-100 category scores and the overall progress score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Physical category: strength, speed & agility and endurance sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicalScoringConfig {
    /// Strength section points (pushups, pullups, vertical jump, grip): 40
    pub strength_points: f64,
    /// Speed & agility section points (sprints, shuttle run): 30
    pub speed_agility_points: f64,
    /// Endurance section points (5 km run, yo-yo test): 30
    pub endurance_points: f64,
    /// Ceiling for a single test ratio: 10
    pub max_test_score: f64,
}

/// Mental category: mood and sleep self-ratings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentalScoringConfig {
    /// Mood points: 40
    pub mood_points: f64,
    /// Sleep points: 40
    pub sleep_points: f64,
}

/// Technical category: batting, bowling and fielding groups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalScoringConfig {
    /// Batting group points: 35
    pub batting_points: f64,
    /// Bowling group points: 35
    pub bowling_points: f64,
    /// Fielding group points: 30
    pub fielding_points: f64,
}

/// Tactical category has no measured inputs yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TacticalScoringConfig {
    /// Fixed placeholder score: 65
    pub placeholder_score: f64,
}

/// Score thresholds for dashboard badges
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBandThresholds {
    /// Excellent at or above: 85
    pub excellent: f64,
    /// Good at or above: 70
    pub good: f64,
    /// Fair at or above: 50
    pub fair: f64,
}

/// Overall progress settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallConfig {
    /// Count the tactical placeholder as a populated category
    pub include_tactical_placeholder: bool,
    /// Badge thresholds
    pub bands: ScoreBandThresholds,
}

fn ensure_positive(points: &[f64], message: &'static str) -> Result<(), ConfigError> {
    if points.iter().all(|p| p.is_finite() && *p > 0.0) {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeights(message))
    }
}

impl PhysicalScoringConfig {
    /// Validate physical point budgets
    ///
    /// # Errors
    ///
    /// Returns an error if any point budget or the test ceiling is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(
            &[
                self.strength_points,
                self.speed_agility_points,
                self.endurance_points,
            ],
            "Physical section points must be positive",
        )?;
        if self.max_test_score <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("Physical test ceiling must be positive"));
        }
        Ok(())
    }
}

impl MentalScoringConfig {
    /// Validate mental point budgets
    ///
    /// # Errors
    ///
    /// Returns an error if a point budget is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(
            &[self.mood_points, self.sleep_points],
            "Mental metric points must be positive",
        )
    }
}

impl TechnicalScoringConfig {
    /// Validate technical group budgets
    ///
    /// # Errors
    ///
    /// Returns an error if a point budget is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive(
            &[
                self.batting_points,
                self.bowling_points,
                self.fielding_points,
            ],
            "Technical group points must be positive",
        )
    }
}

impl TacticalScoringConfig {
    /// Validate the placeholder
    ///
    /// # Errors
    ///
    /// Returns an error if the placeholder is outside 0-100
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (0.0..=100.0).contains(&self.placeholder_score) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange("Tactical placeholder must be between 0 and 100"))
        }
    }
}

impl OverallConfig {
    /// Validate band thresholds
    ///
    /// # Errors
    ///
    /// Returns an error unless 0 <= fair < good < excellent <= 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bands = &self.bands;
        if bands.fair >= 0.0
            && bands.fair < bands.good
            && bands.good < bands.excellent
            && bands.excellent <= 100.0
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange(
                "Score bands must satisfy 0 <= fair < good < excellent <= 100",
            ))
        }
    }
}

impl Default for PhysicalScoringConfig {
    fn default() -> Self {
        Self {
            strength_points: 40.0,
            speed_agility_points: 30.0,
            endurance_points: 30.0,
            max_test_score: 10.0,
        }
    }
}

impl Default for MentalScoringConfig {
    fn default() -> Self {
        Self {
            mood_points: 40.0,
            sleep_points: 40.0,
        }
    }
}

impl Default for TechnicalScoringConfig {
    fn default() -> Self {
        Self {
            batting_points: 35.0,
            bowling_points: 35.0,
            fielding_points: 30.0,
        }
    }
}

impl Default for TacticalScoringConfig {
    fn default() -> Self {
        Self {
            placeholder_score: 65.0,
        }
    }
}

impl Default for ScoreBandThresholds {
    fn default() -> Self {
        Self {
            excellent: 85.0,
            good: 70.0,
            fair: 50.0,
        }
    }
}

impl Default for OverallConfig {
    fn default() -> Self {
        Self {
            include_tactical_placeholder: true,
            bands: ScoreBandThresholds::default(),
        }
    }
}
