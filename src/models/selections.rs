// ABOUTME: Session-local selectors for nutrition goal, activity level and sex
// ABOUTME: Parsed from dashboard strings and passed by value into the scoring engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nutrition goal driving the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    /// Caloric surplus
    Bulking,
    /// Caloric balance
    #[default]
    Maintaining,
    /// Caloric deficit
    Cutting,
}

impl NutritionGoal {
    /// Stable snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bulking => "bulking",
            Self::Maintaining => "maintaining",
            Self::Cutting => "cutting",
        }
    }
}

impl fmt::Display for NutritionGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NutritionGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bulking" | "bulk" => Ok(Self::Bulking),
            "maintaining" | "maintain" | "maintenance" => Ok(Self::Maintaining),
            "cutting" | "cut" => Ok(Self::Cutting),
            other => Err(AppError::invalid_input(format!(
                "Unknown nutrition goal: '{other}'. Valid options: bulking, maintaining, cutting"
            ))),
        }
    }
}

/// Activity level used for the TDEE multiplier
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Intense,
    /// Twice-daily or physical-job training
    VeryIntense,
}

impl ActivityLevel {
    /// All levels from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Intense,
        Self::VeryIntense,
    ];

    /// Stable snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Intense => "intense",
            Self::VeryIntense => "very_intense",
        }
    }

    /// Whether this level earns the extra hydration allowance
    #[must_use]
    pub const fn is_high_intensity(&self) -> bool {
        matches!(self, Self::Intense | Self::VeryIntense)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "intense" => Ok(Self::Intense),
            "very_intense" => Ok(Self::VeryIntense),
            other => Err(AppError::invalid_input(format!(
                "Unknown activity level: '{other}'. Valid options: sedentary, light, moderate, intense, very_intense"
            ))),
        }
    }
}

/// Sex used for the BMR constant
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male (+5 kcal constant)
    #[default]
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Sex {
    /// Stable snake_case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex: '{other}'. Valid options: male, female"
            ))),
        }
    }
}

/// The three dashboard selectors bundled together
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringSelections {
    /// Nutrition goal
    pub goal: NutritionGoal,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Sex
    pub sex: Sex,
}

impl ScoringSelections {
    /// Create a selection set
    #[must_use]
    pub const fn new(goal: NutritionGoal, activity_level: ActivityLevel, sex: Sex) -> Self {
        Self {
            goal,
            activity_level,
            sex,
        }
    }
}
