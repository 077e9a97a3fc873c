// ABOUTME: Data models for athlete skill records, metric identifiers and cohort averages
// ABOUTME: Re-exports RawSkillRecord, Metric, selections and the other engine input types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Input shapes consumed by the scoring engine. All models serialize with
//! camelCase keys, which is the contract with the persistence and UI layers.
//!
//! ## Core Models
//!
//! - `RawSkillRecord`: one submission of test results for one athlete
//! - `Metric`: typed identifier for every measurable field
//! - `CohortAverages`: per-metric means for an age bracket
//! - `ScoringSelections`: nutrition goal, activity level and sex

mod cohort;
mod metric;
mod selections;
mod skill_record;

pub use cohort::CohortAverages;
pub use metric::{
    MentalMetric, Metric, NutritionMetric, PhysicalMetric, SkillCategory, TechnicalGroup,
    TechnicalSkill,
};
pub use selections::{ActivityLevel, NutritionGoal, ScoringSelections, Sex};
pub use skill_record::{
    AgeGroup, AthleteProfile, MentalCheckIn, NutritionIntake, PhysicalTests, RawSkillRecord,
    TechnicalSkills,
};
