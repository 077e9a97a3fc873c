// ABOUTME: Scoring engine turning raw athlete records into category and overall scores
// ABOUTME: Metabolic calculator, deviation scorer, category aggregators, overall progress and cohort comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure, synchronous scoring functions. Every function takes its inputs and a
//! configuration reference and returns plain values; nothing is cached or
//! mutated between calls.

/// Category aggregators
pub mod category_scores;
/// Cohort comparison for display
pub mod cohort_comparison;
/// Exponential closeness-to-target scoring
pub mod deviation;
/// BMR, TDEE and daily nutrition targets
pub mod nutrition_calculator;
/// Overall progress and scorecards
pub mod overall;
/// Parallel batch scoring
pub mod roster;
/// Shared weighted-average helper
pub mod weighted_score;

pub use category_scores::{
    mental_score, nutrition_score, physical_score, physical_test_score, tactical_score,
    technical_score, CategoryScore, NutritionAssessment, NutritionScoringMode,
};
pub use cohort_comparison::{compare_metric, MetricComparison};
pub use deviation::closeness;
pub use nutrition_calculator::{
    calculate_bmr, calculate_macros, calculate_tdee, calculate_water, compute_targets,
    goal_adjusted_calories, metabolic_profile, MacroCalorieGap, MetabolicInputs, MetabolicProfile,
    NutritionTargets,
};
pub use overall::{overall_score, score_record, ScoreBand, Scorecard};
pub use roster::{score_roster, score_roster_with_selections};
pub use weighted_score::{clamp_score, weighted_average, ScoreComponent};
