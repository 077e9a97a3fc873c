// ABOUTME: Overall progress aggregation and the per-record scorecard
// ABOUTME: Averages populated category scores into one 0-100 value and classifies it into a badge band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::category_scores::{
    mental_score, nutrition_score, physical_score, tactical_score, technical_score, CategoryScore,
    NutritionScoringMode,
};
use super::nutrition_calculator::{MetabolicProfile, NutritionTargets};
use crate::config::scoring::{OverallConfig, ScoreBandThresholds, ScoringConfig};
use crate::models::{RawSkillRecord, ScoringSelections, SkillCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Dashboard badge for a score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Below the fair threshold
    NeedsWork,
    /// At or above fair
    Fair,
    /// At or above good
    Good,
    /// At or above excellent
    Excellent,
}

impl ScoreBand {
    /// Classify a 0-100 score
    #[must_use]
    pub fn from_score(score: f64, thresholds: &ScoreBandThresholds) -> Self {
        if score >= thresholds.excellent {
            Self::Excellent
        } else if score >= thresholds.good {
            Self::Good
        } else if score >= thresholds.fair {
            Self::Fair
        } else {
            Self::NeedsWork
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsWork => "Needs Work",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall progress: rounded mean of populated category scores
///
/// A category counts when it has at least one measured metric, or when it is
/// a placeholder and `include_tactical_placeholder` is set. With no measured
/// category at all the overall is 0, whatever the placeholder setting.
#[must_use]
pub fn overall_score<'a>(
    categories: impl IntoIterator<Item = &'a CategoryScore>,
    config: &OverallConfig,
) -> u8 {
    let categories: Vec<&CategoryScore> = categories.into_iter().collect();
    if !categories.iter().any(|c| c.has_data()) {
        return 0;
    }

    let included: Vec<f64> = categories
        .iter()
        .filter(|c| c.has_data() || (c.is_placeholder && config.include_tactical_placeholder))
        .map(|c| c.score)
        .filter(|score| score.is_finite())
        .collect();
    if included.is_empty() {
        return 0;
    }

    let mean = included.iter().sum::<f64>() / included.len() as f64;
    mean.round().clamp(0.0, 100.0) as u8
}

/// All category scores for one record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    /// Physical category
    pub physical: CategoryScore,
    /// Mental category
    pub mental: CategoryScore,
    /// Nutrition category
    pub nutrition: CategoryScore,
    /// Technical category
    pub technical: CategoryScore,
    /// Tactical placeholder
    pub tactical: CategoryScore,
    /// Nutrition scoring path
    pub nutrition_mode: NutritionScoringMode,
    /// Personalized metabolic values, when available
    pub metabolic_profile: Option<MetabolicProfile>,
    /// Overall progress 0-100
    pub overall: u8,
    /// Badge for the overall score
    pub band: ScoreBand,
}

impl Scorecard {
    /// Score for one category
    #[must_use]
    pub const fn category(&self, category: SkillCategory) -> &CategoryScore {
        match category {
            SkillCategory::Physical => &self.physical,
            SkillCategory::Mental => &self.mental,
            SkillCategory::Nutrition => &self.nutrition,
            SkillCategory::Technical => &self.technical,
            SkillCategory::Tactical => &self.tactical,
        }
    }

    /// Category scores in display order
    #[must_use]
    pub fn categories(&self) -> [&CategoryScore; 5] {
        SkillCategory::ALL.map(|category| self.category(category))
    }

    /// Personalized nutrition targets, when available
    #[must_use]
    pub fn nutrition_targets(&self) -> Option<NutritionTargets> {
        self.metabolic_profile.map(|profile| profile.targets)
    }
}

/// Score every category of a record and aggregate the overall
#[must_use]
pub fn score_record(
    record: &RawSkillRecord,
    selections: ScoringSelections,
    config: &ScoringConfig,
) -> Scorecard {
    let nutrition = nutrition_score(record, selections, config);
    let physical = physical_score(record, &config.metrics, &config.physical);
    let mental = mental_score(record, &config.metrics, &config.mental);
    let technical = technical_score(record, &config.metrics, &config.technical);
    let tactical = tactical_score(&config.tactical);

    let overall = overall_score(
        [&physical, &mental, &nutrition.score, &technical, &tactical],
        &config.overall,
    );
    let band = ScoreBand::from_score(f64::from(overall), &config.overall.bands);
    debug!("Overall progress {} ({})", overall, band);

    Scorecard {
        physical,
        mental,
        nutrition: nutrition.score,
        technical,
        tactical,
        nutrition_mode: nutrition.mode,
        metabolic_profile: nutrition.metabolic_profile,
        overall,
        band,
    }
}
