// ABOUTME: Category aggregators turning raw record fields into 0-100 category scores
// ABOUTME: Physical, mental, nutrition, technical and tactical scorers with per-component breakdowns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Category Aggregators
//!
//! Every scorer follows the same rule: only populated metrics contribute, each
//! carries a point budget, and the category score is the awarded points over
//! the populated points, scaled to 0-100. A category with nothing populated
//! scores 0 and reports `metrics_used == 0` so the overall aggregator can
//! exclude it.

use super::deviation::closeness;
use super::nutrition_calculator::{
    metabolic_profile, MetabolicInputs, MetabolicProfile, NutritionTargets,
};
use super::weighted_score::{clamp_score, weighted_average_of, ScoreComponent};
use crate::config::scoring::{
    MentalScoringConfig, MetricCatalogConfig, MetricSpec, PhysicalScoringConfig, ScoringConfig,
    TacticalScoringConfig, TechnicalScoringConfig,
};
use crate::models::{
    AgeGroup, MentalMetric, Metric, NutritionMetric, PhysicalMetric, RawSkillRecord,
    ScoringSelections, SkillCategory, TechnicalGroup,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Strength tests
const STRENGTH_TESTS: [PhysicalMetric; 4] = [
    PhysicalMetric::Pushups,
    PhysicalMetric::Pullups,
    PhysicalMetric::VerticalJump,
    PhysicalMetric::GripStrength,
];

/// Speed & agility tests
const SPEED_AGILITY_TESTS: [PhysicalMetric; 3] = [
    PhysicalMetric::Sprint50m,
    PhysicalMetric::ShuttleRun,
    PhysicalMetric::SprintTime,
];

/// Endurance tests
const ENDURANCE_TESTS: [PhysicalMetric; 2] = [PhysicalMetric::Run5kTime, PhysicalMetric::YoyoTest];

/// Score for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    /// Category scored
    pub category: SkillCategory,
    /// 0-100
    pub score: f64,
    /// Number of populated metrics that contributed
    pub metrics_used: usize,
    /// Fixed value standing in for a category without measured inputs
    pub is_placeholder: bool,
    /// Populated components and their points
    pub components: Vec<ScoreComponent>,
}

impl CategoryScore {
    fn from_components(
        category: SkillCategory,
        metrics_used: usize,
        components: Vec<ScoreComponent>,
    ) -> Self {
        let score = if metrics_used == 0 {
            0.0
        } else {
            weighted_average_of(&components)
        };
        debug!(
            "Scored {} category: {:.1} from {} metrics",
            category, score, metrics_used
        );
        Self {
            category,
            score,
            metrics_used,
            is_placeholder: false,
            components,
        }
    }

    /// Whether any measured metric contributed
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.metrics_used > 0
    }
}

/// How the nutrition category was scored
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NutritionScoringMode {
    /// Deviation from personalized targets
    Personalized,
    /// Linear position within generic daily ranges
    Generic,
}

/// Nutrition score together with the targets it was measured against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAssessment {
    /// Category score
    pub score: CategoryScore,
    /// Scoring path taken
    pub mode: NutritionScoringMode,
    /// BMR, TDEE and targets when the profile allowed a personalized calculation
    pub metabolic_profile: Option<MetabolicProfile>,
}

/// Single physical test on a 0-10 scale
///
/// Higher-is-better tests score `actual / benchmark * 10`; lower-is-better
/// tests score `benchmark / actual * 10`, with a recorded 0 treated as the best
/// possible result. Both are capped at `max_score`. Returns `None` when the
/// spec has no benchmark.
#[must_use]
pub fn physical_test_score(
    value: f64,
    spec: &MetricSpec,
    age_group: AgeGroup,
    max_score: f64,
) -> Option<f64> {
    let benchmark = spec.benchmark?.for_group(age_group);
    if benchmark <= 0.0 || !value.is_finite() || value < 0.0 {
        return Some(0.0);
    }

    let ratio = if spec.lower_is_better {
        if value <= 0.0 {
            return Some(max_score);
        }
        benchmark / value
    } else {
        value / benchmark
    };
    Some((ratio * max_score).clamp(0.0, max_score))
}

/// Physical category: strength 40, speed & agility 30, endurance 30 points
///
/// A section's score is the mean of its populated 0-10 test scores, carrying
/// the section's full points; sections with no populated test are excluded.
/// Benchmarks follow the athlete's age bracket.
#[must_use]
pub fn physical_score(
    record: &RawSkillRecord,
    catalog: &MetricCatalogConfig,
    config: &PhysicalScoringConfig,
) -> CategoryScore {
    let age_group = record.profile.age_group();
    let sections: [(&str, &[PhysicalMetric], f64); 3] = [
        ("strength", &STRENGTH_TESTS, config.strength_points),
        ("speed_agility", &SPEED_AGILITY_TESTS, config.speed_agility_points),
        ("endurance", &ENDURANCE_TESTS, config.endurance_points),
    ];

    let mut metrics_used = 0;
    let mut components = Vec::new();
    for (section, tests, points) in sections {
        let test_scores: Vec<f64> = tests
            .iter()
            .filter_map(|test| {
                let metric = Metric::Physical(*test);
                let value = record.value(metric)?;
                physical_test_score(
                    value,
                    catalog.spec(metric),
                    age_group,
                    config.max_test_score,
                )
            })
            .collect();
        if test_scores.is_empty() {
            continue;
        }

        metrics_used += test_scores.len();
        let mean = test_scores.iter().sum::<f64>() / test_scores.len() as f64;
        let score = mean / config.max_test_score * 100.0;
        components.push(ScoreComponent::new(section, score, points));
    }

    CategoryScore::from_components(SkillCategory::Physical, metrics_used, components)
}

/// Mental category: mood and sleep self-ratings, 40 points each
#[must_use]
pub fn mental_score(
    record: &RawSkillRecord,
    catalog: &MetricCatalogConfig,
    config: &MentalScoringConfig,
) -> CategoryScore {
    let age_group = record.profile.age_group();
    let components: Vec<ScoreComponent> = [
        (MentalMetric::Mood, config.mood_points),
        (MentalMetric::Sleep, config.sleep_points),
    ]
    .into_iter()
    .filter_map(|(mental, points)| {
        let metric = Metric::Mental(mental);
        let value = record.value(metric)?;
        let spec = catalog.spec(metric);
        let scale = spec
            .benchmark
            .map_or(spec.max, |benchmark| benchmark.for_group(age_group));
        Some(ScoreComponent::new(metric.key(), value / scale * 100.0, points))
    })
    .collect();

    let metrics_used = components.len();
    CategoryScore::from_components(SkillCategory::Mental, metrics_used, components)
}

/// Nutrition category
///
/// With weight, height and age on the profile, each intake is scored by its
/// closeness to the personalized target (weights 25/25/25/12.5/12.5 for
/// calories, protein, carbs, fats, water). Otherwise each intake is scored by
/// its linear position within the generic range from the metric catalog.
#[must_use]
pub fn nutrition_score(
    record: &RawSkillRecord,
    selections: ScoringSelections,
    config: &ScoringConfig,
) -> NutritionAssessment {
    let nutrition = &config.nutrition;
    let profile = MetabolicInputs::from_profile(&record.profile)
        .map(|inputs| metabolic_profile(&inputs, selections, nutrition));

    let mode = if profile.is_some() {
        NutritionScoringMode::Personalized
    } else {
        NutritionScoringMode::Generic
    };

    let components: Vec<ScoreComponent> = NutritionMetric::ALL
        .into_iter()
        .filter_map(|item| {
            let metric = Metric::Nutrition(item);
            let actual = record.value(metric)?;
            let score = match &profile {
                Some(profile) => {
                    let target = nutrition_target(&profile.targets, item);
                    closeness(actual, target, nutrition.deviation.decay)
                }
                None => config.metrics.spec(metric).percent_of_range(actual),
            };
            Some(ScoreComponent::new(metric.key(), score, nutrition_weight(config, item)))
        })
        .collect();

    debug!("Nutrition scored in {:?} mode", mode);
    let metrics_used = components.len();
    NutritionAssessment {
        score: CategoryScore::from_components(SkillCategory::Nutrition, metrics_used, components),
        mode,
        metabolic_profile: profile,
    }
}

/// Technical category: batting 35, bowling 35, fielding 30 points
///
/// A group's score is the mean of its populated sub-skills on the catalog's
/// skill range; groups with no populated sub-skill are excluded.
#[must_use]
pub fn technical_score(
    record: &RawSkillRecord,
    catalog: &MetricCatalogConfig,
    config: &TechnicalScoringConfig,
) -> CategoryScore {
    let mut metrics_used = 0;
    let mut components = Vec::new();

    for group in TechnicalGroup::ALL {
        let values: Vec<f64> = group
            .skills()
            .filter_map(|skill| record.value(Metric::Technical(skill)))
            .collect();
        if values.is_empty() {
            continue;
        }

        metrics_used += values.len();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let spec = &catalog.technical_skill;
        components.push(ScoreComponent::new(
            group.as_str(),
            spec.percent_of_range(mean),
            group_points(config, group),
        ));
    }

    CategoryScore::from_components(SkillCategory::Technical, metrics_used, components)
}

/// Tactical category: fixed placeholder, flagged as such
#[must_use]
pub fn tactical_score(config: &TacticalScoringConfig) -> CategoryScore {
    CategoryScore {
        category: SkillCategory::Tactical,
        score: clamp_score(config.placeholder_score),
        metrics_used: 0,
        is_placeholder: true,
        components: Vec::new(),
    }
}

const fn nutrition_target(targets: &NutritionTargets, metric: NutritionMetric) -> f64 {
    match metric {
        NutritionMetric::Calories => targets.calories,
        NutritionMetric::Protein => targets.protein,
        NutritionMetric::Carbohydrates => targets.carbs,
        NutritionMetric::Fats => targets.fats,
        NutritionMetric::Water => targets.water,
    }
}

const fn nutrition_weight(config: &ScoringConfig, metric: NutritionMetric) -> f64 {
    let weights = &config.nutrition.weights;
    match metric {
        NutritionMetric::Calories => weights.calories,
        NutritionMetric::Protein => weights.protein,
        NutritionMetric::Carbohydrates => weights.carbohydrates,
        NutritionMetric::Fats => weights.fats,
        NutritionMetric::Water => weights.water,
    }
}

const fn group_points(config: &TechnicalScoringConfig, group: TechnicalGroup) -> f64 {
    match group {
        TechnicalGroup::Batting => config.batting_points,
        TechnicalGroup::Bowling => config.bowling_points,
        TechnicalGroup::Fielding => config.fielding_points,
    }
}
