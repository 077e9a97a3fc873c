// ABOUTME: Raw skill record submitted per athlete, with embedded profile and grouped metric fields
// ABOUTME: Every measurement is optional; accessors expose only valid, present values to the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::metric::{MentalMetric, Metric, NutritionMetric, PhysicalMetric, TechnicalSkill};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Age bracket used for age-tiered benchmarks and cohort grouping
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum AgeGroup {
    /// Younger than 16
    #[serde(rename = "U16")]
    Under16,
    /// 16 or 17
    #[serde(rename = "U18")]
    Under18,
    /// 18 and over
    #[default]
    Senior,
}

impl AgeGroup {
    /// Bracket for an age in years; unknown age falls in the senior bracket
    #[must_use]
    pub const fn from_age(age: Option<u32>) -> Self {
        match age {
            Some(years) if years < 16 => Self::Under16,
            Some(years) if years < 18 => Self::Under18,
            _ => Self::Senior,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Under16 => "U16",
            Self::Under18 => "U18",
            Self::Senior => "Senior",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Athlete biometrics embedded in each record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AthleteProfile {
    /// Age in years
    pub age: Option<u32>,
    /// Height in centimeters
    #[serde(rename = "height")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(rename = "weight")]
    pub weight_kg: Option<f64>,
}

impl AthleteProfile {
    /// Create a fully populated profile
    #[must_use]
    pub const fn new(age: u32, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            age: Some(age),
            height_cm: Some(height_cm),
            weight_kg: Some(weight_kg),
        }
    }

    /// Age bracket for benchmarks
    #[must_use]
    pub const fn age_group(&self) -> AgeGroup {
        AgeGroup::from_age(self.age)
    }
}

/// Physical test results
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalTests {
    /// Push-ups (reps)
    pub pushup_score: Option<f64>,
    /// Pull-ups (reps)
    pub pullup_score: Option<f64>,
    /// Vertical jump (cm)
    pub vertical_jump: Option<f64>,
    /// Grip strength (kg)
    pub grip_strength: Option<f64>,
    /// Sprint time (s)
    pub sprint_time: Option<f64>,
    /// 50 m sprint (s)
    #[serde(rename = "sprint50m")]
    pub sprint_50m: Option<f64>,
    /// Shuttle run (s)
    pub shuttle_run: Option<f64>,
    /// 5 km run (min)
    #[serde(rename = "run5kTime")]
    pub run_5k_time: Option<f64>,
    /// Yo-yo test (level)
    pub yoyo_test: Option<f64>,
}

/// Mental check-in ratings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MentalCheckIn {
    /// Mood (1-10)
    pub mood_score: Option<f64>,
    /// Sleep quality (1-10)
    pub sleep_score: Option<f64>,
}

/// Daily nutrition intake
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionIntake {
    /// Energy (kcal)
    pub total_calories: Option<f64>,
    /// Protein (g)
    pub protein: Option<f64>,
    /// Carbohydrates (g)
    pub carbohydrates: Option<f64>,
    /// Fats (g)
    pub fats: Option<f64>,
    /// Water (L)
    pub water_intake: Option<f64>,
}

/// Coach-rated technical sub-skills (each 0-10)
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSkills {
    pub front_foot_defense: Option<f64>,
    pub back_foot_defense: Option<f64>,
    pub cover_drive: Option<f64>,
    pub straight_drive: Option<f64>,
    pub pull_shot: Option<f64>,
    pub cut_shot: Option<f64>,
    pub sweep_shot: Option<f64>,
    pub running_between_wickets: Option<f64>,
    pub shot_selection: Option<f64>,
    pub run_up: Option<f64>,
    pub bowling_action: Option<f64>,
    pub line_consistency: Option<f64>,
    pub length_control: Option<f64>,
    pub swing_bowling: Option<f64>,
    pub seam_position: Option<f64>,
    pub spin_variation: Option<f64>,
    pub yorker_execution: Option<f64>,
    pub bouncer_execution: Option<f64>,
    pub close_catching: Option<f64>,
    pub outfield_catching: Option<f64>,
    pub ground_fielding: Option<f64>,
    pub throwing_accuracy: Option<f64>,
    pub throwing_power: Option<f64>,
    pub wicket_keeping: Option<f64>,
    pub diving_stops: Option<f64>,
    pub anticipation: Option<f64>,
}

impl TechnicalSkills {
    fn slot_mut(&mut self, skill: TechnicalSkill) -> &mut Option<f64> {
        match skill {
            TechnicalSkill::FrontFootDefense => &mut self.front_foot_defense,
            TechnicalSkill::BackFootDefense => &mut self.back_foot_defense,
            TechnicalSkill::CoverDrive => &mut self.cover_drive,
            TechnicalSkill::StraightDrive => &mut self.straight_drive,
            TechnicalSkill::PullShot => &mut self.pull_shot,
            TechnicalSkill::CutShot => &mut self.cut_shot,
            TechnicalSkill::SweepShot => &mut self.sweep_shot,
            TechnicalSkill::RunningBetweenWickets => &mut self.running_between_wickets,
            TechnicalSkill::ShotSelection => &mut self.shot_selection,
            TechnicalSkill::RunUp => &mut self.run_up,
            TechnicalSkill::BowlingAction => &mut self.bowling_action,
            TechnicalSkill::LineConsistency => &mut self.line_consistency,
            TechnicalSkill::LengthControl => &mut self.length_control,
            TechnicalSkill::SwingBowling => &mut self.swing_bowling,
            TechnicalSkill::SeamPosition => &mut self.seam_position,
            TechnicalSkill::SpinVariation => &mut self.spin_variation,
            TechnicalSkill::YorkerExecution => &mut self.yorker_execution,
            TechnicalSkill::BouncerExecution => &mut self.bouncer_execution,
            TechnicalSkill::CloseCatching => &mut self.close_catching,
            TechnicalSkill::OutfieldCatching => &mut self.outfield_catching,
            TechnicalSkill::GroundFielding => &mut self.ground_fielding,
            TechnicalSkill::ThrowingAccuracy => &mut self.throwing_accuracy,
            TechnicalSkill::ThrowingPower => &mut self.throwing_power,
            TechnicalSkill::WicketKeeping => &mut self.wicket_keeping,
            TechnicalSkill::DivingStops => &mut self.diving_stops,
            TechnicalSkill::Anticipation => &mut self.anticipation,
        }
    }

    /// Stored rating for a sub-skill
    #[must_use]
    pub const fn get(&self, skill: TechnicalSkill) -> Option<f64> {
        match skill {
            TechnicalSkill::FrontFootDefense => self.front_foot_defense,
            TechnicalSkill::BackFootDefense => self.back_foot_defense,
            TechnicalSkill::CoverDrive => self.cover_drive,
            TechnicalSkill::StraightDrive => self.straight_drive,
            TechnicalSkill::PullShot => self.pull_shot,
            TechnicalSkill::CutShot => self.cut_shot,
            TechnicalSkill::SweepShot => self.sweep_shot,
            TechnicalSkill::RunningBetweenWickets => self.running_between_wickets,
            TechnicalSkill::ShotSelection => self.shot_selection,
            TechnicalSkill::RunUp => self.run_up,
            TechnicalSkill::BowlingAction => self.bowling_action,
            TechnicalSkill::LineConsistency => self.line_consistency,
            TechnicalSkill::LengthControl => self.length_control,
            TechnicalSkill::SwingBowling => self.swing_bowling,
            TechnicalSkill::SeamPosition => self.seam_position,
            TechnicalSkill::SpinVariation => self.spin_variation,
            TechnicalSkill::YorkerExecution => self.yorker_execution,
            TechnicalSkill::BouncerExecution => self.bouncer_execution,
            TechnicalSkill::CloseCatching => self.close_catching,
            TechnicalSkill::OutfieldCatching => self.outfield_catching,
            TechnicalSkill::GroundFielding => self.ground_fielding,
            TechnicalSkill::ThrowingAccuracy => self.throwing_accuracy,
            TechnicalSkill::ThrowingPower => self.throwing_power,
            TechnicalSkill::WicketKeeping => self.wicket_keeping,
            TechnicalSkill::DivingStops => self.diving_stops,
            TechnicalSkill::Anticipation => self.anticipation,
        }
    }
}

/// One snapshot of an athlete's measurements
///
/// Absent fields are excluded from scoring; a recorded zero is a real
/// measurement. Non-finite or negative values are not valid measurements and
/// are reported as absent by [`RawSkillRecord::value`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawSkillRecord {
    /// Athlete biometrics
    #[serde(default)]
    pub profile: AthleteProfile,
    /// Physical tests
    #[serde(flatten)]
    pub physical: PhysicalTests,
    /// Mental check-in
    #[serde(flatten)]
    pub mental: MentalCheckIn,
    /// Nutrition intake
    #[serde(flatten)]
    pub nutrition: NutritionIntake,
    /// Technical sub-skills
    #[serde(flatten)]
    pub technical: TechnicalSkills,
}

impl RawSkillRecord {
    /// Empty record with the given profile
    #[must_use]
    pub fn with_profile(profile: AthleteProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    /// Builder-style setter used by fixtures and importers
    #[must_use]
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.set(metric, Some(value));
        self
    }

    /// Set or clear a metric
    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        *self.slot_mut(metric) = value;
    }

    /// Stored value, exactly as submitted
    #[must_use]
    pub const fn raw(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Physical(physical) => match physical {
                PhysicalMetric::Pushups => self.physical.pushup_score,
                PhysicalMetric::Pullups => self.physical.pullup_score,
                PhysicalMetric::VerticalJump => self.physical.vertical_jump,
                PhysicalMetric::GripStrength => self.physical.grip_strength,
                PhysicalMetric::SprintTime => self.physical.sprint_time,
                PhysicalMetric::Sprint50m => self.physical.sprint_50m,
                PhysicalMetric::ShuttleRun => self.physical.shuttle_run,
                PhysicalMetric::Run5kTime => self.physical.run_5k_time,
                PhysicalMetric::YoyoTest => self.physical.yoyo_test,
            },
            Metric::Mental(mental) => match mental {
                MentalMetric::Mood => self.mental.mood_score,
                MentalMetric::Sleep => self.mental.sleep_score,
            },
            Metric::Nutrition(nutrition) => match nutrition {
                NutritionMetric::Calories => self.nutrition.total_calories,
                NutritionMetric::Protein => self.nutrition.protein,
                NutritionMetric::Carbohydrates => self.nutrition.carbohydrates,
                NutritionMetric::Fats => self.nutrition.fats,
                NutritionMetric::Water => self.nutrition.water_intake,
            },
            Metric::Technical(skill) => self.technical.get(skill),
        }
    }

    /// Valid measurement for a metric: present, finite and non-negative
    #[must_use]
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.raw(metric)
            .filter(|value| value.is_finite() && *value >= 0.0)
    }

    /// Decode a record from its JSON form
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON is malformed or a field has the wrong type
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the record as JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut Option<f64> {
        match metric {
            Metric::Physical(physical) => match physical {
                PhysicalMetric::Pushups => &mut self.physical.pushup_score,
                PhysicalMetric::Pullups => &mut self.physical.pullup_score,
                PhysicalMetric::VerticalJump => &mut self.physical.vertical_jump,
                PhysicalMetric::GripStrength => &mut self.physical.grip_strength,
                PhysicalMetric::SprintTime => &mut self.physical.sprint_time,
                PhysicalMetric::Sprint50m => &mut self.physical.sprint_50m,
                PhysicalMetric::ShuttleRun => &mut self.physical.shuttle_run,
                PhysicalMetric::Run5kTime => &mut self.physical.run_5k_time,
                PhysicalMetric::YoyoTest => &mut self.physical.yoyo_test,
            },
            Metric::Mental(mental) => match mental {
                MentalMetric::Mood => &mut self.mental.mood_score,
                MentalMetric::Sleep => &mut self.mental.sleep_score,
            },
            Metric::Nutrition(nutrition) => match nutrition {
                NutritionMetric::Calories => &mut self.nutrition.total_calories,
                NutritionMetric::Protein => &mut self.nutrition.protein,
                NutritionMetric::Carbohydrates => &mut self.nutrition.carbohydrates,
                NutritionMetric::Fats => &mut self.nutrition.fats,
                NutritionMetric::Water => &mut self.nutrition.water_intake,
            },
            Metric::Technical(skill) => self.technical.slot_mut(skill),
        }
    }
}
