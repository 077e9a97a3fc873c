// ABOUTME: Typed identifiers for every measured metric and the skill categories they belong to
// ABOUTME: Provides stable camelCase keys shared by records, cohort averages and the metric catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Skill category a metric contributes to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    /// Strength, speed and endurance tests
    Physical,
    /// Self-rated mood and sleep
    Mental,
    /// Daily intake against targets
    Nutrition,
    /// Coach-rated cricket sub-skills
    Technical,
    /// No measured inputs yet
    Tactical,
}

impl SkillCategory {
    /// All categories in dashboard order
    pub const ALL: [Self; 5] = [
        Self::Physical,
        Self::Mental,
        Self::Nutrition,
        Self::Technical,
        Self::Tactical,
    ];

    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Mental => "mental",
            Self::Nutrition => "nutrition",
            Self::Technical => "technical",
            Self::Tactical => "tactical",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical test metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhysicalMetric {
    /// Push-ups completed (reps)
    Pushups,
    /// Pull-ups completed (reps)
    Pullups,
    /// Vertical jump height (cm)
    VerticalJump,
    /// Grip strength (kg)
    GripStrength,
    /// Generic sprint time (s)
    SprintTime,
    /// 50 m sprint (s)
    Sprint50m,
    /// Shuttle run (s)
    ShuttleRun,
    /// 5 km run (min)
    Run5kTime,
    /// Yo-yo intermittent recovery test (level)
    YoyoTest,
}

impl PhysicalMetric {
    /// All physical metrics
    pub const ALL: [Self; 9] = [
        Self::Pushups,
        Self::Pullups,
        Self::VerticalJump,
        Self::GripStrength,
        Self::SprintTime,
        Self::Sprint50m,
        Self::ShuttleRun,
        Self::Run5kTime,
        Self::YoyoTest,
    ];

    /// Record key
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Pushups => "pushupScore",
            Self::Pullups => "pullupScore",
            Self::VerticalJump => "verticalJump",
            Self::GripStrength => "gripStrength",
            Self::SprintTime => "sprintTime",
            Self::Sprint50m => "sprint50m",
            Self::ShuttleRun => "shuttleRun",
            Self::Run5kTime => "run5kTime",
            Self::YoyoTest => "yoyoTest",
        }
    }
}

/// Mental wellbeing metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MentalMetric {
    /// Self-rated mood (1-10)
    Mood,
    /// Self-rated sleep quality (1-10)
    Sleep,
}

impl MentalMetric {
    /// All mental metrics
    pub const ALL: [Self; 2] = [Self::Mood, Self::Sleep];

    /// Record key
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Mood => "moodScore",
            Self::Sleep => "sleepScore",
        }
    }
}

/// Daily nutrition intake metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NutritionMetric {
    /// Total energy intake (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbohydrates,
    /// Fats (g)
    Fats,
    /// Water (L)
    Water,
}

impl NutritionMetric {
    /// All nutrition metrics
    pub const ALL: [Self; 5] = [
        Self::Calories,
        Self::Protein,
        Self::Carbohydrates,
        Self::Fats,
        Self::Water,
    ];

    /// Record key
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Calories => "totalCalories",
            Self::Protein => "protein",
            Self::Carbohydrates => "carbohydrates",
            Self::Fats => "fats",
            Self::Water => "waterIntake",
        }
    }
}

/// Technical skill group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalGroup {
    /// Batting sub-skills
    Batting,
    /// Bowling sub-skills
    Bowling,
    /// Fielding sub-skills
    Fielding,
}

impl TechnicalGroup {
    /// All groups
    pub const ALL: [Self; 3] = [Self::Batting, Self::Bowling, Self::Fielding];

    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Batting => "batting",
            Self::Bowling => "bowling",
            Self::Fielding => "fielding",
        }
    }

    /// Sub-skills belonging to this group
    #[must_use]
    pub fn skills(self) -> impl Iterator<Item = TechnicalSkill> {
        TechnicalSkill::ALL
            .into_iter()
            .filter(move |skill| skill.group() == self)
    }
}

/// Coach-rated technical sub-skill (0-10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TechnicalSkill {
    // Batting
    /// Front-foot defence
    FrontFootDefense,
    /// Back-foot defence
    BackFootDefense,
    /// Cover drive
    CoverDrive,
    /// Straight drive
    StraightDrive,
    /// Pull shot
    PullShot,
    /// Cut shot
    CutShot,
    /// Sweep shot
    SweepShot,
    /// Running between the wickets
    RunningBetweenWickets,
    /// Shot selection
    ShotSelection,

    // Bowling
    /// Run-up rhythm
    RunUp,
    /// Bowling action
    BowlingAction,
    /// Line consistency
    LineConsistency,
    /// Length control
    LengthControl,
    /// Swing
    SwingBowling,
    /// Seam position
    SeamPosition,
    /// Spin and pace variation
    SpinVariation,
    /// Yorker execution
    YorkerExecution,
    /// Bouncer execution
    BouncerExecution,

    // Fielding
    /// Close catching
    CloseCatching,
    /// Outfield catching
    OutfieldCatching,
    /// Ground fielding
    GroundFielding,
    /// Throwing accuracy
    ThrowingAccuracy,
    /// Throwing power
    ThrowingPower,
    /// Wicket keeping
    WicketKeeping,
    /// Diving stops
    DivingStops,
    /// Anticipation
    Anticipation,
}

impl TechnicalSkill {
    /// All 26 sub-skills, grouped batting, bowling, fielding
    pub const ALL: [Self; 26] = [
        Self::FrontFootDefense,
        Self::BackFootDefense,
        Self::CoverDrive,
        Self::StraightDrive,
        Self::PullShot,
        Self::CutShot,
        Self::SweepShot,
        Self::RunningBetweenWickets,
        Self::ShotSelection,
        Self::RunUp,
        Self::BowlingAction,
        Self::LineConsistency,
        Self::LengthControl,
        Self::SwingBowling,
        Self::SeamPosition,
        Self::SpinVariation,
        Self::YorkerExecution,
        Self::BouncerExecution,
        Self::CloseCatching,
        Self::OutfieldCatching,
        Self::GroundFielding,
        Self::ThrowingAccuracy,
        Self::ThrowingPower,
        Self::WicketKeeping,
        Self::DivingStops,
        Self::Anticipation,
    ];

    /// Group this sub-skill belongs to
    #[must_use]
    pub const fn group(&self) -> TechnicalGroup {
        match self {
            Self::FrontFootDefense
            | Self::BackFootDefense
            | Self::CoverDrive
            | Self::StraightDrive
            | Self::PullShot
            | Self::CutShot
            | Self::SweepShot
            | Self::RunningBetweenWickets
            | Self::ShotSelection => TechnicalGroup::Batting,
            Self::RunUp
            | Self::BowlingAction
            | Self::LineConsistency
            | Self::LengthControl
            | Self::SwingBowling
            | Self::SeamPosition
            | Self::SpinVariation
            | Self::YorkerExecution
            | Self::BouncerExecution => TechnicalGroup::Bowling,
            Self::CloseCatching
            | Self::OutfieldCatching
            | Self::GroundFielding
            | Self::ThrowingAccuracy
            | Self::ThrowingPower
            | Self::WicketKeeping
            | Self::DivingStops
            | Self::Anticipation => TechnicalGroup::Fielding,
        }
    }

    /// Record key
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::FrontFootDefense => "frontFootDefense",
            Self::BackFootDefense => "backFootDefense",
            Self::CoverDrive => "coverDrive",
            Self::StraightDrive => "straightDrive",
            Self::PullShot => "pullShot",
            Self::CutShot => "cutShot",
            Self::SweepShot => "sweepShot",
            Self::RunningBetweenWickets => "runningBetweenWickets",
            Self::ShotSelection => "shotSelection",
            Self::RunUp => "runUp",
            Self::BowlingAction => "bowlingAction",
            Self::LineConsistency => "lineConsistency",
            Self::LengthControl => "lengthControl",
            Self::SwingBowling => "swingBowling",
            Self::SeamPosition => "seamPosition",
            Self::SpinVariation => "spinVariation",
            Self::YorkerExecution => "yorkerExecution",
            Self::BouncerExecution => "bouncerExecution",
            Self::CloseCatching => "closeCatching",
            Self::OutfieldCatching => "outfieldCatching",
            Self::GroundFielding => "groundFielding",
            Self::ThrowingAccuracy => "throwingAccuracy",
            Self::ThrowingPower => "throwingPower",
            Self::WicketKeeping => "wicketKeeping",
            Self::DivingStops => "divingStops",
            Self::Anticipation => "anticipation",
        }
    }
}

/// Any measured metric of a raw skill record
///
/// Serializes as its camelCase record key so it can be used directly as a
/// JSON map key in cohort averages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(into = "String", try_from = "String")]
pub enum Metric {
    /// Physical test
    Physical(PhysicalMetric),
    /// Mental self-rating
    Mental(MentalMetric),
    /// Nutrition intake
    Nutrition(NutritionMetric),
    /// Technical sub-skill
    Technical(TechnicalSkill),
}

impl Metric {
    /// Every measured metric in record order
    pub fn all() -> impl Iterator<Item = Self> {
        PhysicalMetric::ALL
            .into_iter()
            .map(Self::Physical)
            .chain(MentalMetric::ALL.into_iter().map(Self::Mental))
            .chain(NutritionMetric::ALL.into_iter().map(Self::Nutrition))
            .chain(TechnicalSkill::ALL.into_iter().map(Self::Technical))
    }

    /// Record key
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Physical(metric) => metric.key(),
            Self::Mental(metric) => metric.key(),
            Self::Nutrition(metric) => metric.key(),
            Self::Technical(skill) => skill.key(),
        }
    }

    /// Category this metric contributes to
    #[must_use]
    pub const fn category(&self) -> SkillCategory {
        match self {
            Self::Physical(_) => SkillCategory::Physical,
            Self::Mental(_) => SkillCategory::Mental,
            Self::Nutrition(_) => SkillCategory::Nutrition,
            Self::Technical(_) => SkillCategory::Technical,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|metric| metric.key() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown metric key: '{s}'")))
    }
}

impl From<Metric> for String {
    fn from(metric: Metric) -> Self {
        metric.key().to_owned()
    }
}

impl TryFrom<String> for Metric {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
