// ABOUTME: Metric catalog configuration - display range, step, direction and benchmark per metric
// ABOUTME: Single source of truth shared by input validation, scoring thresholds and cohort comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric Catalog Configuration
//!
//! Every measured metric has exactly one [`MetricSpec`]. The dashboard uses the
//! range and step for its input widgets, the category scorers use the
//! benchmark and direction, and the cohort comparison maps values onto the same
//! range. Keeping them in one entry prevents display and scoring from drifting
//! apart.

use super::error::ConfigError;
use crate::models::{AgeGroup, MentalMetric, Metric, NutritionMetric, PhysicalMetric};
use serde::{Deserialize, Serialize};

/// Benchmark values per age bracket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AgeTiers {
    /// Benchmark for athletes younger than 16
    pub under_16: f64,
    /// Benchmark for athletes aged 16-17
    pub under_18: f64,
    /// Benchmark for athletes 18 and over
    pub senior: f64,
}

impl AgeTiers {
    /// Benchmark for a bracket
    #[must_use]
    pub const fn for_group(&self, group: AgeGroup) -> f64 {
        match group {
            AgeGroup::Under16 => self.under_16,
            AgeGroup::Under18 => self.under_18,
            AgeGroup::Senior => self.senior,
        }
    }
}

/// Reference value a measurement is scored against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Benchmark {
    /// Same benchmark for every athlete
    Fixed {
        /// Benchmark value in the metric's unit
        value: f64,
    },
    /// Benchmark depends on the athlete's age bracket
    AgeTiered(AgeTiers),
}

impl Benchmark {
    /// Benchmark value for a bracket
    #[must_use]
    pub const fn for_group(&self, group: AgeGroup) -> f64 {
        match self {
            Self::Fixed { value } => *value,
            Self::AgeTiered(tiers) => tiers.for_group(group),
        }
    }
}

/// Catalog entry for one metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricSpec {
    /// Unit label shown next to the input
    pub unit: String,
    /// Lower bound of the display range
    pub min: f64,
    /// Upper bound of the display range
    pub max: f64,
    /// Input step
    pub step: f64,
    /// Smaller values are better (times)
    pub lower_is_better: bool,
    /// Scoring benchmark, absent for metrics scored against targets or ranges
    pub benchmark: Option<Benchmark>,
}

impl MetricSpec {
    fn new(unit: &str, min: f64, max: f64, step: f64) -> Self {
        Self {
            unit: unit.to_owned(),
            min,
            max,
            step,
            lower_is_better: false,
            benchmark: None,
        }
    }

    fn lower_is_better(mut self) -> Self {
        self.lower_is_better = true;
        self
    }

    fn fixed(mut self, value: f64) -> Self {
        self.benchmark = Some(Benchmark::Fixed { value });
        self
    }

    fn tiered(mut self, under_16: f64, under_18: f64, senior: f64) -> Self {
        self.benchmark = Some(Benchmark::AgeTiered(AgeTiers {
            under_16,
            under_18,
            senior,
        }));
        self
    }

    /// Position of a value within the display range as a 0-100 percentage,
    /// inverted for lower-is-better metrics
    #[must_use]
    pub fn percent_of_range(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if !value.is_finite() || span <= 0.0 {
            return 0.0;
        }
        let fraction = if self.lower_is_better {
            (self.max - value) / span
        } else {
            (value - self.min) / span
        };
        (fraction * 100.0).clamp(0.0, 100.0)
    }

    fn validate(&self, metric: Metric) -> Result<(), ConfigError> {
        let invalid = |reason| ConfigError::InvalidMetric {
            metric: metric.key(),
            reason,
        };

        if !(self.min.is_finite() && self.max.is_finite()) || self.min >= self.max {
            return Err(invalid("range min must be < max"));
        }
        if self.step <= 0.0 {
            return Err(invalid("step must be positive"));
        }
        match self.benchmark {
            Some(Benchmark::Fixed { value }) if value <= 0.0 => {
                Err(invalid("benchmark must be positive"))
            }
            Some(Benchmark::AgeTiered(tiers)) => {
                if tiers.under_16 <= 0.0 || tiers.under_18 <= 0.0 || tiers.senior <= 0.0 {
                    return Err(invalid("benchmark tiers must be positive"));
                }
                // Younger brackets get the more lenient benchmark
                let ordered = if self.lower_is_better {
                    tiers.under_16 >= tiers.under_18 && tiers.under_18 >= tiers.senior
                } else {
                    tiers.under_16 <= tiers.under_18 && tiers.under_18 <= tiers.senior
                };
                if ordered {
                    Ok(())
                } else {
                    Err(invalid("age tiers must get stricter with age"))
                }
            }
            _ => Ok(()),
        }
    }
}

/// Catalog of every metric's spec
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricCatalogConfig {
    /// Push-ups (reps)
    pub pushups: MetricSpec,
    /// Pull-ups (reps)
    pub pullups: MetricSpec,
    /// Vertical jump (cm)
    pub vertical_jump: MetricSpec,
    /// Grip strength (kg)
    pub grip_strength: MetricSpec,
    /// Sprint time (s)
    pub sprint_time: MetricSpec,
    /// 50 m sprint (s)
    pub sprint_50m: MetricSpec,
    /// Shuttle run (s)
    pub shuttle_run: MetricSpec,
    /// 5 km run (min)
    pub run_5k_time: MetricSpec,
    /// Yo-yo test (level)
    pub yoyo_test: MetricSpec,
    /// Mood rating
    pub mood: MetricSpec,
    /// Sleep rating
    pub sleep: MetricSpec,
    /// Calories; range doubles as the generic nutrition fallback
    pub calories: MetricSpec,
    /// Protein; range doubles as the generic nutrition fallback
    pub protein: MetricSpec,
    /// Carbohydrates; range doubles as the generic nutrition fallback
    pub carbohydrates: MetricSpec,
    /// Fats; range doubles as the generic nutrition fallback
    pub fats: MetricSpec,
    /// Water; range doubles as the generic nutrition fallback
    pub water: MetricSpec,
    /// Shared spec for all 26 technical sub-skills
    pub technical_skill: MetricSpec,
}

impl MetricCatalogConfig {
    /// Spec for a metric
    #[must_use]
    pub const fn spec(&self, metric: Metric) -> &MetricSpec {
        match metric {
            Metric::Physical(physical) => match physical {
                PhysicalMetric::Pushups => &self.pushups,
                PhysicalMetric::Pullups => &self.pullups,
                PhysicalMetric::VerticalJump => &self.vertical_jump,
                PhysicalMetric::GripStrength => &self.grip_strength,
                PhysicalMetric::SprintTime => &self.sprint_time,
                PhysicalMetric::Sprint50m => &self.sprint_50m,
                PhysicalMetric::ShuttleRun => &self.shuttle_run,
                PhysicalMetric::Run5kTime => &self.run_5k_time,
                PhysicalMetric::YoyoTest => &self.yoyo_test,
            },
            Metric::Mental(mental) => match mental {
                MentalMetric::Mood => &self.mood,
                MentalMetric::Sleep => &self.sleep,
            },
            Metric::Nutrition(nutrition) => match nutrition {
                NutritionMetric::Calories => &self.calories,
                NutritionMetric::Protein => &self.protein,
                NutritionMetric::Carbohydrates => &self.carbohydrates,
                NutritionMetric::Fats => &self.fats,
                NutritionMetric::Water => &self.water,
            },
            Metric::Technical(_) => &self.technical_skill,
        }
    }

    /// Validate every entry
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMetric` for the first inconsistent entry
    pub fn validate(&self) -> Result<(), ConfigError> {
        for metric in Metric::all() {
            self.spec(metric).validate(metric)?;
        }

        // Physical metrics are scored against benchmarks and need one
        for metric in PhysicalMetric::ALL.map(Metric::Physical) {
            if self.spec(metric).benchmark.is_none() {
                return Err(ConfigError::InvalidMetric {
                    metric: metric.key(),
                    reason: "physical metrics require a benchmark",
                });
            }
        }
        Ok(())
    }
}

impl Default for MetricCatalogConfig {
    fn default() -> Self {
        Self {
            // Strength: age-tiered where growth matters most
            pushups: MetricSpec::new("reps", 0.0, 100.0, 1.0).tiered(60.0, 70.0, 80.0),
            pullups: MetricSpec::new("reps", 0.0, 40.0, 1.0).fixed(20.0),
            vertical_jump: MetricSpec::new("cm", 0.0, 100.0, 1.0).fixed(65.0),
            grip_strength: MetricSpec::new("kg", 0.0, 80.0, 0.5).tiered(35.0, 40.0, 45.0),

            // Speed & agility
            sprint_time: MetricSpec::new("s", 5.0, 20.0, 0.01)
                .lower_is_better()
                .fixed(10.0),
            sprint_50m: MetricSpec::new("s", 5.0, 12.0, 0.01)
                .lower_is_better()
                .fixed(6.5),
            shuttle_run: MetricSpec::new("s", 8.0, 20.0, 0.01)
                .lower_is_better()
                .fixed(12.0),

            // Endurance
            run_5k_time: MetricSpec::new("min", 12.0, 40.0, 0.1)
                .lower_is_better()
                .tiered(18.0, 17.0, 16.0),
            yoyo_test: MetricSpec::new("level", 0.0, 25.0, 0.1).fixed(25.0),

            // Mental self-ratings
            mood: MetricSpec::new("score", 1.0, 10.0, 1.0).fixed(10.0),
            sleep: MetricSpec::new("score", 1.0, 10.0, 1.0).fixed(10.0),

            // Nutrition: generic daily ranges
            calories: MetricSpec::new("kcal", 1200.0, 3500.0, 50.0),
            protein: MetricSpec::new("g", 40.0, 200.0, 1.0),
            carbohydrates: MetricSpec::new("g", 100.0, 500.0, 1.0),
            fats: MetricSpec::new("g", 30.0, 120.0, 1.0),
            water: MetricSpec::new("L", 1.0, 5.0, 0.1),

            technical_skill: MetricSpec::new("score", 0.0, 10.0, 0.5).fixed(10.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        MetricCatalogConfig::default().validate().unwrap();
    }

    #[test]
    fn test_percent_of_range_inverts_lower_is_better() {
        let catalog = MetricCatalogConfig::default();
        let sprint = catalog.spec(Metric::Physical(PhysicalMetric::Sprint50m));
        assert!((sprint.percent_of_range(5.0) - 100.0).abs() < f64::EPSILON);
        assert!(sprint.percent_of_range(12.0).abs() < f64::EPSILON);
        assert!((sprint.percent_of_range(3.0) - 100.0).abs() < f64::EPSILON);

        let jump = catalog.spec(Metric::Physical(PhysicalMetric::VerticalJump));
        assert!((jump.percent_of_range(50.0) - 50.0).abs() < 1e-9);
        assert!(jump.percent_of_range(f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_out_of_order_tiers_rejected() {
        let mut catalog = MetricCatalogConfig::default();
        catalog.pushups = MetricSpec::new("reps", 0.0, 100.0, 1.0).tiered(80.0, 70.0, 60.0);
        let error = catalog.validate().unwrap_err();
        assert!(error.to_string().contains("pushupScore"));
    }

    #[test]
    fn test_physical_metric_without_benchmark_rejected() {
        let mut catalog = MetricCatalogConfig::default();
        catalog.pullups.benchmark = None;
        assert!(catalog.validate().is_err());
    }
}
