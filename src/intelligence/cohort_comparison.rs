// ABOUTME: Cohort comparison helper placing athlete and age-group values on the metric's display range
// ABOUTME: Display-only; uses the same metric catalog as scoring so directions never disagree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::scoring::MetricCatalogConfig;
use crate::models::{CohortAverages, Metric, RawSkillRecord};
use serde::{Deserialize, Serialize};

/// Athlete value next to the cohort mean for one metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    /// Metric compared
    pub metric: Metric,
    /// Athlete's recorded value
    pub athlete_value: f64,
    /// Cohort mean
    pub cohort_mean: f64,
    /// Athlete position on the display range, 0-100, inverted for lower-is-better
    pub athlete_percent: f64,
    /// Cohort position on the display range, 0-100, inverted for lower-is-better
    pub cohort_percent: f64,
    /// Athlete is on the better side of the cohort mean
    pub ahead_of_cohort: bool,
}

/// Compare one value against a cohort mean
#[must_use]
pub fn compare_metric(
    metric: Metric,
    athlete_value: f64,
    cohort_mean: f64,
    catalog: &MetricCatalogConfig,
) -> MetricComparison {
    let spec = catalog.spec(metric);
    let ahead_of_cohort = if spec.lower_is_better {
        athlete_value < cohort_mean
    } else {
        athlete_value > cohort_mean
    };

    MetricComparison {
        metric,
        athlete_value,
        cohort_mean,
        athlete_percent: spec.percent_of_range(athlete_value),
        cohort_percent: spec.percent_of_range(cohort_mean),
        ahead_of_cohort,
    }
}

impl CohortAverages {
    /// Comparisons for every metric present in both the record and the cohort
    #[must_use]
    pub fn compare_record(
        &self,
        record: &RawSkillRecord,
        catalog: &MetricCatalogConfig,
    ) -> Vec<MetricComparison> {
        Metric::all()
            .filter_map(|metric| {
                let athlete_value = record.value(metric)?;
                let cohort_mean = self.mean(metric)?;
                Some(compare_metric(metric, athlete_value, cohort_mean, catalog))
            })
            .collect()
    }
}
