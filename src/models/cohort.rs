// ABOUTME: Cohort averages model - per-metric means for an age bracket
// ABOUTME: Display-only comparison data supplied by the persistence layer or built from records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AgeGroup, Metric, RawSkillRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-metric mean values for athletes in one age bracket
///
/// Used only for "you vs. your age group" displays; never feeds into scores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CohortAverages {
    /// Bracket label, e.g. "U18"
    pub age_group: String,
    /// Number of records the means were computed from
    pub sample_size: u32,
    /// Mean value per metric key
    #[serde(default)]
    pub averages: BTreeMap<Metric, f64>,
}

impl CohortAverages {
    /// Mean for a metric, if the cohort has one
    #[must_use]
    pub fn mean(&self, metric: Metric) -> Option<f64> {
        self.averages
            .get(&metric)
            .copied()
            .filter(|v| v.is_finite())
    }

    /// Build averages from a set of records in one bracket
    ///
    /// Each metric's mean only counts records that carry a valid value for it.
    #[must_use]
    pub fn from_records(age_group: AgeGroup, records: &[RawSkillRecord]) -> Self {
        let mut averages = BTreeMap::new();
        for metric in Metric::all() {
            let (sum, count) = records
                .iter()
                .filter_map(|record| record.value(metric))
                .fold((0.0, 0_u32), |(sum, count), value| (sum + value, count + 1));
            if count > 0 {
                averages.insert(metric, sum / f64::from(count));
            }
        }

        Self {
            age_group: age_group.label().to_owned(),
            sample_size: u32::try_from(records.len()).unwrap_or(u32::MAX),
            averages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AthleteProfile, PhysicalMetric};

    #[test]
    fn test_from_records_skips_missing_values() {
        let profile = AthleteProfile::new(17, 175.0, 70.0);
        let pushups = Metric::Physical(PhysicalMetric::Pushups);
        let records = vec![
            RawSkillRecord::with_profile(profile).with(pushups, 60.0),
            RawSkillRecord::with_profile(profile).with(pushups, 80.0),
            RawSkillRecord::with_profile(profile),
        ];

        let cohort = CohortAverages::from_records(AgeGroup::Under18, &records);
        assert_eq!(cohort.age_group, "U18");
        assert_eq!(cohort.sample_size, 3);
        assert!((cohort.mean(pushups).unwrap() - 70.0).abs() < f64::EPSILON);
        assert!(cohort
            .mean(Metric::Physical(PhysicalMetric::Pullups))
            .is_none());
    }

    #[test]
    fn test_cohort_json_uses_metric_keys() {
        let json = r#"{"ageGroup":"Senior","sampleSize":12,"averages":{"pushupScore":55.5,"sprint50m":7.1}}"#;
        let cohort: CohortAverages = serde_json::from_str(json).unwrap();
        assert_eq!(cohort.sample_size, 12);
        assert_eq!(
            cohort.mean(Metric::Physical(PhysicalMetric::Sprint50m)),
            Some(7.1)
        );
    }
}
