// ABOUTME: Batch scoring of many athlete records in parallel
// ABOUTME: Each record is independent, so scorecards are computed with rayon data parallelism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::overall::{score_record, Scorecard};
use crate::config::scoring::ScoringConfig;
use crate::models::{RawSkillRecord, ScoringSelections};
use rayon::prelude::*;
use tracing::debug;

/// Scorecards for a roster, in input order
///
/// All records share one set of selections.
#[must_use]
pub fn score_roster(
    records: &[RawSkillRecord],
    selections: ScoringSelections,
    config: &ScoringConfig,
) -> Vec<Scorecard> {
    debug!("Scoring roster of {} records", records.len());
    records
        .par_iter()
        .map(|record| score_record(record, selections, config))
        .collect()
}

/// Scorecards for records that each carry their own selections
#[must_use]
pub fn score_roster_with_selections(
    entries: &[(RawSkillRecord, ScoringSelections)],
    config: &ScoringConfig,
) -> Vec<Scorecard> {
    entries
        .par_iter()
        .map(|(record, selections)| score_record(record, *selections, config))
        .collect()
}
