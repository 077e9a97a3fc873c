// ABOUTME: Criterion benchmarks for record scoring, metabolic targets and roster scoring
// ABOUTME: Measures single-record latency and parallel roster throughput at several sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the scoring engine.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use athlete_scoring::config::ScoringConfig;
use athlete_scoring::intelligence::nutrition_calculator::compute_targets;
use athlete_scoring::intelligence::{score_record, score_roster};
use athlete_scoring::models::{
    ActivityLevel, AthleteProfile, MentalMetric, Metric, NutritionGoal, NutritionMetric,
    PhysicalMetric, RawSkillRecord, ScoringSelections, Sex, TechnicalSkill,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Deterministic record with values spread across every category
#[allow(clippy::cast_precision_loss)]
fn generate_record(index: usize) -> RawSkillRecord {
    let age = 14 + u32::try_from(index % 10).unwrap();
    let jitter = (index % 17) as f64;
    let profile = AthleteProfile::new(age, 160.0 + jitter * 2.0, 55.0 + jitter * 1.5);
    let mut record = RawSkillRecord::with_profile(profile);
    let physical = [
        (PhysicalMetric::Pushups, 40.0 + jitter),
        (PhysicalMetric::Sprint50m, 6.5 + jitter / 10.0),
        (PhysicalMetric::Run5kTime, 18.0 + jitter / 2.0),
    ];
    for (test, value) in physical {
        record.set(Metric::Physical(test), Some(value));
    }
    let mental = [
        (MentalMetric::Mood, 5.0 + (index % 5) as f64),
        (MentalMetric::Sleep, 4.0 + (index % 6) as f64),
    ];
    for (item, value) in mental {
        record.set(Metric::Mental(item), Some(value));
    }
    let nutrition = [
        (NutritionMetric::Calories, 2000.0 + jitter * 40.0),
        (NutritionMetric::Protein, 90.0 + jitter * 3.0),
        (NutritionMetric::Water, 2.0 + jitter / 10.0),
    ];
    for (item, value) in nutrition {
        record.set(Metric::Nutrition(item), Some(value));
    }

    for (offset, skill) in TechnicalSkill::ALL.into_iter().enumerate() {
        if (index + offset) % 3 == 0 {
            record.set(
                Metric::Technical(skill),
                Some(((index + offset) % 11) as f64),
            );
        }
    }
    record
}

fn bench_score_record(c: &mut Criterion) {
    let config = ScoringConfig::default();
    let record = generate_record(7);

    c.bench_function("score_record", |b| {
        b.iter(|| {
            score_record(
                black_box(&record),
                black_box(ScoringSelections::default()),
                &config,
            )
        });
    });
}

fn bench_compute_targets(c: &mut Criterion) {
    let config = ScoringConfig::default();

    c.bench_function("compute_targets", |b| {
        b.iter(|| {
            compute_targets(
                black_box(70.0),
                black_box(175.0),
                black_box(20),
                NutritionGoal::Cutting,
                ActivityLevel::Intense,
                Sex::Female,
                &config.nutrition,
            )
        });
    });
}

fn bench_score_roster(c: &mut Criterion) {
    let config = ScoringConfig::default();
    let mut group = c.benchmark_group("score_roster");

    for count in [10_usize, 100, 1_000] {
        let records: Vec<RawSkillRecord> = (0..count).map(generate_record).collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &records, |b, records| {
            b.iter(|| score_roster(black_box(records), ScoringSelections::default(), &config));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_score_record,
    bench_compute_targets,
    bench_score_roster
);
criterion_main!(benches);
