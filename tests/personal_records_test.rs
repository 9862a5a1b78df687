// ABOUTME: Integration tests for personal record detection and live set classification
// ABOUTME: Covers record scanning, tie handling, first/near/new comparisons and the recent window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{active_session, completed_session, date, done, exercise};
use ironlog_core::models::{ExerciseCatalog, WorkoutSet};
use ironlog_intelligence::{classify_set, compute_records, recent_records_at, PrMetric};

#[test]
fn test_squat_record_from_single_session() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let history = vec![completed_session(
        date(2025, 3, 14),
        45,
        vec![exercise(
            "ex_squat",
            vec![done(50.0, 10), done(50.0, 10), done(50.0, 10)],
        )],
    )];

    let records = compute_records(&history, &catalog);
    let squat = &records["ex_squat"];
    assert_eq!(squat.exercise_name, "Squat / Goblet Squat");
    assert!((squat.max_weight - 50.0).abs() < f64::EPSILON);
    assert_eq!(squat.max_weight_date, Some(date(2025, 3, 14)));
    assert_eq!(squat.max_reps, 10);
    assert!((squat.max_volume - 500.0).abs() < f64::EPSILON);
    assert!((squat.total_volume - 1500.0).abs() < f64::EPSILON);
}

#[test]
fn test_earliest_date_wins_ties() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    // Given out of order on purpose
    let history = vec![
        completed_session(date(2025, 3, 20), 30, vec![exercise("ex_bench", vec![done(60.0, 5)])]),
        completed_session(date(2025, 3, 10), 30, vec![exercise("ex_bench", vec![done(60.0, 5)])]),
    ];

    let records = compute_records(&history, &catalog);
    assert_eq!(records["ex_bench"].max_weight_date, Some(date(2025, 3, 10)));
    assert_eq!(records["ex_bench"].max_reps_date, Some(date(2025, 3, 10)));
}

#[test]
fn test_only_completed_sessions_and_sets_count() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let history = vec![
        active_session(date(2025, 3, 12), vec![exercise("ex_row", vec![done(200.0, 5)])]),
        completed_session(
            date(2025, 3, 13),
            30,
            vec![exercise(
                "ex_row",
                vec![done(40.0, 8), WorkoutSet::new(Some(90.0), Some(12))],
            )],
        ),
    ];

    let records = compute_records(&history, &catalog);
    assert!((records["ex_row"].max_weight - 40.0).abs() < f64::EPSILON);
    assert_eq!(records["ex_row"].max_reps, 8);
}

#[test]
fn test_exercises_without_data_or_catalog_entry_are_omitted() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let history = vec![completed_session(
        date(2025, 3, 13),
        30,
        vec![
            exercise("ex_plank", vec![WorkoutSet::timed(1.5).completed()]),
            exercise("ex_unknown", vec![done(100.0, 10)]),
            exercise("ex_pushup", vec![WorkoutSet::new(None, Some(20)).completed()]),
        ],
    )];

    let records = compute_records(&history, &catalog);
    assert_eq!(records.keys().collect::<Vec<_>>(), vec!["ex_pushup"]);
    assert_eq!(records["ex_pushup"].max_reps, 20);
    assert!(records["ex_pushup"].max_volume.abs() < f64::EPSILON);
}

#[test]
fn test_first_instance_per_session_is_used() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let history = vec![completed_session(
        date(2025, 3, 13),
        30,
        vec![
            exercise("ex_deadlift", vec![done(80.0, 5)]),
            exercise("ex_deadlift", vec![done(140.0, 1)]),
        ],
    )];

    let records = compute_records(&history, &catalog);
    assert!((records["ex_deadlift"].max_weight - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_first_record_without_history() {
    let records = compute_records(&[], &ExerciseCatalog::new(&common::catalog()));
    let comparisons = classify_set("ex_squat", &WorkoutSet::new(Some(40.0), Some(8)), &records);

    assert_eq!(comparisons.len(), 2);
    assert_eq!(comparisons[0].metric, PrMetric::Weight);
    assert!(comparisons[0].is_new_pr);
    assert!(comparisons[0].previous_pr.abs() < f64::EPSILON);
    assert!((comparisons[0].percentage_of_pr - 100.0).abs() < f64::EPSILON);
    assert_eq!(comparisons[1].metric, PrMetric::Reps);
    assert!(comparisons[1].is_new_pr);

    assert!(classify_set("ex_squat", &WorkoutSet::new(None, None), &records).is_empty());
}

#[test]
fn test_near_and_new_records() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let history = vec![completed_session(
        date(2025, 3, 1),
        30,
        vec![exercise("ex_squat", vec![done(100.0, 5)])],
    )];
    let records = compute_records(&history, &catalog);

    let near = classify_set("ex_squat", &WorkoutSet::new(Some(95.0), Some(5)), &records);
    let weight = near.iter().find(|c| c.metric == PrMetric::Weight).unwrap();
    assert!(weight.is_near_pr);
    assert!(!weight.is_new_pr);
    assert!((weight.percentage_of_pr - 95.0).abs() < 1e-9);

    let reps = near.iter().find(|c| c.metric == PrMetric::Reps).unwrap();
    assert!(!reps.is_new_pr);
    assert!(!reps.is_near_pr);

    let new = classify_set("ex_squat", &WorkoutSet::new(Some(102.5), Some(6)), &records);
    assert!(new.iter().all(|c| c.is_new_pr));
    assert_eq!(new.len(), 3);

    let far = classify_set("ex_squat", &WorkoutSet::new(Some(80.0), None), &records);
    assert_eq!(far.len(), 1);
    assert!(!far[0].is_near_pr);
}

#[test]
fn test_recent_records_window_is_inclusive() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let today = date(2025, 3, 20);
    let history = vec![
        completed_session(date(2025, 3, 1), 30, vec![exercise("ex_press", vec![done(30.0, 8)])]),
        completed_session(date(2025, 3, 13), 30, vec![exercise("ex_bench", vec![done(60.0, 8)])]),
        completed_session(date(2025, 3, 20), 30, vec![exercise("ex_press", vec![done(35.0, 8)])]),
    ];

    let recent = recent_records_at(&history, &catalog, 7, today);

    // Bench on the cutoff day, press weight and volume today; press reps tied on Mar 1
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].date, today);
    assert!(recent
        .iter()
        .any(|r| r.exercise_id == "ex_press" && r.metric == PrMetric::Weight));
    assert!(!recent
        .iter()
        .any(|r| r.exercise_id == "ex_press" && r.metric == PrMetric::Reps));
    assert_eq!(recent.last().unwrap().date, date(2025, 3, 13));
    assert!(recent.windows(2).all(|w| w[0].date >= w[1].date));
}
