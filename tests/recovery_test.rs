// ABOUTME: Integration tests for muscle group recovery analysis
// ABOUTME: Covers the status ladder over real history, overtraining and neglect warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, NaiveDate};
use common::{active_session, completed_session, date, done, exercise};
use ironlog_core::models::{ExerciseCatalog, MuscleGroup, WorkoutSession};
use ironlog_intelligence::{
    check_overtraining_risk_at, compute_recovery_at, find_neglected_groups, RecoveryStatus,
    Severity, WarningKind,
};

fn bench_on(day: NaiveDate) -> WorkoutSession {
    completed_session(day, 40, vec![exercise("ex_bench", vec![done(60.0, 8)])])
}

#[test]
fn test_back_to_back_chest_is_flagged() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let today = date(2025, 3, 14);
    let history = vec![bench_on(today - Duration::days(1)), bench_on(today)];

    let warnings =
        check_overtraining_risk_at(&history, &catalog, &[MuscleGroup::Chest], today);

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::Overtraining);
    assert_eq!(warnings[0].muscle_group, MuscleGroup::Chest);
    assert_eq!(warnings[0].severity, Severity::High);
    assert!(warnings[0].message.contains("chest"));
}

#[test]
fn test_overtraining_ignores_other_groups_and_open_sessions() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let today = date(2025, 3, 14);
    let yesterday = today - Duration::days(1);
    let history = vec![
        bench_on(yesterday),
        active_session(yesterday, vec![exercise("ex_squat", vec![done(80.0, 5)])]),
    ];

    let warnings = check_overtraining_risk_at(
        &history,
        &catalog,
        &[MuscleGroup::Legs, MuscleGroup::Back],
        today,
    );
    assert!(warnings.is_empty());
    assert!(check_overtraining_risk_at(&history, &catalog, &[], today).is_empty());
}

#[test]
fn test_recovery_reports_every_group() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let today = date(2025, 3, 14);
    let history = vec![
        bench_on(today),
        completed_session(
            today - Duration::days(1),
            30,
            vec![exercise("ex_deadlift", vec![done(100.0, 5)])],
        ),
        completed_session(
            today - Duration::days(5),
            30,
            vec![exercise("ex_squat", vec![done(80.0, 5)])],
        ),
        active_session(today, vec![exercise("ex_squat", vec![done(80.0, 5)])]),
    ];

    let recovery = compute_recovery_at(&history, &catalog, today);
    assert_eq!(recovery.len(), MuscleGroup::ALL.len());

    let of = |group: MuscleGroup| recovery.iter().find(|r| r.muscle_group == group).unwrap();
    assert_eq!(of(MuscleGroup::Chest).status, RecoveryStatus::Fresh);
    assert_eq!(of(MuscleGroup::Chest).days_since_last_trained, 0);
    assert_eq!(of(MuscleGroup::Back).status, RecoveryStatus::Warning);
    assert_eq!(of(MuscleGroup::Legs).status, RecoveryStatus::Ready);
    assert_eq!(of(MuscleGroup::Legs).days_since_last_trained, 5);
    assert_eq!(of(MuscleGroup::Legs).last_trained_date, Some(today - Duration::days(5)));

    let core = of(MuscleGroup::Core);
    assert_eq!(core.days_since_last_trained, 999);
    assert_eq!(core.status, RecoveryStatus::Overdue);
    assert_eq!(core.message, "Never trained");
    assert!(core.last_trained_date.is_none());
}

#[test]
fn test_neglect_severity_thresholds() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let today = date(2025, 3, 20);
    let history = vec![
        bench_on(today - Duration::days(10)),
        completed_session(
            today - Duration::days(14),
            30,
            vec![exercise("ex_row", vec![done(40.0, 10)])],
        ),
        completed_session(
            today - Duration::days(9),
            30,
            vec![exercise("ex_squat", vec![done(80.0, 5)])],
        ),
    ];

    let recovery = compute_recovery_at(&history, &catalog, today);
    let neglected = find_neglected_groups(&recovery);

    assert_eq!(neglected.len(), 2);
    let chest = neglected
        .iter()
        .find(|w| w.muscle_group == MuscleGroup::Chest)
        .unwrap();
    assert_eq!(chest.kind, WarningKind::Neglected);
    assert_eq!(chest.severity, Severity::Medium);
    let back = neglected
        .iter()
        .find(|w| w.muscle_group == MuscleGroup::Back)
        .unwrap();
    assert_eq!(back.severity, Severity::High);
    assert!(back.message.contains("14 days"));
}

#[test]
fn test_never_trained_groups_are_not_neglected() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let recovery = compute_recovery_at(&[], &catalog, date(2025, 3, 20));

    assert!(recovery.iter().all(|r| r.days_since_last_trained == 999));
    assert!(find_neglected_groups(&recovery).is_empty());
}

#[test]
fn test_future_dated_session_reads_as_ready() {
    let definitions = common::catalog();
    let catalog = ExerciseCatalog::new(&definitions);
    let today = date(2025, 3, 20);
    let history = vec![bench_on(today + Duration::days(2))];

    let recovery = compute_recovery_at(&history, &catalog, today);
    let chest = recovery
        .iter()
        .find(|r| r.muscle_group == MuscleGroup::Chest)
        .unwrap();
    assert_eq!(chest.days_since_last_trained, -2);
    assert_eq!(chest.status, RecoveryStatus::Ready);
}
