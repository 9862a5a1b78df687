// ABOUTME: Local calendar helpers for week boundaries and reference dates
// ABOUTME: Keeps date arithmetic in one place so analytics share the same week definition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Days, Duration, Local, NaiveDate};

/// Today's date on the local calendar
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Monday of the ISO week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// `date` minus `days`, saturating at the earliest representable date
#[must_use]
pub fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_sub_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MIN)
}
