//! Which days a report covers.
//!
//! The feed publishes "today" in the late afternoon. Before the cutoff hour
//! the latest reportable day is yesterday.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::domain::Contagion;

/// `true` once today's figures are assumed published.
pub fn cutoff_passed(now: NaiveDateTime, cutoff_hour: u32) -> bool {
    now.hour() >= cutoff_hour
}

/// Latest day that has figures, given the current local time.
pub fn latest_date(now: NaiveDateTime, cutoff_hour: u32) -> NaiveDate {
    let today = now.date();
    if cutoff_passed(now, cutoff_hour) {
        today
    } else {
        today - Duration::days(1)
    }
}

/// The `days` days before `latest`, newest first.
pub fn trend_dates(latest: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (1..=i64::from(days))
        .map(|offset| latest - Duration::days(offset))
        .collect()
}

/// Oldest-first trend from a newest-first window, optionally closed by `latest`.
pub fn build_trend(
    previous: &[Option<Contagion>],
    latest: Contagion,
    append_latest: bool,
) -> Vec<Option<Contagion>> {
    let mut trend: Vec<Option<Contagion>> = previous.iter().rev().copied().collect();
    if append_latest {
        trend.push(Some(latest));
    }
    trend
}
