//! Temporal distribution helpers.
//!
//! All helpers take the generation clock explicitly; the pipeline captures it
//! once per run so timestamps are reproducible under a pinned clock.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::rng::probability;

const NO_DUE_DATE_RATE: f64 = 0.1;
const DUE_DATE_WINDOW_DAYS: u32 = 90;

/// Timestamp uniformly within the past `window_days` relative to `now`.
pub fn past_timestamp(rng: &mut ChaCha8Rng, now: NaiveDateTime, window_days: u32) -> NaiveDateTime {
    let days = rng.random_range(0..=i64::from(window_days));
    let seconds = rng.random_range(0..=86_400_i64);
    now - Duration::days(days) - Duration::seconds(seconds)
}

/// Date uniformly 1..=`max_days` ahead of `today`.
pub fn future_date(rng: &mut ChaCha8Rng, today: NaiveDate, max_days: u32) -> NaiveDate {
    today + Duration::days(rng.random_range(1..=i64::from(max_days)))
}

/// Due-date distribution: 10% no due date, otherwise within 90 days.
pub fn maybe_due_date(rng: &mut ChaCha8Rng, today: NaiveDate) -> Option<NaiveDate> {
    if probability(rng, NO_DUE_DATE_RATE) {
        None
    } else {
        Some(future_date(rng, today, DUE_DATE_WINDOW_DAYS))
    }
}

/// Completion timestamp 1..=14 days after creation; always postdates it.
pub fn completion_timestamp(rng: &mut ChaCha8Rng, created_at: NaiveDateTime) -> NaiveDateTime {
    created_at + Duration::days(rng.random_range(1..=14_i64))
}
