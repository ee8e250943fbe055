use chrono::{DateTime, Utc};

use crate::models::WEEKLY_TASK_COUNT;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days elapsed from `start` to `now`, floored. Negative when `start`
/// lies in the future.
pub fn elapsed_days(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// True once a full week has passed since `week_start`.
pub fn should_reset_weekly_progress(week_start: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    elapsed_days(week_start, now) >= 7
}

/// Day of the current week, 1-based and clamped to `1..=7`.
pub fn current_week_day(week_start: DateTime<Utc>, now: DateTime<Utc>) -> u8 {
    let day = (elapsed_days(week_start, now) + 1).clamp(1, WEEKLY_TASK_COUNT as i64);
    day as u8
}
