//! Consecutive-day streak tracking.
//!
//! Days are calendar days in the local timezone: two completions on the same
//! date never extend a streak, completions on adjacent dates always do.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::db::kv_repo::KeyValueStore;
use crate::db::progress_store::ProgressStore;
use crate::engine::clock::Clock;
use crate::models::StreakData;

/// Calendar date of `dt` in the local timezone.
pub fn local_day(dt: DateTime<Utc>) -> NaiveDate {
    dt.with_timezone(&Local).date_naive()
}

/// Start of `dt`'s local calendar day, as a UTC instant.
pub fn local_midnight(dt: DateTime<Utc>) -> DateTime<Utc> {
    local_day(dt)
        .and_hms_opt(0, 0, 0)
        .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or(dt)
}

/// Streak after a completion at `now`.
///
/// `baseline` is the last persisted streak, `last_completed` the completion
/// date the caller saw before mutating, and `has_history` whether any prior
/// activity was recorded.
pub fn next_streak(
    baseline: &StreakData,
    last_completed: Option<DateTime<Utc>>,
    has_history: bool,
    now: DateTime<Utc>,
) -> StreakData {
    let today = local_midnight(now);

    let last_completed = match last_completed {
        Some(date) if has_history => date,
        _ => {
            return StreakData {
                current_streak: 1,
                last_completed_date: Some(today),
                longest_streak: baseline.longest_streak.max(1),
            };
        }
    };

    let days_diff = (local_day(now) - local_day(last_completed)).num_days();
    match days_diff {
        0 => baseline.clone(),
        1 => {
            let current = baseline.current_streak.saturating_add(1);
            StreakData {
                current_streak: current,
                last_completed_date: Some(today),
                longest_streak: baseline.longest_streak.max(current),
            }
        }
        // gap of two or more days, or the device clock went backwards
        _ => StreakData {
            current_streak: 1,
            last_completed_date: Some(today),
            longest_streak: baseline.longest_streak,
        },
    }
}

/// Recompute the streak against the persisted record.
///
/// The baseline is re-read from storage rather than taken from the caller, so
/// a concurrent writer's streak wins.
pub fn calculate_streak<S, C>(
    store: &ProgressStore<S, C>,
    last_completed: Option<DateTime<Utc>>,
) -> StreakData
where
    S: KeyValueStore,
    C: Clock,
{
    let has_history = store.last_active_date().is_some();
    let baseline = store.load().streak;
    next_streak(&baseline, last_completed, has_history, store.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 16, 12, 0, 0).unwrap()
    }

    fn baseline(last: DateTime<Utc>) -> StreakData {
        StreakData {
            current_streak: 3,
            last_completed_date: Some(last),
            longest_streak: 5,
        }
    }

    #[test]
    fn test_consecutive_day_extends_streak() {
        let yesterday = now() - Duration::days(1);
        let s = next_streak(&baseline(yesterday), Some(yesterday), true, now());
        assert_eq!(
            s,
            StreakData {
                current_streak: 4,
                last_completed_date: Some(local_midnight(now())),
                longest_streak: 5,
            }
        );
    }

    #[test]
    fn test_extending_past_longest_raises_longest() {
        let yesterday = now() - Duration::days(1);
        let b = StreakData {
            current_streak: 5,
            last_completed_date: Some(yesterday),
            longest_streak: 5,
        };
        let s = next_streak(&b, Some(yesterday), true, now());
        assert_eq!(s.current_streak, 6);
        assert_eq!(s.longest_streak, 6);
    }

    #[test]
    fn test_gap_restarts_streak_keeping_longest() {
        let three_days_ago = now() - Duration::days(3);
        let s = next_streak(&baseline(three_days_ago), Some(three_days_ago), true, now());
        assert_eq!(
            s,
            StreakData {
                current_streak: 1,
                last_completed_date: Some(local_midnight(now())),
                longest_streak: 5,
            }
        );
    }

    #[test]
    fn test_same_day_keeps_baseline() {
        let earlier = local_midnight(now());
        let b = baseline(earlier);
        assert_eq!(next_streak(&b, Some(earlier), true, now()), b);
    }

    #[test]
    fn test_clock_moved_backwards_restarts_streak() {
        let tomorrow = now() + Duration::days(1);
        let s = next_streak(&baseline(tomorrow), Some(tomorrow), true, now());
        assert_eq!(s.current_streak, 1);
        assert_eq!(s.longest_streak, 5);
        assert_eq!(s.last_completed_date, Some(local_midnight(now())));
    }

    #[test]
    fn test_no_history_starts_streak_without_losing_longest() {
        let b = StreakData {
            current_streak: 0,
            last_completed_date: None,
            longest_streak: 9,
        };
        let s = next_streak(&b, None, true, now());
        assert_eq!(s.current_streak, 1);
        assert_eq!(s.longest_streak, 9);

        let yesterday = now() - Duration::days(1);
        let s = next_streak(&baseline(yesterday), Some(yesterday), false, now());
        assert_eq!(s.current_streak, 1);
        assert_eq!(s.longest_streak, 5);
    }

    #[test]
    fn test_first_completion_sets_longest_to_one() {
        let s = next_streak(&StreakData::default(), None, false, now());
        assert_eq!(s.current_streak, 1);
        assert_eq!(s.longest_streak, 1);
        assert_eq!(s.last_completed_date, Some(local_midnight(now())));
    }

    #[test]
    fn test_extending_saturates_at_max() {
        let yesterday = now() - Duration::days(1);
        let b = StreakData {
            current_streak: u32::MAX,
            last_completed_date: Some(yesterday),
            longest_streak: u32::MAX,
        };
        let s = next_streak(&b, Some(yesterday), true, now());
        assert_eq!(s.current_streak, u32::MAX);
        assert_eq!(s.longest_streak, u32::MAX);
    }

    #[test]
    fn test_midnight_is_start_of_local_day() {
        let m = local_midnight(now());
        assert_eq!(local_day(m), local_day(now()));
        assert!(m <= now());
        assert!(now() - m < Duration::days(1));
    }
}
