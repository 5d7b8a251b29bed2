//! Inactivity classification and trend reconstruction.

use chrono::{DateTime, Days, Duration, TimeZone};
use std::fmt::Display;

use crate::domain::entities::{ActivityRecord, TrendPoint};

/// Number of days the trend looks back; the trend has one more point than this.
pub const TREND_LOOKBACK_DAYS: i64 = 14;

/// Returns true if the record counts as inactive under the threshold.
///
/// Users without any recorded activity are inactive under every threshold.
/// The boundary is inclusive: exactly `threshold_minutes` is inactive.
pub fn is_inactive(record: &ActivityRecord, threshold_minutes: i64) -> bool {
    record.is_never_active() || record.minutes_since_last_activity >= threshold_minutes
}

/// Active/inactive partition of a user list.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityBreakdown<'a, T> {
    /// Inactive entries, in input order.
    pub inactive: Vec<&'a T>,
    pub active_count: usize,
    pub total: usize,
}

impl<T> ActivityBreakdown<'_, T> {
    pub fn inactive_count(&self) -> usize {
        self.inactive.len()
    }

    /// Inactive share of all users in percent, rounded to one decimal.
    pub fn inactive_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let raw = self.inactive.len() as f64 / self.total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }
}

/// Splits `items` into inactive entries and an active count.
pub fn classify<T: AsRef<ActivityRecord>>(
    items: &[T],
    threshold_minutes: i64,
) -> ActivityBreakdown<'_, T> {
    let inactive: Vec<&T> = items
        .iter()
        .filter(|item| is_inactive(item.as_ref(), threshold_minutes))
        .collect();

    ActivityBreakdown {
        active_count: items.len() - inactive.len(),
        total: items.len(),
        inactive,
    }
}

/// Rebuilds the day-by-day inactive count for the last two weeks.
///
/// For each boundary `now - d days` with `d` from 14 down to 0, counts the
/// users whose last activity is strictly before the boundary or missing.
/// Points are returned oldest first and labelled like `"Oct 4"`.
///
/// Boundaries step back in calendar days of the caller's `Tz`, keeping the
/// wall-clock time of `now`, and labels are formatted in that zone. A DST
/// change inside the window therefore never skips or repeats a day.
///
/// Only the current `last_activity_time` is known, so earlier points are
/// an approximation: a user active today counts as inactive on every day
/// before that activity.
pub fn inactive_trend<T, Tz>(items: &[T], now: DateTime<Tz>) -> Vec<TrendPoint>
where
    T: AsRef<ActivityRecord>,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    (0..=TREND_LOOKBACK_DAYS)
        .rev()
        .map(|days_back| {
            let boundary = days_before(&now, days_back);
            let inactive_count = items
                .iter()
                .filter(|item| {
                    item.as_ref()
                        .last_activity_time
                        .is_none_or(|last| last < boundary)
                })
                .count();

            TrendPoint {
                label: boundary.format("%b %-d").to_string(),
                inactive_count,
            }
        })
        .collect()
}

/// Same wall-clock time `days` calendar days earlier.
///
/// A time that falls into a DST gap on the target day falls back to a
/// fixed 24-hour step; a repeated time takes the earlier instant.
fn days_before<Tz: TimeZone>(now: &DateTime<Tz>, days: i64) -> DateTime<Tz> {
    now.naive_local()
        .checked_sub_days(Days::new(days.unsigned_abs()))
        .and_then(|local| now.timezone().from_local_datetime(&local).earliest())
        .unwrap_or_else(|| now.clone() - Duration::days(days))
}
