//! Per-day activity and completion resolution for date-ranged tasks.
//!
//! A task is active on every calendar day of its inclusive `[date, end_date]`
//! range (`end_date` absent means a single-day range). Its completion state
//! for a given day comes from the sparse daily-status map; days without an
//! entry are incomplete. This module is the single source of truth for that
//! contract — callers must never re-derive it ad hoc.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Day status
// ---------------------------------------------------------------------------

/// Completion state of a task on a single calendar day.
///
/// Serializes as the lowercase strings stored in the daily-status map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Complete,
    Incomplete,
}

impl DayStatus {
    /// The stored string form (`"complete"` / `"incomplete"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            DayStatus::Complete => "complete",
            DayStatus::Incomplete => "incomplete",
        }
    }

    /// The logical negation, used by the toggle operation.
    pub const fn toggled(self) -> Self {
        match self {
            DayStatus::Complete => DayStatus::Incomplete,
            DayStatus::Incomplete => DayStatus::Complete,
        }
    }
}

/// Sparse map from ISO day key (`YYYY-MM-DD`) to completion state.
///
/// Only days that were explicitly toggled have entries; absence means
/// [`DayStatus::Incomplete`].
pub type DailyStatus = BTreeMap<String, DayStatus>;

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Outcome of resolving a task against a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayResolution {
    /// Whether the day falls within the task's inclusive date range.
    pub active: bool,
    /// The day's completion state. Only meaningful when `active` is true.
    pub status: DayStatus,
}

/// The map key for a calendar day.
pub fn iso_day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Resolve whether a task is active on `day` and with what status.
///
/// The range test is inclusive on both ends at day granularity: a task
/// whose `end_date` equals its `date` is active on exactly that day. A
/// malformed range (`end_date < date`) is never active — malformed input
/// silently yields no occurrences rather than an error.
///
/// The legacy coarse `status` field on a task plays no part here.
pub fn resolve_day(
    date: NaiveDate,
    end_date: Option<NaiveDate>,
    daily_status: &DailyStatus,
    day: NaiveDate,
) -> DayResolution {
    let end = end_date.unwrap_or(date);
    let active = date <= day && day <= end;
    let status = daily_status
        .get(&iso_day_key(day))
        .copied()
        .unwrap_or(DayStatus::Incomplete);
    DayResolution { active, status }
}

/// Compute the single map entry a toggle of `day` writes.
///
/// The new status is the negation of the currently *resolved* status, not
/// of any stored entry: toggling an untouched day writes `complete`, and
/// toggling again writes an explicit `incomplete`. The map never shrinks.
pub fn toggle_day(daily_status: &DailyStatus, day: NaiveDate) -> (String, DayStatus) {
    let key = iso_day_key(day);
    let current = daily_status
        .get(&key)
        .copied()
        .unwrap_or(DayStatus::Incomplete);
    (key, current.toggled())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    // -----------------------------------------------------------------------
    // Range membership
    // -----------------------------------------------------------------------

    #[test]
    fn active_on_start_day() {
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-03")), &DailyStatus::new(), d("2024-03-01"));
        assert!(r.active);
    }

    #[test]
    fn active_on_end_day() {
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-03")), &DailyStatus::new(), d("2024-03-03"));
        assert!(r.active);
    }

    #[test]
    fn active_in_middle() {
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-03")), &DailyStatus::new(), d("2024-03-02"));
        assert!(r.active);
    }

    #[test]
    fn inactive_before_start() {
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-03")), &DailyStatus::new(), d("2024-02-29"));
        assert!(!r.active);
    }

    #[test]
    fn inactive_after_end() {
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-03")), &DailyStatus::new(), d("2024-03-04"));
        assert!(!r.active);
    }

    #[test]
    fn single_day_range_without_end_date() {
        let r = resolve_day(d("2024-03-01"), None, &DailyStatus::new(), d("2024-03-01"));
        assert!(r.active);
        let r = resolve_day(d("2024-03-01"), None, &DailyStatus::new(), d("2024-03-02"));
        assert!(!r.active);
    }

    #[test]
    fn end_equal_to_start_is_exactly_one_day() {
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-01")), &DailyStatus::new(), d("2024-03-01"));
        assert!(r.active);
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-01")), &DailyStatus::new(), d("2024-02-29"));
        assert!(!r.active);
    }

    #[test]
    fn inverted_range_is_never_active() {
        let r = resolve_day(d("2024-03-05"), Some(d("2024-03-01")), &DailyStatus::new(), d("2024-03-03"));
        assert!(!r.active);
        let r = resolve_day(d("2024-03-05"), Some(d("2024-03-01")), &DailyStatus::new(), d("2024-03-05"));
        assert!(!r.active);
    }

    // -----------------------------------------------------------------------
    // Status resolution
    // -----------------------------------------------------------------------

    #[test]
    fn unset_day_resolves_incomplete() {
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-03")), &DailyStatus::new(), d("2024-03-02"));
        assert_eq!(r.status, DayStatus::Incomplete);
    }

    #[test]
    fn set_day_resolves_stored_status() {
        let mut daily = DailyStatus::new();
        daily.insert("2024-03-02".to_string(), DayStatus::Complete);
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-03")), &daily, d("2024-03-02"));
        assert_eq!(r.status, DayStatus::Complete);
    }

    #[test]
    fn explicit_incomplete_entry_resolves_incomplete() {
        let mut daily = DailyStatus::new();
        daily.insert("2024-03-02".to_string(), DayStatus::Incomplete);
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-03")), &daily, d("2024-03-02"));
        assert_eq!(r.status, DayStatus::Incomplete);
    }

    #[test]
    fn entries_for_other_days_are_ignored() {
        let mut daily = DailyStatus::new();
        daily.insert("2024-03-01".to_string(), DayStatus::Complete);
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-03")), &daily, d("2024-03-02"));
        assert_eq!(r.status, DayStatus::Incomplete);
    }

    // -----------------------------------------------------------------------
    // Toggle
    // -----------------------------------------------------------------------

    #[test]
    fn toggle_unset_day_writes_complete() {
        let (key, status) = toggle_day(&DailyStatus::new(), d("2024-03-02"));
        assert_eq!(key, "2024-03-02");
        assert_eq!(status, DayStatus::Complete);
    }

    #[test]
    fn toggle_complete_day_writes_incomplete() {
        let mut daily = DailyStatus::new();
        daily.insert("2024-03-02".to_string(), DayStatus::Complete);
        let (_, status) = toggle_day(&daily, d("2024-03-02"));
        assert_eq!(status, DayStatus::Incomplete);
    }

    #[test]
    fn double_toggle_leaves_explicit_incomplete() {
        let mut daily = DailyStatus::new();
        let (key, first) = toggle_day(&daily, d("2024-03-02"));
        daily.insert(key.clone(), first);
        let (key, second) = toggle_day(&daily, d("2024-03-02"));
        daily.insert(key.clone(), second);

        // The entry exists (distinguishable from unset at the storage
        // level) but reads back as incomplete.
        assert_eq!(daily.get(&key), Some(&DayStatus::Incomplete));
        let r = resolve_day(d("2024-03-01"), Some(d("2024-03-03")), &daily, d("2024-03-02"));
        assert_eq!(r.status, DayStatus::Incomplete);
    }

    #[test]
    fn iso_day_key_is_zero_padded() {
        assert_eq!(iso_day_key(d("2024-01-05")), "2024-01-05");
    }
}
