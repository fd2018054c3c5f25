//! Streak and success-rate calculations over finalized day records.
//!
//! Every function takes the records plus the caller's notion of `today`;
//! nothing here reads the clock or mutates history.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::storage::DayRecord;

/// Days examined by [`weekly_rate`], counting today.
pub const WEEK_DAYS: u32 = 7;

/// How the best streak treats days with no record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakMode {
    /// Consecutive *recorded* days; missing dates are skipped over.
    #[default]
    Recorded,
    /// Consecutive *calendar* days; a missing date ends the streak.
    Calendar,
}

/// Aggregated statistics for a stats view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Percentage of recorded days in the last week that met their goal.
    pub weekly_rate: u32,
    /// Successful days ending at today.
    pub current_streak: u32,
    /// Longest run of successful days.
    pub best_streak: u32,
    /// Definition used for `best_streak`.
    pub streak_mode: StreakMode,
    /// Number of finalized days on record.
    pub recorded_days: usize,
    /// Number of those days that met their goal.
    pub successful_days: usize,
}

impl Statistics {
    /// Calculate all statistics for `today`.
    #[must_use]
    pub fn calculate(
        records: &BTreeMap<NaiveDate, DayRecord>,
        today: NaiveDate,
        mode: StreakMode,
    ) -> Self {
        let best_streak = match mode {
            StreakMode::Recorded => best_streak(records),
            StreakMode::Calendar => best_contiguous_streak(records),
        };

        Self {
            weekly_rate: weekly_rate(records, today),
            current_streak: current_streak(records, today),
            best_streak,
            streak_mode: mode,
            recorded_days: records.len(),
            successful_days: records.values().filter(|r| r.is_success()).count(),
        }
    }
}

/// Success rate over `today` and the six days before it, as a rounded
/// percentage. Days without a record are left out of the denominator.
#[must_use]
pub fn weekly_rate(records: &BTreeMap<NaiveDate, DayRecord>, today: NaiveDate) -> u32 {
    let (success, total) = (0..i64::from(WEEK_DAYS))
        .filter_map(|offset| today.checked_sub_signed(Duration::days(offset)))
        .filter_map(|date| records.get(&date))
        .fold((0_u32, 0_u32), |(success, total), record| {
            (success + u32::from(record.is_success()), total + 1)
        });

    // Nearest whole percent
    (success * 200 + total.max(1)) / (2 * total.max(1))
}

/// Number of consecutive successful days ending at `today`.
///
/// A missing date stops the streak just like a failed one.
#[must_use]
pub fn current_streak(records: &BTreeMap<NaiveDate, DayRecord>, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = Some(today);

    while let Some(date) = day {
        match records.get(&date) {
            Some(record) if record.is_success() => streak += 1,
            _ => break,
        }
        day = date.pred_opt();
    }

    streak
}

/// Longest run of successful days among the recorded dates, in date order.
///
/// Gaps between recorded dates do not break a run.
#[must_use]
pub fn best_streak(records: &BTreeMap<NaiveDate, DayRecord>) -> u32 {
    let mut best = 0;
    let mut run = 0;

    for record in records.values() {
        if record.is_success() {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }

    best
}

/// Longest run of successful days on consecutive calendar dates.
#[must_use]
pub fn best_contiguous_streak(records: &BTreeMap<NaiveDate, DayRecord>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for (date, record) in records {
        if !record.is_success() {
            run = 0;
        } else if prev.and_then(|p| p.succ_opt()) == Some(*date) && run > 0 {
            run += 1;
        } else {
            run = 1;
        }
        best = best.max(run);
        prev = Some(*date);
    }

    best
}

/// Completed counts for the `days` days ending at `today`, oldest first.
/// Days without a record, or before the earliest representable date,
/// count as zero.
#[must_use]
pub fn daily_series(
    records: &BTreeMap<NaiveDate, DayRecord>,
    today: NaiveDate,
    days: u32,
) -> Vec<usize> {
    (0..i64::from(days))
        .rev()
        .map(|offset| {
            today
                .checked_sub_signed(Duration::days(offset))
                .and_then(|date| records.get(&date))
                .map_or(0, |r| usize::try_from(r.completed).unwrap_or(usize::MAX))
        })
        .collect()
}

/// Records within the `days` days ending at `today`, newest first.
#[must_use]
pub fn history_window(
    records: &BTreeMap<NaiveDate, DayRecord>,
    today: NaiveDate,
    days: u32,
) -> Vec<(NaiveDate, DayRecord)> {
    let start = today
        .checked_sub_signed(Duration::days(i64::from(days.max(1)) - 1))
        .unwrap_or(NaiveDate::MIN);
    records
        .range(start..=today)
        .rev()
        .map(|(date, record)| (*date, *record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn records(entries: &[(&str, u32, u32)]) -> BTreeMap<NaiveDate, DayRecord> {
        entries
            .iter()
            .map(|(d, completed, goal)| (date(d), DayRecord::new(*completed, *goal)))
            .collect()
    }

    #[test]
    fn test_weekly_rate_empty() {
        let empty = BTreeMap::new();
        assert_eq!(weekly_rate(&empty, date("2024-01-01")), 0);
        assert_eq!(weekly_rate(&empty, date("1999-12-31")), 0);
    }

    #[test]
    fn test_weekly_rate_excludes_missing_days() {
        let recs = records(&[("2024-01-01", 5, 5), ("2024-01-02", 5, 5)]);
        assert_eq!(weekly_rate(&recs, date("2024-01-02")), 100);
    }

    #[test]
    fn test_weekly_rate_window_bounds() {
        let recs = records(&[
            ("2024-01-01", 0, 5), // 8 days before today, outside window
            ("2024-01-03", 0, 5), // 6 days before today, inside
            ("2024-01-09", 5, 5),
        ]);
        assert_eq!(weekly_rate(&recs, date("2024-01-09")), 50);
    }

    #[test]
    fn test_weekly_rate_rounds() {
        let recs = records(&[
            ("2024-01-01", 5, 5),
            ("2024-01-02", 1, 5),
            ("2024-01-03", 1, 5),
        ]);
        // 1/3 = 33.3%
        assert_eq!(weekly_rate(&recs, date("2024-01-03")), 33);

        let recs = records(&[
            ("2024-01-01", 5, 5),
            ("2024-01-02", 5, 5),
            ("2024-01-03", 1, 5),
        ]);
        // 2/3 = 66.7%
        assert_eq!(weekly_rate(&recs, date("2024-01-03")), 67);

        let recs = records(&[
            ("2024-01-01", 5, 5),
            ("2024-01-02", 5, 5),
            ("2024-01-03", 5, 5),
            ("2024-01-04", 5, 5),
            ("2024-01-05", 5, 5),
            ("2024-01-06", 5, 5),
            ("2024-01-07", 1, 5),
        ]);
        // 6/7 = 85.7%
        assert_eq!(weekly_rate(&recs, date("2024-01-07")), 86);
    }

    #[test]
    fn test_streaks_break_on_failure() {
        let recs = records(&[
            ("2024-01-01", 5, 5),
            ("2024-01-02", 3, 5),
            ("2024-01-03", 5, 5),
        ]);
        let today = date("2024-01-03");

        assert_eq!(current_streak(&recs, today), 1);
        assert_eq!(best_streak(&recs), 1);
        assert_eq!(best_contiguous_streak(&recs), 1);
    }

    #[test]
    fn test_two_good_days() {
        let recs = records(&[("2024-01-01", 5, 5), ("2024-01-02", 5, 5)]);
        let today = date("2024-01-02");

        assert_eq!(current_streak(&recs, today), 2);
        assert_eq!(best_streak(&recs), 2);
        assert_eq!(best_contiguous_streak(&recs), 2);
        assert_eq!(weekly_rate(&recs, today), 100);
    }

    #[test]
    fn test_current_streak_zero_when_today_missing_or_failed() {
        let recs = records(&[("2024-01-01", 5, 5)]);
        assert_eq!(current_streak(&recs, date("2024-01-02")), 0);

        let recs = records(&[("2024-01-01", 5, 5), ("2024-01-02", 4, 5)]);
        assert_eq!(current_streak(&recs, date("2024-01-02")), 0);
    }

    #[test]
    fn test_current_streak_breaks_on_gap() {
        let recs = records(&[
            ("2024-01-01", 5, 5),
            ("2024-01-02", 5, 5),
            ("2024-01-04", 5, 5),
        ]);
        assert_eq!(current_streak(&recs, date("2024-01-04")), 1);
    }

    #[test]
    fn test_best_streak_recorded_skips_gaps() {
        let recs = records(&[
            ("2024-01-01", 5, 5),
            ("2024-01-02", 5, 5),
            ("2024-01-05", 5, 5),
            ("2024-01-09", 6, 5),
            ("2024-01-10", 2, 5),
        ]);

        assert_eq!(best_streak(&recs), 4);
    }

    #[test]
    fn test_best_streak_calendar_breaks_on_gaps() {
        let recs = records(&[
            ("2024-01-01", 5, 5),
            ("2024-01-02", 5, 5),
            ("2024-01-05", 5, 5),
            ("2024-01-09", 6, 5),
            ("2024-01-10", 2, 5),
        ]);

        assert_eq!(best_contiguous_streak(&recs), 2);
    }

    #[test]
    fn test_best_streak_calendar_across_month_boundary() {
        let recs = records(&[
            ("2024-02-28", 1, 1),
            ("2024-02-29", 1, 1),
            ("2024-03-01", 1, 1),
        ]);
        assert_eq!(best_contiguous_streak(&recs), 3);
    }

    #[test]
    fn test_best_streak_failure_then_success() {
        let recs = records(&[("2024-01-01", 0, 5), ("2024-01-02", 5, 5)]);
        assert_eq!(best_streak(&recs), 1);
        assert_eq!(best_contiguous_streak(&recs), 1);
    }

    #[test]
    fn test_best_streak_empty() {
        let empty = BTreeMap::new();
        assert_eq!(best_streak(&empty), 0);
        assert_eq!(best_contiguous_streak(&empty), 0);
    }

    #[test]
    fn test_statistics_modes() {
        let recs = records(&[
            ("2024-01-01", 5, 5),
            ("2024-01-03", 5, 5),
            ("2024-01-04", 5, 5),
        ]);
        let today = date("2024-01-04");

        let recorded = Statistics::calculate(&recs, today, StreakMode::Recorded);
        assert_eq!(recorded.best_streak, 3);
        assert_eq!(recorded.current_streak, 2);
        assert_eq!(recorded.weekly_rate, 100);
        assert_eq!(recorded.recorded_days, 3);
        assert_eq!(recorded.successful_days, 3);

        let calendar = Statistics::calculate(&recs, today, StreakMode::Calendar);
        assert_eq!(calendar.best_streak, 2);
        assert_eq!(calendar.streak_mode, StreakMode::Calendar);
    }

    #[test]
    fn test_daily_series() {
        let recs = records(&[("2024-01-01", 2, 5), ("2024-01-03", 4, 5)]);
        assert_eq!(daily_series(&recs, date("2024-01-03"), 4), vec![0, 2, 0, 4]);
    }

    #[test]
    fn test_history_window_newest_first() {
        let recs = records(&[
            ("2023-12-20", 1, 5),
            ("2024-01-01", 2, 5),
            ("2024-01-03", 4, 5),
        ]);

        let window = history_window(&recs, date("2024-01-03"), 7);

        let dates: Vec<NaiveDate> = window.iter().map(|(d, _)| *d).collect();
        assert_eq!(dates, vec![date("2024-01-03"), date("2024-01-01")]);
    }

    #[test]
    fn test_window_at_earliest_date_does_not_overflow() {
        let recs = BTreeMap::from([(NaiveDate::MIN, DayRecord::new(5, 5))]);

        assert_eq!(weekly_rate(&recs, NaiveDate::MIN), 100);
        assert_eq!(daily_series(&recs, NaiveDate::MIN, 3), vec![0, 0, 5]);
        assert_eq!(history_window(&recs, NaiveDate::MIN, 14).len(), 1);
    }

    #[test]
    fn test_history_window_huge_span_clamps_to_earliest_date() {
        let recs = records(&[("0001-01-01", 1, 5), ("2024-01-01", 2, 5)]);

        assert!(history_window(&BTreeMap::new(), date("2024-01-03"), u32::MAX).is_empty());
        assert_eq!(history_window(&recs, date("2024-01-03"), u32::MAX).len(), 2);
    }
}
