//! Terminal visualization for statistics.
//!
//! Provides compact ASCII charts for the stats and history views.

use chrono::NaiveDate;

use crate::storage::DayRecord;

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';
const LIGHT_SHADE: char = '░';

/// Render a sparkline (compact inline chart).
///
/// # Arguments
///
/// * `values` - Slice of values to render
///
/// # Returns
///
/// A single-line string with the sparkline.
#[must_use]
pub fn render_sparkline(values: &[usize]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max_value = values.iter().copied().max().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            let normalized = v * 7 / max_value;
            if v == 0 {
                BAR_CHARS[0]
            } else {
                BAR_CHARS[normalized.clamp(1, 7)]
            }
        })
        .collect()
}

/// Render one progress bar per day.
///
/// Each bar is scaled against the day's own goal, so a full bar means the
/// goal was met. Over-completion is capped at a full bar.
///
/// # Arguments
///
/// * `days` - `(date, record)` pairs in display order
/// * `bar_width` - Width of the bar portion
#[must_use]
pub fn render_goal_bars(days: &[(NaiveDate, DayRecord)], bar_width: usize) -> String {
    days.iter()
        .map(|(date, record)| {
            let goal = u64::from(record.goal.max(1));
            let done = u64::from(record.completed).min(goal);
            let width = u64::try_from(bar_width).unwrap_or(u64::MAX);
            let filled = usize::try_from(done.saturating_mul(width) / goal)
                .map_or(bar_width, |f| f.min(bar_width));
            let bar = FULL_BLOCK.to_string().repeat(filled);
            let empty = LIGHT_SHADE.to_string().repeat(bar_width - filled);

            format!(
                "{} |{bar}{empty}| {}/{}",
                date.format("%Y-%m-%d"),
                record.completed,
                record.goal
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_empty() {
        assert_eq!(render_sparkline(&[]), "");
    }

    #[test]
    fn test_sparkline_scales_to_max() {
        let line = render_sparkline(&[0, 1, 7]);
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars, vec![' ', '▁', '▇']);
    }

    #[test]
    fn test_sparkline_small_values_visible() {
        let line = render_sparkline(&[1, 100]);
        assert_eq!(line.chars().next(), Some('▁'));
    }

    #[test]
    fn test_goal_bars() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let out = render_goal_bars(&[(date, DayRecord::new(2, 4))], 8);
        assert_eq!(out, "2024-01-03 |████░░░░| 2/4");
    }

    #[test]
    fn test_goal_bars_over_completion_capped() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let out = render_goal_bars(&[(date, DayRecord::new(9, 3))], 3);
        assert_eq!(out, "2024-01-03 |███| 9/3");
    }
}
