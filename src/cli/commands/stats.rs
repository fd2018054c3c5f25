//! Statistics command implementation.
//!
//! Handles the `stats` and `history` views over finalized days.

use chrono::NaiveDate;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::PaperclipsError;
use crate::features::counter::DailyCounter;
use crate::features::stats::{
    daily_series, history_window, render_goal_bars, render_sparkline, Statistics, StreakMode,
    WEEK_DAYS,
};
use crate::output::to_json;

/// Execute stats command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn stats(
    counter: &DailyCounter,
    today: NaiveDate,
    mode: StreakMode,
    format: OutputFormat,
) -> Result<String, PaperclipsError> {
    let statistics = Statistics::calculate(counter.records(), today, mode);

    match format {
        OutputFormat::Json => to_json(&json!({
            "today": today,
            "done": counter.done(),
            "undone": counter.undone(),
            "goal": counter.goal(),
            "statistics": statistics,
        })),
        OutputFormat::Pretty => Ok(render_stats(counter, today, &statistics)),
    }
}

fn render_stats(counter: &DailyCounter, today: NaiveDate, statistics: &Statistics) -> String {
    let mut output = Vec::new();

    output.push("📊 TODAY".bold().to_string());
    output.push("─".repeat(40));
    output.push(format!("  Tasks Completed: {}", counter.done().to_string().green()));
    output.push(format!("  Tasks Remaining: {}", counter.undone().max(0)));
    output.push(String::new());

    output.push("🔥 STREAKS".bold().to_string());
    output.push("─".repeat(40));
    let current = if statistics.current_streak > 0 {
        format!("{} days", statistics.current_streak).green().to_string()
    } else {
        "0 days".dimmed().to_string()
    };
    output.push(format!("  Current streak: {current}"));
    let mode_hint = match statistics.streak_mode {
        StreakMode::Recorded => "",
        StreakMode::Calendar => " (calendar days)",
    };
    output.push(format!(
        "  Best streak:    {} days{}",
        statistics.best_streak,
        mode_hint.dimmed()
    ));
    output.push(String::new());

    output.push("📅 THIS WEEK".bold().to_string());
    output.push("─".repeat(40));
    let rate = statistics.weekly_rate.to_string() + "%";
    let rate = match statistics.weekly_rate {
        80.. => rate.green(),
        50..=79 => rate.yellow(),
        _ => rate.red(),
    };
    output.push(format!("  Weekly success rate: {rate}"));

    // Today's record does not exist until rollover, so chart the days before it
    let series_end = today.pred_opt().unwrap_or(today);
    let series = daily_series(counter.records(), series_end, WEEK_DAYS);
    output.push(format!("  Last 7 days: {}", render_sparkline(&series)));
    output.push(format!(
        "  Days recorded: {}  Goals met: {}",
        statistics.recorded_days, statistics.successful_days
    ));

    output.join("\n")
}

/// Execute history command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn history(
    counter: &DailyCounter,
    today: NaiveDate,
    days: u32,
    format: OutputFormat,
) -> Result<String, PaperclipsError> {
    let window = history_window(counter.records(), today, days);

    match format {
        OutputFormat::Json => {
            let items: Vec<_> = window
                .iter()
                .map(|(date, record)| {
                    json!({
                        "date": date,
                        "completed": record.completed,
                        "goal": record.goal,
                        "success": record.is_success(),
                    })
                })
                .collect();
            to_json(&json!({
                "days": days,
                "count": items.len(),
                "items": items,
            }))
        }
        OutputFormat::Pretty => {
            let title = format!("History, last {days} days ({} recorded)", window.len());
            if window.is_empty() {
                return Ok(format!("{}\n  No recorded days", title.bold()));
            }
            Ok(format!(
                "{}\n{}\n{}",
                title.bold(),
                "─".repeat(40),
                render_goal_bars(&window, 20)
            ))
        }
    }
}
