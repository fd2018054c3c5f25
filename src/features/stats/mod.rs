//! Statistics module.
//!
//! Read-only views over finalized day records:
//! - Weekly success rate
//! - Current and best streaks
//! - Daily series for charts

pub mod calculator;
pub mod visualization;

pub use calculator::{
    best_contiguous_streak, best_streak, current_streak, daily_series, history_window,
    weekly_rate, Statistics, StreakMode, WEEK_DAYS,
};
pub use visualization::{render_goal_bars, render_sparkline};
