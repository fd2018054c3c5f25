//! Command implementations for paperclips.
//!
//! Each command takes the already rolled-over counter and returns the text
//! to print.

mod shell;
mod stats;

pub use shell::{completions, prompt};
pub use stats::{history, stats};

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::error::PaperclipsError;
use crate::features::counter::{
    CompleteOutcome, DailyCounter, FinalizedDay, ResetOutcome, UndoOutcome,
};
use crate::output::{format_board, format_outcome, format_status, to_json};

/// Execute status command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn status(counter: &DailyCounter, format: OutputFormat) -> Result<String, PaperclipsError> {
    format_status(&counter.status(), format)
}

/// Execute board command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn board(counter: &DailyCounter, format: OutputFormat) -> Result<String, PaperclipsError> {
    format_board(&counter.paperclips(), &counter.status(), format)
}

/// Execute done command
///
/// # Errors
///
/// Returns an error if the new count cannot be saved or output formatting fails.
pub fn done(counter: &mut DailyCounter, format: OutputFormat) -> Result<String, PaperclipsError> {
    let outcome = counter.complete_task()?;
    let notice = match outcome {
        CompleteOutcome::Completed => None,
        CompleteOutcome::GoalReached => {
            Some("Congratulations! You've completed all your tasks for today.")
        }
        CompleteOutcome::NoTasksRemaining => Some("No tasks remaining for today."),
    };
    format_outcome(&outcome, notice, &counter.status(), format)
}

/// Execute undo command
///
/// # Errors
///
/// Returns an error if the new count cannot be saved or output formatting fails.
pub fn undo(counter: &mut DailyCounter, format: OutputFormat) -> Result<String, PaperclipsError> {
    let outcome = counter.undo_task()?;
    let notice = match outcome {
        UndoOutcome::Undone => None,
        UndoOutcome::NoCompletedTasks => Some("No completed tasks to undo."),
    };
    format_outcome(&outcome, notice, &counter.status(), format)
}

/// Execute goal command
///
/// With no argument the current goal is shown.
///
/// # Errors
///
/// Returns `InvalidGoal` for non-positive goals, or an error if the goal
/// cannot be saved.
pub fn goal(
    counter: &mut DailyCounter,
    new_goal: Option<i64>,
    format: OutputFormat,
) -> Result<String, PaperclipsError> {
    let Some(new_goal) = new_goal else {
        return match format {
            OutputFormat::Pretty => Ok(format!("Daily goal: {}", counter.goal().to_string().bold())),
            OutputFormat::Json => to_json(&serde_json::json!({ "goal": counter.goal() })),
        };
    };

    let previous = counter.goal();
    counter.set_goal(new_goal)?;

    match format {
        OutputFormat::Pretty => Ok(format!(
            "Daily goal updated: {} → {}",
            previous,
            counter.goal().to_string().green().bold()
        )),
        OutputFormat::Json => to_json(&serde_json::json!({
            "previous": previous,
            "goal": counter.goal(),
            "status": counter.status(),
        })),
    }
}

/// Describe a rollover for the user, if one closed out a day.
#[must_use]
pub fn rollover_notice(outcome: &ResetOutcome) -> Option<String> {
    let ResetOutcome::RolledOver {
        finalized: Some(FinalizedDay { date, record }),
    } = outcome
    else {
        return None;
    };

    let mark = if record.is_success() {
        "✓".green()
    } else {
        "✗".red()
    };
    Some(format!(
        "New day. {} finished at {}/{} {mark}",
        date.format("%Y-%m-%d"),
        record.completed,
        record.goal
    ))
}
