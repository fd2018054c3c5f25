//! The daily counter state machine.
//!
//! Tracks how many paperclips are done today, rolls the count over when the
//! calendar date changes, and finalizes each past day into the history.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paperclip::{layout, Paperclip};
use crate::config::Paths;
use crate::error::{CounterError, PersistenceError};
use crate::storage::{DayRecord, HistoryStore, SettingsStore};

/// Result of completing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompleteOutcome {
    /// One more paperclip is done.
    Completed,
    /// This completion met the daily goal exactly.
    GoalReached,
    /// Nothing left to complete; counters unchanged.
    NoTasksRemaining,
}

/// Result of undoing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndoOutcome {
    /// One paperclip moved back to undone.
    Undone,
    /// Nothing completed today; counters unchanged.
    NoCompletedTasks,
}

/// A day finalized by a rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedDay {
    pub date: NaiveDate,
    pub record: DayRecord,
}

/// Result of a daily reset check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ResetOutcome {
    /// Today was already processed (or the clock went backward).
    Unchanged,
    /// A new day started; `finalized` is the closed-out previous day.
    RolledOver { finalized: Option<FinalizedDay> },
}

/// Snapshot of the counter for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterStatus {
    pub date: Option<NaiveDate>,
    pub done: u32,
    pub undone: i64,
    pub goal: u32,
    pub goal_reached: bool,
    pub title: String,
}

/// Today's paperclip counter, backed by the settings and history stores.
#[derive(Debug)]
pub struct DailyCounter {
    settings: SettingsStore,
    history: HistoryStore,
    load_warnings: Vec<PersistenceError>,
}

impl DailyCounter {
    /// Open the counter over the files in `paths`.
    ///
    /// Never fails: unusable files fall back to defaults and the reasons are
    /// kept for [`take_load_warnings`](Self::take_load_warnings).
    #[must_use]
    pub fn open(paths: &Paths) -> Self {
        let (settings, settings_warning) = SettingsStore::open(&paths.settings_file);
        let (history, history_warning) = HistoryStore::open(&paths.history_file);

        let mut counter = Self::from_stores(settings, history);
        counter.load_warnings = settings_warning.into_iter().chain(history_warning).collect();
        counter
    }

    /// Build a counter from already-opened stores.
    #[must_use]
    pub const fn from_stores(settings: SettingsStore, history: HistoryStore) -> Self {
        Self {
            settings,
            history,
            load_warnings: Vec::new(),
        }
    }

    /// Errors that forced a fallback to defaults while opening.
    pub fn take_load_warnings(&mut self) -> Vec<PersistenceError> {
        std::mem::take(&mut self.load_warnings)
    }

    #[must_use]
    pub const fn done(&self) -> u32 {
        self.history.done_count()
    }

    /// Paperclips left for today. Negative when over-completed.
    #[must_use]
    pub fn undone(&self) -> i64 {
        i64::from(self.goal()) - i64::from(self.done())
    }

    #[must_use]
    pub const fn goal(&self) -> u32 {
        self.settings.daily_paperclips()
    }

    #[must_use]
    pub const fn last_reset(&self) -> Option<NaiveDate> {
        self.history.last_reset()
    }

    /// Finalized day records.
    #[must_use]
    pub const fn records(&self) -> &BTreeMap<NaiveDate, DayRecord> {
        self.history.daily_records()
    }

    /// Move one paperclip to done.
    ///
    /// # Errors
    ///
    /// Returns an error if the new count cannot be saved; the count is still
    /// updated in memory.
    pub fn complete_task(&mut self) -> Result<CompleteOutcome, PersistenceError> {
        if self.undone() <= 0 {
            tracing::debug!(done = self.done(), goal = self.goal(), "no tasks remaining");
            return Ok(CompleteOutcome::NoTasksRemaining);
        }

        let done = self.done() + 1;
        tracing::debug!(done, goal = self.goal(), "task completed");
        self.history.update_done_count(done)?;

        if self.undone() == 0 {
            tracing::info!(goal = self.goal(), "daily goal reached");
            Ok(CompleteOutcome::GoalReached)
        } else {
            Ok(CompleteOutcome::Completed)
        }
    }

    /// Move one paperclip back to undone.
    ///
    /// # Errors
    ///
    /// Returns an error if the new count cannot be saved; the count is still
    /// updated in memory.
    pub fn undo_task(&mut self) -> Result<UndoOutcome, PersistenceError> {
        if self.done() == 0 {
            tracing::debug!("no completed tasks to undo");
            return Ok(UndoOutcome::NoCompletedTasks);
        }

        let done = self.done() - 1;
        tracing::debug!(done, goal = self.goal(), "task undone");
        self.history.update_done_count(done)?;
        Ok(UndoOutcome::Undone)
    }

    /// Change the daily goal. Today's done count is left as is.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGoal` for `new_goal <= 0`, leaving the goal unchanged,
    /// or a persistence error if the new goal cannot be saved.
    pub fn set_goal(&mut self, new_goal: i64) -> Result<(), CounterError> {
        self.settings.update_daily_goal(new_goal)?;
        tracing::info!(goal = new_goal, done = self.done(), "daily goal updated");
        Ok(())
    }

    /// Roll the counter over if `today` is a new day.
    ///
    /// The previous day's count is finalized under its date with the current
    /// goal, the live count resets to zero, and `today` becomes the last
    /// processed date. Calling this again with the same date does nothing.
    /// A `today` earlier than the last processed date is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the rollover cannot be saved; it is still applied
    /// in memory.
    pub fn check_daily_reset(&mut self, today: NaiveDate) -> Result<ResetOutcome, PersistenceError> {
        let last_reset = self.last_reset();

        match last_reset {
            Some(last) if last == today => return Ok(ResetOutcome::Unchanged),
            Some(last) if last > today => {
                tracing::warn!(%last, %today, "date moved backward, skipping rollover");
                return Ok(ResetOutcome::Unchanged);
            }
            _ => {}
        }

        let finalized = last_reset.map(|date| FinalizedDay {
            date,
            record: DayRecord::new(self.done(), self.goal()),
        });

        tracing::info!(
            %today,
            previous = ?last_reset,
            completed = self.done(),
            goal = self.goal(),
            "rolling over to a new day"
        );

        self.history
            .roll_over(today, finalized.map(|day| (day.date, day.record)))?;

        Ok(ResetOutcome::RolledOver { finalized })
    }

    /// Paperclips to draw for today.
    #[must_use]
    pub fn paperclips(&self) -> Vec<Paperclip> {
        layout(self.done(), self.goal())
    }

    /// Compact title, e.g. `📎 3/5`.
    #[must_use]
    pub fn tray_title(&self) -> String {
        format!("📎 {}/{}", self.done(), self.goal())
    }

    /// Snapshot of today's progress.
    #[must_use]
    pub fn status(&self) -> CounterStatus {
        CounterStatus {
            date: self.last_reset(),
            done: self.done(),
            undone: self.undone(),
            goal: self.goal(),
            goal_reached: self.undone() <= 0,
            title: self.tray_title(),
        }
    }
}
