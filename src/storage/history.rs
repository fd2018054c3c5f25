//! Persisted progress history.
//!
//! `history.json` holds the live count for the current day, the date of the
//! last rollover, and one finalized [`DayRecord`] per past day.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::json_file::{read_json, write_json};
use super::settings::MAX_DAILY_PAPERCLIPS;
use crate::error::PersistenceError;

/// Outcome of a single finalized day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Paperclips completed that day.
    pub completed: u32,
    /// Goal that was active that day.
    pub goal: u32,
}

impl DayRecord {
    #[must_use]
    pub const fn new(completed: u32, goal: u32) -> Self {
        Self { completed, goal }
    }

    /// Whether the goal was met.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.completed >= self.goal
    }
}

/// On-disk history schema. Missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    /// Last date a rollover was processed for.
    pub last_reset: Option<NaiveDate>,
    /// Live completed count for `last_reset`.
    pub done_count: u32,
    /// Finalized records, ordered by date.
    pub daily_records: BTreeMap<NaiveDate, DayRecord>,
}

/// Owns `history.json` for the lifetime of a counter.
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    history: History,
}

impl HistoryStore {
    /// Load history from `path`, falling back to an empty history.
    ///
    /// Records with a zero goal are dropped with a warning. An unreadable or
    /// corrupt file yields an empty history plus the error; the file itself
    /// is only replaced on the next successful save.
    pub fn open(path: &Path) -> (Self, Option<PersistenceError>) {
        match Self::load(path) {
            Ok(Some(mut history)) => {
                let before = history.daily_records.len();
                history.daily_records.retain(|_, record| record.goal > 0);
                let dropped = before - history.daily_records.len();
                if dropped > 0 {
                    tracing::warn!(dropped, "ignoring day records with a zero goal");
                }
                (Self::with_history(path, history), None)
            }
            Ok(None) => (Self::with_history(path, History::default()), None),
            Err(err) => {
                tracing::warn!(error = %err, "history unusable, starting empty");
                (Self::with_history(path, History::default()), Some(err))
            }
        }
    }

    fn load(path: &Path) -> Result<Option<History>, PersistenceError> {
        let Some(history) = read_json::<History>(path)? else {
            return Ok(None);
        };

        if history.done_count > MAX_DAILY_PAPERCLIPS {
            return Err(PersistenceError::Invalid {
                path: path.to_path_buf(),
                reason: format!(
                    "done_count must be at most {MAX_DAILY_PAPERCLIPS}, got {}",
                    history.done_count
                ),
            });
        }

        Ok(Some(history))
    }

    /// Create a store over `path` holding `history`, without touching disk.
    #[must_use]
    pub fn with_history(path: &Path, history: History) -> Self {
        Self {
            path: path.to_path_buf(),
            history,
        }
    }

    #[must_use]
    pub const fn done_count(&self) -> u32 {
        self.history.done_count
    }

    #[must_use]
    pub const fn last_reset(&self) -> Option<NaiveDate> {
        self.history.last_reset
    }

    /// All finalized records.
    #[must_use]
    pub const fn daily_records(&self) -> &BTreeMap<NaiveDate, DayRecord> {
        &self.history.daily_records
    }

    /// Set the live count and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails; the new count is kept in memory.
    pub fn update_done_count(&mut self, count: u32) -> Result<(), PersistenceError> {
        self.history.done_count = count;
        self.save()
    }

    /// Finalize `finalized` (if any), reset the live count, and mark `today`
    /// as processed, in a single save.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails; the rollover is kept in memory.
    pub fn roll_over(
        &mut self,
        today: NaiveDate,
        finalized: Option<(NaiveDate, DayRecord)>,
    ) -> Result<(), PersistenceError> {
        if let Some((date, record)) = finalized {
            self.history.daily_records.insert(date, record);
        }
        self.history.done_count = 0;
        self.history.last_reset = Some(today);
        self.save()
    }

    /// Write the current history to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<(), PersistenceError> {
        write_json(&self.path, &self.history)
    }
}
