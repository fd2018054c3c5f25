//! Persisted daily goal.
//!
//! Stored as `{ "daily_paperclips": <positive integer> }` in `settings.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::json_file::{read_json, write_json};
use crate::error::{CounterError, PersistenceError};

/// Goal used when no settings file exists yet.
pub const DEFAULT_DAILY_PAPERCLIPS: u32 = 5;

/// Largest daily goal accepted. Every paperclip is drawn on the board.
pub const MAX_DAILY_PAPERCLIPS: u32 = 1000;

/// On-disk settings schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of paperclips to complete each day.
    pub daily_paperclips: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_paperclips: DEFAULT_DAILY_PAPERCLIPS,
        }
    }
}

/// Owns `settings.json` for the lifetime of a counter.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    /// Load settings from `path`, falling back to defaults.
    ///
    /// A missing file is created with the defaults. An unreadable or invalid
    /// file yields the defaults together with the error that caused the
    /// fallback; the broken file is left untouched.
    pub fn open(path: &Path) -> (Self, Option<PersistenceError>) {
        match Self::load(path) {
            Ok(Some(settings)) => (Self::with_settings(path, settings), None),
            Ok(None) => {
                let store = Self::with_settings(path, Settings::default());
                let warning = store.save().err();
                if let Some(err) = &warning {
                    tracing::warn!(error = %err, "could not write default settings");
                }
                (store, warning)
            }
            Err(err) => {
                tracing::warn!(error = %err, "settings unusable, falling back to defaults");
                (Self::with_settings(path, Settings::default()), Some(err))
            }
        }
    }

    /// Create a store over `path` holding `settings`, without touching disk.
    #[must_use]
    pub fn with_settings(path: &Path, settings: Settings) -> Self {
        Self {
            path: path.to_path_buf(),
            settings,
        }
    }

    fn load(path: &Path) -> Result<Option<Settings>, PersistenceError> {
        let Some(settings) = read_json::<Settings>(path)? else {
            return Ok(None);
        };

        if !(1..=MAX_DAILY_PAPERCLIPS).contains(&settings.daily_paperclips) {
            return Err(PersistenceError::Invalid {
                path: path.to_path_buf(),
                reason: format!(
                    "daily_paperclips must be between 1 and {MAX_DAILY_PAPERCLIPS}, got {}",
                    settings.daily_paperclips
                ),
            });
        }

        Ok(Some(settings))
    }

    /// Current daily goal.
    #[must_use]
    pub const fn daily_paperclips(&self) -> u32 {
        self.settings.daily_paperclips
    }

    /// Change the daily goal and persist it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGoal` for goals outside `1..=MAX_DAILY_PAPERCLIPS`
    /// (nothing changes), or a
    /// persistence error if saving fails (the new goal is kept in memory).
    pub fn update_daily_goal(&mut self, goal: i64) -> Result<(), CounterError> {
        let goal = u32::try_from(goal)
            .ok()
            .filter(|g| (1..=MAX_DAILY_PAPERCLIPS).contains(g))
            .ok_or(CounterError::InvalidGoal(goal))?;

        self.settings.daily_paperclips = goal;
        self.save()?;
        Ok(())
    }

    /// Write the current settings to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self) -> Result<(), PersistenceError> {
        write_json(&self.path, &self.settings)
    }
}
