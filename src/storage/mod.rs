//! Storage layer for paperclips.
//!
//! This module provides JSON-file persistence for:
//! - Settings (daily goal)
//! - History (live count, last rollover, finalized day records)

mod history;
mod json_file;
mod settings;

pub use history::{DayRecord, History, HistoryStore};
pub use json_file::{read_json, write_json};
pub use settings::{Settings, SettingsStore, DEFAULT_DAILY_PAPERCLIPS, MAX_DAILY_PAPERCLIPS};
