//! Path resolution for paperclips configuration and data files.
//!
//! All paperclips data is stored in `~/.paperclips/` unless overridden:
//! - `config.yaml` - Application preferences
//! - `settings.json` - Daily goal
//! - `history.json` - Today's live count and finalized day records

use std::path::PathBuf;

use crate::error::PaperclipsError;

/// Paths to paperclips configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.paperclips/`
    pub root: PathBuf,
    /// Config file: `~/.paperclips/config.yaml`
    pub config_file: PathBuf,
    /// Settings file: `~/.paperclips/settings.json`
    pub settings_file: PathBuf,
    /// History file: `~/.paperclips/history.json`
    pub history_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PaperclipsError> {
        let home = std::env::var("HOME").map_err(|_| {
            PaperclipsError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".paperclips")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            settings_file: root.join("settings.json"),
            history_file: root.join("history.json"),
            root,
        }
    }

    /// Ensure the data directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PaperclipsError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PaperclipsError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
