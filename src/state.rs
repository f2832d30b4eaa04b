//! Saved kernel values shared between `physlock -l` and `physlock -L`.
//!
//! `-l` leaves the kernel suppressed after it exits, so the values it replaced
//! are written to a small YAML file. `-L` reads them back, restores them, and
//! removes the file.

use crate::error::{PhyslockError, Result};
use crate::fs::atomic_write;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Kernel values replaced by a lock, as persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    /// SysRq value before it was disabled, if it was changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sysrq: Option<i32>,

    /// Console log level before it was lowered, if it was changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_level: Option<i32>,

    /// When the values were saved.
    pub saved_at: DateTime<Utc>,
}

impl SavedState {
    /// Load saved state. Returns `Ok(None)` if no state file exists.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PhyslockError::State(format!(
                    "failed to read '{}': {}",
                    path.display(),
                    e
                )));
            }
        };

        serde_yaml::from_str(&content).map(Some).map_err(|e| {
            PhyslockError::State(format!("failed to parse '{}': {}", path.display(), e))
        })
    }

    /// Write the state file, replacing any previous one.
    ///
    /// The old file stays intact until the new one is complete.
    pub fn store(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| PhyslockError::State(format!("failed to serialize: {}", e)))?;

        atomic_write(path, yaml.as_bytes())
    }

    /// Remove the state file. A file that is already gone is not an error.
    pub fn remove(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PhyslockError::State(format!(
                "failed to remove '{}': {}",
                path.display(),
                e
            ))),
        }
    }
}
