//! Error types for physlock.
//!
//! Every failure in the control-file protocol is fatal, so each variant keeps
//! enough context (path, OS error, raw file text) to explain itself in a
//! single diagnostic line.

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for physlock operations.
#[derive(Error, Debug)]
pub enum PhyslockError {
    /// A control file could not be opened.
    #[error("could not open file: {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    /// A control file could not be read.
    #[error("could not read file: {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// A control file could not be written.
    #[error("could not write file: {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// A control file could not be closed after reading or writing.
    #[error("could not close file: {}: {source}", path.display())]
    Close { path: PathBuf, source: io::Error },

    /// A control file held something other than an integer and its delimiter.
    #[error("invalid file content: {}: {content}", path.display())]
    InvalidContent { path: PathBuf, content: String },

    /// The configuration file is unreadable or invalid.
    #[error("config: {0}")]
    Config(String),

    /// The saved kernel state could not be loaded or stored.
    #[error("saved state: {0}")]
    State(String),
}

impl PhyslockError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PhyslockError::Open { .. }
            | PhyslockError::Read { .. }
            | PhyslockError::Write { .. }
            | PhyslockError::Close { .. }
            | PhyslockError::InvalidContent { .. }
            | PhyslockError::Config(_)
            | PhyslockError::State(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for physlock operations.
pub type Result<T> = std::result::Result<T, PhyslockError>;
