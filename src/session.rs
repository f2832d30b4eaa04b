//! Kernel state held for the duration of a lock.
//!
//! While consoles are locked, the SysRq key is optionally disabled and the
//! console log level lowered so kernel messages do not appear on the locked
//! screen. [`KernelState`] remembers what it changed so that exactly those
//! values are put back, whether the lock ends normally or through the fatal
//! error path.

use crate::config::Config;
use crate::error::Result;
use crate::state::SavedState;
use crate::sysrq;
use chrono::Utc;
use std::path::PathBuf;

/// Values replaced during this run, and where they live.
#[derive(Debug, Clone)]
pub struct KernelState {
    sysrq_path: PathBuf,
    printk_path: PathBuf,
    saved_sysrq: Option<i32>,
    saved_console_level: Option<i32>,
}

impl KernelState {
    /// An untouched state for the control files named in `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            sysrq_path: config.sysrq_path.clone(),
            printk_path: config.printk_path.clone(),
            saved_sysrq: None,
            saved_console_level: None,
        }
    }

    /// Disable SysRq (if requested) and lower the console log level.
    ///
    /// Each prior value is recorded as soon as its replacement is written, so
    /// a failure partway through still leaves [`restore`](Self::restore) able
    /// to undo what already happened. Values that already match are left
    /// alone and not recorded.
    pub fn suppress(&mut self, disable_sysrq: bool, quiet_level: i32) -> Result<()> {
        if disable_sysrq {
            let current = sysrq::get_sysrq_state(&self.sysrq_path)?;
            if current != 0 {
                sysrq::set_sysrq_state(&self.sysrq_path, 0)?;
                self.saved_sysrq = Some(current);
            }
        }

        let current = sysrq::get_console_log_level(&self.printk_path)?;
        if current != quiet_level {
            sysrq::set_console_log_level(&self.printk_path, quiet_level)?;
            self.saved_console_level = Some(current);
        }

        Ok(())
    }

    /// Write back every recorded value. Calling it again is a no-op.
    ///
    /// A value is forgotten only after it has been written, so a failed
    /// restore can be retried.
    pub fn restore(&mut self) -> Result<()> {
        if let Some(value) = self.saved_sysrq {
            sysrq::set_sysrq_state(&self.sysrq_path, value)?;
            self.saved_sysrq = None;
        }

        if let Some(level) = self.saved_console_level {
            sysrq::set_console_log_level(&self.printk_path, level)?;
            self.saved_console_level = None;
        }

        Ok(())
    }

    /// Whether anything still needs restoring.
    pub fn is_modified(&self) -> bool {
        self.saved_sysrq.is_some() || self.saved_console_level.is_some()
    }

    /// Snapshot the recorded values for a later `-L`.
    pub fn to_saved(&self) -> SavedState {
        SavedState {
            sysrq: self.saved_sysrq,
            console_level: self.saved_console_level,
            saved_at: Utc::now(),
        }
    }

    /// Adopt values recorded by an earlier run.
    pub fn adopt(&mut self, saved: &SavedState) {
        self.saved_sysrq = saved.sysrq;
        self.saved_console_level = saved.console_level;
    }

    /// Forget the recorded values without writing them back.
    ///
    /// Used once responsibility for restoring has been handed to a state
    /// file.
    pub fn release(&mut self) {
        self.saved_sysrq = None;
        self.saved_console_level = None;
    }
}
