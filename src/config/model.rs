//! Config struct definition and default implementation.

use crate::sysrq::{PRINTK_PATH, SYSRQ_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for physlock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Kernel control files
    // =========================================================================
    /// Path to the SysRq enable file.
    #[serde(default = "default_sysrq_path")]
    pub sysrq_path: PathBuf,

    /// Path to the printk levels file.
    #[serde(default = "default_printk_path")]
    pub printk_path: PathBuf,

    /// Console log level to hold while locked (keeps kernel messages off the
    /// locked console).
    #[serde(default = "default_quiet_console_level")]
    pub quiet_console_level: i32,

    // =========================================================================
    // Session settings
    // =========================================================================
    /// Where `-l` records the kernel values that `-L` restores.
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sysrq_path: default_sysrq_path(),
            printk_path: default_printk_path(),
            quiet_console_level: default_quiet_console_level(),
            state_path: default_state_path(),
        }
    }
}

fn default_sysrq_path() -> PathBuf {
    PathBuf::from(SYSRQ_PATH)
}

fn default_printk_path() -> PathBuf {
    PathBuf::from(PRINTK_PATH)
}

fn default_quiet_console_level() -> i32 {
    1
}

fn default_state_path() -> PathBuf {
    PathBuf::from("/run/physlock.state")
}
