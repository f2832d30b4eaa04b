//! Named accessors for the two kernel values physlock toggles.
//!
//! The sysrq file holds a single value followed by a newline. The printk file
//! packs four tab-separated levels on one line; only the first one, the
//! console log level, is read. Writes always replace the whole file with one
//! value, which the kernel interprets as the console level.

use crate::control;
use crate::error::Result;
use std::path::Path;

/// Default location of the SysRq enable bitmask.
pub const SYSRQ_PATH: &str = "/proc/sys/kernel/sysrq";

/// Default location of the printk log levels.
pub const PRINTK_PATH: &str = "/proc/sys/kernel/printk";

/// Read the current SysRq enable value.
pub fn get_sysrq_state(path: &Path) -> Result<i32> {
    control::read_int(path, b'\n')
}

/// Write a new SysRq enable value.
pub fn set_sysrq_state(path: &Path, value: i32) -> Result<()> {
    control::write_int(path, value)
}

/// Read the current console log level.
pub fn get_console_log_level(path: &Path) -> Result<i32> {
    control::read_int(path, b'\t')
}

/// Write a new console log level.
pub fn set_console_log_level(path: &Path, level: i32) -> Result<()> {
    control::write_int(path, level)
}
