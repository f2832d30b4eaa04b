//! Diagnostics shared by every part of physlock.
//!
//! Fatal errors and warnings are single lines on standard error with a fixed
//! program prefix, so the locking component's messages and ours read alike.

use crate::error::PhyslockError;
use std::fmt::Display;
use std::process;

const PROGRAM: &str = "physlock";

/// Format a fatal diagnostic line (without trailing newline).
pub fn format_fatal(msg: impl Display) -> String {
    format!("{}: error: {}", PROGRAM, msg)
}

/// Format a warning diagnostic line (without trailing newline).
pub fn format_warning(msg: impl Display) -> String {
    format!("{}: warning: {}", PROGRAM, msg)
}

/// Print an advisory message. Never terminates the process.
pub fn warn(msg: impl Display) {
    eprintln!("{}", format_warning(msg));
}

/// Report a fatal error, run `cleanup`, and terminate the process.
///
/// `cleanup` releases whatever the caller already acquired (restoring kernel
/// state, for instance). Its own failure is only a warning at this point.
pub fn die<F>(err: &PhyslockError, cleanup: F) -> !
where
    F: FnOnce() -> Result<(), PhyslockError>,
{
    eprintln!("{}", format_fatal(err));

    if let Err(cleanup_err) = cleanup() {
        warn(format_args!("cleanup failed: {}", cleanup_err));
    }

    process::exit(err.exit_code());
}
