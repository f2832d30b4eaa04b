//! Kernel-state handling driven by the parsed options.
//!
//! Two modes, picked from the flags:
//! - `-L`: restore the kernel state saved by an earlier lock
//! - otherwise: suppress kernel features and save what was replaced
//!
//! Securing the consoles themselves is the console-locking component's job.
//! `-d`, `-u` and `-i` are parsed for it and do not change what happens here.
//!
//! Every function here takes the caller's [`KernelState`] by reference, so if
//! anything fails `main` still holds the values that need restoring.

mod lock;
mod unlock;


use crate::cli::Options;
use crate::config::Config;
use crate::error::Result;
use crate::report;
use crate::session::KernelState;

/// What a run of physlock will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Restore saved kernel state and exit.
    Unlock,
    /// Suppress kernel features, save state, and exit.
    Lock,
}

impl Mode {
    /// Pick the mode for a set of options.
    ///
    /// `-L` wins over `-l` since restoring is the safe direction.
    pub fn from_options(options: &Options) -> Self {
        if options.only_unlock {
            Mode::Unlock
        } else {
            Mode::Lock
        }
    }
}

/// Run physlock in the mode selected by `options`.
pub fn dispatch(options: &Options, config: &Config, state: &mut KernelState) -> Result<()> {
    if options.only_unlock && options.only_lock {
        report::warn("both -l and -L given; only unlocking");
    }

    match Mode::from_options(options) {
        Mode::Unlock => unlock::cmd_unlock(config, state),
        Mode::Lock => lock::cmd_lock(options, config, state),
    }
}
