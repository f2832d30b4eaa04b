//! Suppressing kernel features for a console lock.

use crate::cli::Options;
use crate::config::Config;
use crate::error::Result;
use crate::session::KernelState;
use crate::state::SavedState;

/// Suppress, then hand the replaced values to the state file for `-L`.
///
/// The state file is only ever replaced as a whole and only removed by a
/// successful unlock, so values saved by an earlier lock survive any failure
/// here. Values this run replaced stay in `state` until the file holding them
/// has been written.
pub fn cmd_lock(options: &Options, config: &Config, state: &mut KernelState) -> Result<()> {
    let previous = SavedState::load(&config.state_path)?;

    state.suppress(options.disable_sysrq, config.quiet_console_level)?;

    // Values from an earlier lock are the originals and take precedence.
    let mut saved = state.to_saved();
    if let Some(previous) = previous {
        saved.sysrq = previous.sysrq.or(saved.sysrq);
        saved.console_level = previous.console_level.or(saved.console_level);
    }
    saved.store(&config.state_path)?;

    state.release();
    Ok(())
}
