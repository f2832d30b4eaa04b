//! `physlock -L`: put back what an earlier lock saved.

use crate::config::Config;
use crate::error::Result;
use crate::report;
use crate::session::KernelState;
use crate::state::SavedState;

pub fn cmd_unlock(config: &Config, state: &mut KernelState) -> Result<()> {
    let Some(saved) = SavedState::load(&config.state_path)? else {
        report::warn(format_args!(
            "no saved kernel state in '{}'; nothing to restore",
            config.state_path.display()
        ));
        return Ok(());
    };

    state.adopt(&saved);
    state.restore()?;

    SavedState::remove(&config.state_path)
}
