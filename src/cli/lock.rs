//! Lock command: pins a slot so regeneration leaves it alone.

use crate::cli::common::{
    load_config, print_strip, require_session, session_path, slot_index, store_session,
    CliError, CliResult,
};
use clap::Args;

/// Toggle the lock on a palette slot
#[derive(Debug, Clone, Args)]
pub struct LockArgs {
    /// Slot number, 1-5 from the left
    #[arg(value_name = "SLOT")]
    pub slot: usize,
}

impl LockArgs {
    /// Execute the lock command
    pub fn execute(&self) -> CliResult<()> {
        let index = slot_index(self.slot)?;
        let config = load_config()?;
        let path = session_path()?;

        let mut session = require_session(&path)?;

        let locked = session
            .toggle_lock(index)
            .map_err(|e| CliError::validation(e.to_string()))?;

        store_session(&session, &path)?;

        println!(
            "Slot {} {}",
            self.slot,
            if locked { "locked" } else { "unlocked" }
        );
        print_strip(session.mode, &session.colors, &config);
        Ok(())
    }
}
