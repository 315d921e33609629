//! Copy command: puts one slot's hex code on the clipboard.

use crate::cli::common::{
    copy_to_clipboard, require_session, session_path, slot_index, CliError, CliResult,
};
use clap::Args;

/// Copy a slot's hex code to the clipboard
#[derive(Debug, Clone, Args)]
pub struct CopyArgs {
    /// Slot number, 1-5 from the left
    #[arg(value_name = "SLOT")]
    pub slot: usize,
}

impl CopyArgs {
    /// Execute the copy command
    pub fn execute(&self) -> CliResult<()> {
        let index = slot_index(self.slot)?;
        let session = require_session(&session_path()?)?;

        let color = session
            .color(index)
            .map_err(|e| CliError::validation(e.to_string()))?;

        copy_to_clipboard(color.hex())?;
        println!("Copied {} to clipboard", color.hex());
        Ok(())
    }
}
