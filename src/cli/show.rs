//! Show command: prints the current palette.

use crate::cli::common::{
    load_config, print_json, print_strip, session_path, store_session, CliError, CliResult,
};
use crate::services::SessionService;
use clap::Args;

/// Show the current palette, generating one on first use
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Output the palette as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let path = session_path()?;

        let first_run = !path.exists();
        let session = SessionService::load_or_generate(
            &path,
            config.generation.default_mode,
            &mut rand::rng(),
        )
        .map_err(|e| CliError::io(format!("Failed to load session: {e:#}")))?;

        if first_run {
            store_session(&session, &path)?;
        }

        if self.json {
            print_json(&session)
        } else {
            print_strip(session.mode, &session.colors, &config);
            Ok(())
        }
    }
}
