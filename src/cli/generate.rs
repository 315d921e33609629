//! Generate command: regenerates the unlocked slots of the current palette.

use crate::cli::common::{
    load_config, load_session, print_json, print_strip, session_path, store_session, CliResult,
};
use crate::generator::seeded_rng;
use crate::models::HarmonyMode;
use crate::services::Session;
use clap::Args;
use tracing::info;

/// Generate a new harmony palette
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Harmony mode (defaults to the current session mode)
    #[arg(short, long, value_enum)]
    pub mode: Option<HarmonyMode>,

    /// Seed for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Ignore the current session, including its locks
    #[arg(long)]
    pub fresh: bool,

    /// Output the palette as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let path = session_path()?;
        let mut rng = seeded_rng(self.seed);

        let existing = if self.fresh {
            None
        } else {
            load_session(&path)?
        };

        let session = match existing {
            Some(mut session) => {
                let mode = self.mode.unwrap_or(session.mode);
                session.change_mode(mode, &mut rng);
                session
            }
            None => Session::generate(
                self.mode.unwrap_or(config.generation.default_mode),
                &mut rng,
            ),
        };

        store_session(&session, &path)?;
        info!(mode = %session.mode, locked = session.locked_count(), "Generated palette");

        if self.json {
            print_json(&session)
        } else {
            print_strip(session.mode, &session.colors, &config);
            Ok(())
        }
    }
}
