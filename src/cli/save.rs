//! Save command: stores the current palette as a favorite.

use crate::cli::common::{favorites_path, require_session, session_path, CliError, CliResult};
use crate::services::FavoritesService;
use clap::Args;

/// Save the current palette to favorites
#[derive(Debug, Clone, Args)]
pub struct SaveArgs {
    /// Optional label for the palette
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,
}

impl SaveArgs {
    /// Execute the save command
    pub fn execute(&self) -> CliResult<()> {
        let session = require_session(&session_path()?)?;

        let path = favorites_path()?;
        let mut favorites = FavoritesService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load favorites: {e:#}")))?;

        let palette = session.to_palette(self.name.as_deref());
        let id = palette.id().to_string();
        let title = palette.title();
        favorites.add(palette);

        FavoritesService::save(&favorites, &path)
            .map_err(|e| CliError::io(format!("Failed to save favorites: {e:#}")))?;

        println!("Saved palette {id} ({title})");
        Ok(())
    }
}
