//! Export command: renders a palette as CSS variables or JSON.

use crate::cli::common::{
    copy_to_clipboard, favorites_path, load_config, require_session, session_path, CliError,
    CliResult,
};
use crate::export::ExportFormat;
use crate::models::ColorSet;
use crate::services::FavoritesService;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// Export a palette as CSS or JSON
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Export a saved palette instead of the current one
    #[arg(long, value_name = "ID")]
    pub favorite: Option<String>,

    /// Write to a file; a directory receives palette.css or palette.json
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Copy the export text to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let format = self.format.unwrap_or(config.export.default_format);
        let colors = self.colors()?;

        let text = format
            .render(&colors)
            .map_err(|e| CliError::io(format!("Failed to export palette: {e:#}")))?;

        if let Some(output) = &self.output {
            let path = if output.is_dir() {
                output.join(format.file_name())
            } else {
                output.clone()
            };

            if path.exists() {
                warn!(path = %path.display(), "Overwriting existing file");
            }

            fs::write(&path, &text).map_err(|e| {
                CliError::io(format!("Failed to write {}: {e}", path.display()))
            })?;
            info!(path = %path.display(), %format, "Exported palette");
            println!("Exported {} to {}", format, path.display());
        }

        if self.copy {
            copy_to_clipboard(&text)?;
            println!("Copied {format} export to clipboard");
        }

        if self.output.is_none() && !self.copy {
            println!("{text}");
        }

        Ok(())
    }

    fn colors(&self) -> CliResult<ColorSet> {
        if let Some(id) = &self.favorite {
            let favorites = FavoritesService::load(&favorites_path()?)
                .map_err(|e| CliError::io(format!("Failed to load favorites: {e:#}")))?;
            let palette = favorites
                .find(id)
                .map_err(|e| CliError::validation(e.to_string()))?;
            return Ok(palette.colors().clone());
        }

        let session = require_session(&session_path()?)?;
        Ok(session.colors)
    }
}
