//! Favorites commands: list, show, load and delete saved palettes.
//!
//! Palettes are addressed by id; any unique prefix of an id is accepted.

use crate::cli::common::{
    favorites_path, load_config, load_session, print_json, print_strip, session_path,
    store_session, CliError, CliResult,
};
use crate::models::Palette;
use crate::services::{Favorites, FavoritesService, Session};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Characters of the id shown in listings.
const SHORT_ID_LEN: usize = 8;

/// Manage saved palettes
#[derive(Debug, Clone, Args)]
pub struct FavoritesArgs {
    /// Favorites subcommand
    #[command(subcommand)]
    pub command: FavoritesCommand,
}

/// Favorites subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum FavoritesCommand {
    /// List saved palettes, newest first
    List(ListFavoritesArgs),
    /// Show one saved palette
    Show(ShowFavoriteArgs),
    /// Make a saved palette the current one
    Load(LoadFavoriteArgs),
    /// Remove a saved palette
    Delete(DeleteFavoriteArgs),
}

/// List saved palettes
#[derive(Debug, Clone, Args)]
pub struct ListFavoritesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show one saved palette
#[derive(Debug, Clone, Args)]
pub struct ShowFavoriteArgs {
    /// Palette id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output the palette as JSON
    #[arg(long)]
    pub json: bool,
}

/// Load a saved palette into the current session
#[derive(Debug, Clone, Args)]
pub struct LoadFavoriteArgs {
    /// Palette id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Delete a saved palette
#[derive(Debug, Clone, Args)]
pub struct DeleteFavoriteArgs {
    /// Palette id or unique id prefix
    #[arg(value_name = "ID")]
    pub id: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ListFavoritesResponse<'a> {
    favorites: &'a Favorites,
    count: usize,
}

impl FavoritesArgs {
    /// Execute the favorites command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            FavoritesCommand::List(args) => args.execute(),
            FavoritesCommand::Show(args) => args.execute(),
            FavoritesCommand::Load(args) => args.execute(),
            FavoritesCommand::Delete(args) => args.execute(),
        }
    }
}

fn load_favorites() -> CliResult<Favorites> {
    FavoritesService::load(&favorites_path()?)
        .map_err(|e| CliError::io(format!("Failed to load favorites: {e:#}")))
}

fn find<'a>(favorites: &'a Favorites, id: &str) -> CliResult<&'a Palette> {
    favorites
        .find(id)
        .map_err(|e| CliError::validation(e.to_string()))
}

fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

impl ListFavoritesArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let favorites = load_favorites()?;

        if self.json {
            return print_json(&ListFavoritesResponse {
                favorites: &favorites,
                count: favorites.len(),
            });
        }

        if favorites.is_empty() {
            println!("No saved palettes.");
            return Ok(());
        }

        println!("Saved palettes ({}):", favorites.len());
        println!();
        for palette in favorites.iter() {
            let hexes: Vec<&str> = palette.colors().iter().map(|c| c.hex()).collect();
            println!(
                "  {:<9} {:<30} {:<20} {}",
                short_id(palette.id()),
                palette.title(),
                palette.mode().display_name(),
                hexes.join(" ")
            );
        }

        Ok(())
    }
}

impl ShowFavoriteArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let favorites = load_favorites()?;
        let palette = find(&favorites, &self.id)?;

        if self.json {
            return print_json(palette);
        }

        let config = load_config()?;
        println!("{} [{}]", palette.title(), palette.id());
        print_strip(palette.mode(), palette.colors(), &config);
        Ok(())
    }
}

impl LoadFavoriteArgs {
    /// Execute the load command
    pub fn execute(&self) -> CliResult<()> {
        let favorites = load_favorites()?;
        let palette = find(&favorites, &self.id)?;

        let path = session_path()?;
        let session = match load_session(&path)? {
            Some(mut session) => {
                session.load_palette(palette);
                session
            }
            None => Session::from_palette(palette),
        };

        store_session(&session, &path)?;

        let config = load_config()?;
        println!("Loaded {}", palette.title());
        print_strip(session.mode, &session.colors, &config);
        Ok(())
    }
}

impl DeleteFavoriteArgs {
    /// Execute the delete command
    pub fn execute(&self) -> CliResult<()> {
        let path = favorites_path()?;
        let mut favorites = FavoritesService::load(&path)
            .map_err(|e| CliError::io(format!("Failed to load favorites: {e:#}")))?;

        let removed = favorites
            .delete(&self.id)
            .map_err(|e| CliError::validation(e.to_string()))?;

        FavoritesService::save(&favorites, &path)
            .map_err(|e| CliError::io(format!("Failed to save favorites: {e:#}")))?;

        println!("Deleted palette {} ({})", removed.id(), removed.title());
        Ok(())
    }
}
