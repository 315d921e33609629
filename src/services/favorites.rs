//! Saved favorite palettes.
//!
//! Favorites are stored newest first as a JSON array of palettes in
//! `<config dir>/favorites.json`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::write_atomic;
use crate::config::Config;
use crate::models::Palette;

/// Ordered collection of saved palettes, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    palettes: Vec<Palette>,
}

impl Favorites {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            palettes: Vec::new(),
        }
    }

    /// Adds a palette at the front.
    pub fn add(&mut self, palette: Palette) {
        self.palettes.insert(0, palette);
    }

    /// Finds a palette by full id or unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing matches or the prefix is ambiguous.
    pub fn find(&self, id: &str) -> Result<&Palette> {
        let index = self.position(id)?;
        Ok(&self.palettes[index])
    }

    /// Removes a palette by full id or unique id prefix and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing matches or the prefix is ambiguous.
    pub fn delete(&mut self, id: &str) -> Result<Palette> {
        let index = self.position(id)?;
        Ok(self.palettes.remove(index))
    }

    /// Saved palettes, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    /// Number of saved palettes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Whether nothing has been saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize> {
        let id = id.trim();
        if id.is_empty() {
            anyhow::bail!("Palette id cannot be empty");
        }

        if let Some(index) = self.palettes.iter().position(|p| p.id() == id) {
            return Ok(index);
        }

        let matches: Vec<usize> = self
            .palettes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.id().starts_with(id))
            .map(|(index, _)| index)
            .collect();

        match matches.as_slice() {
            [index] => Ok(*index),
            [] => anyhow::bail!("No favorite palette with id '{id}'"),
            _ => anyhow::bail!(
                "Palette id '{id}' is ambiguous ({} favorites match); use more characters",
                matches.len()
            ),
        }
    }
}

/// Loads and stores the favorites file.
pub struct FavoritesService;

impl FavoritesService {
    /// Default favorites file: `<config dir>/favorites.json`.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("favorites.json"))
    }

    /// Loads favorites; a missing file is an empty collection.
    pub fn load(path: &Path) -> Result<Favorites> {
        if !path.exists() {
            debug!(path = %path.display(), "No favorites file");
            return Ok(Favorites::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read favorites file: {}", path.display()))?;
        let favorites: Favorites = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse favorites file: {}", path.display()))?;

        debug!(count = favorites.len(), "Loaded favorites");
        Ok(favorites)
    }

    /// Writes favorites atomically.
    pub fn save(favorites: &Favorites, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(favorites).context("Failed to serialize favorites")?;
        write_atomic(path, &content)?;
        info!(count = favorites.len(), path = %path.display(), "Saved favorites");
        Ok(())
    }
}
