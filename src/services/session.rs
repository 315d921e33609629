//! The currently displayed color set.
//!
//! A session is what the user is looking at between commands: the five
//! colors with their lock flags and the active harmony mode. Regenerating,
//! switching modes, toggling locks, and loading a favorite all operate on it.

use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::write_atomic;
use crate::config::Config;
use crate::constants::PALETTE_SIZE;
use crate::generator::generate_palette;
use crate::models::{Color, ColorSet, HarmonyMode, Palette};

/// Live color set plus the mode it is regenerated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Active harmony mode
    pub mode: HarmonyMode,
    /// The five displayed colors
    pub colors: ColorSet,
}

impl Session {
    /// Starts a session with a freshly generated set.
    pub fn generate<R: Rng + ?Sized>(mode: HarmonyMode, rng: &mut R) -> Self {
        Self {
            mode,
            colors: generate_palette(mode, None, rng),
        }
    }

    /// Regenerates every unlocked slot.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.colors = generate_palette(self.mode, Some(&self.colors), rng);
    }

    /// Switches the harmony mode and regenerates with it.
    pub fn change_mode<R: Rng + ?Sized>(&mut self, mode: HarmonyMode, rng: &mut R) {
        self.mode = mode;
        self.regenerate(rng);
    }

    /// Color at a zero-based slot.
    pub fn color(&self, index: usize) -> Result<&Color> {
        self.colors.get(index).with_context(|| out_of_range(index))
    }

    /// Flips the lock on a zero-based slot and returns the new state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool> {
        let color = self
            .colors
            .get_mut(index)
            .with_context(|| out_of_range(index))?;
        Ok(color.toggle_lock())
    }

    /// Number of locked slots.
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.colors.iter().filter(|c| c.is_locked()).count()
    }

    /// Replaces the session with a saved palette. All slots come back unlocked.
    pub fn load_palette(&mut self, palette: &Palette) {
        *self = Self::from_palette(palette);
    }

    /// Session showing a saved palette, all slots unlocked.
    #[must_use]
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            mode: palette.mode(),
            colors: palette.colors().clone().map(Color::unlocked),
        }
    }

    /// Assembles a palette from the displayed colors.
    #[must_use]
    pub fn to_palette(&self, name: Option<&str>) -> Palette {
        let palette = Palette::create(self.colors.clone(), self.mode);
        match name {
            Some(name) => palette.with_name(name),
            None => palette,
        }
    }
}

fn out_of_range(index: usize) -> String {
    format!("Slot index {index} is out of range (a palette has {PALETTE_SIZE} slots)")
}

/// Loads and stores the session file.
pub struct SessionService;

impl SessionService {
    /// Default session file: `<config dir>/session.json`.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("session.json"))
    }

    /// Loads the session, or `None` when nothing has been generated yet.
    pub fn load(path: &Path) -> Result<Option<Session>> {
        if !path.exists() {
            debug!(path = %path.display(), "No session file");
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {}", path.display()))?;
        let session = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {}", path.display()))?;

        Ok(Some(session))
    }

    /// Loads the session or starts a new one in `default_mode`.
    pub fn load_or_generate<R: Rng + ?Sized>(
        path: &Path,
        default_mode: HarmonyMode,
        rng: &mut R,
    ) -> Result<Session> {
        match Self::load(path)? {
            Some(session) => Ok(session),
            None => Ok(Session::generate(default_mode, rng)),
        }
    }

    /// Writes the session atomically.
    pub fn save(session: &Session, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(session).context("Failed to serialize session")?;
        write_atomic(path, &content)?;
        debug!(path = %path.display(), mode = %session.mode, "Saved session");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn test_regenerate_keeps_locked_slots() {
        let mut rng = rng();
        let mut session = Session::generate(HarmonyMode::Analogous, &mut rng);
        assert_eq!(session.locked_count(), 0);

        assert!(session.toggle_lock(0).unwrap());
        assert!(session.toggle_lock(4).unwrap());
        let before = session.clone();

        session.regenerate(&mut rng);
        assert_eq!(session.colors[0], before.colors[0]);
        assert_eq!(session.colors[4], before.colors[4]);
        assert_ne!(session.colors[2].hex(), before.colors[2].hex());
        assert_eq!(session.locked_count(), 2);
    }

    #[test]
    fn test_change_mode() {
        let mut rng = rng();
        let mut session = Session::generate(HarmonyMode::Analogous, &mut rng);
        session.change_mode(HarmonyMode::Monochromatic, &mut rng);

        assert_eq!(session.mode, HarmonyMode::Monochromatic);
        let hue = session.colors[0].hsl().h;
        assert!(session.colors.iter().all(|c| c.hsl().h == hue));
    }

    #[test]
    fn test_toggle_lock_out_of_range() {
        let mut session = Session::generate(HarmonyMode::Triadic, &mut rng());
        assert!(session.toggle_lock(5).is_err());
        assert!(session.color(7).is_err());
        assert!(session.color(4).is_ok());
    }

    #[test]
    fn test_palette_roundtrip_unlocks() {
        let mut rng = rng();
        let mut session = Session::generate(HarmonyMode::Complementary, &mut rng);
        session.toggle_lock(1).unwrap();

        let palette = session.to_palette(Some("Ocean"));
        assert_eq!(palette.name(), Some("Ocean"));
        assert!(palette.colors()[1].is_locked());

        let mut other = Session::generate(HarmonyMode::Analogous, &mut rng);
        other.load_palette(&palette);
        assert_eq!(other.mode, HarmonyMode::Complementary);
        assert_eq!(other.locked_count(), 0);
        for (loaded, saved) in other.colors.iter().zip(palette.colors().iter()) {
            assert_eq!(loaded.hex(), saved.hex());
            assert_eq!(loaded.id(), saved.id());
        }
    }

    #[test]
    fn test_service_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");

        assert!(SessionService::load(&path).unwrap().is_none());

        let mut session = Session::generate(HarmonyMode::Triadic, &mut rng());
        session.toggle_lock(3).unwrap();
        SessionService::save(&session, &path).unwrap();

        let loaded = SessionService::load(&path).unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_load_or_generate_uses_default_mode() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");

        let session =
            SessionService::load_or_generate(&path, HarmonyMode::Monochromatic, &mut rng())
                .unwrap();
        assert_eq!(session.mode, HarmonyMode::Monochromatic);
        assert!(!path.exists(), "loading must not write");
    }

    #[test]
    fn test_session_with_mismatched_color_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");

        let session = Session::generate(HarmonyMode::Analogous, &mut rng());
        let mut value = serde_json::to_value(&session).unwrap();
        value["colors"][2]["hex"] = "banana".into();
        fs::write(&path, value.to_string()).unwrap();

        let err = SessionService::load(&path).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Failed to parse session file"));
        assert!(message.contains("'banana' is not a hex color"));
    }

    #[test]
    fn test_corrupt_session_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let err = SessionService::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse session file"));
    }
}
