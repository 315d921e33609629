//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use chrono::{TimeZone, Utc};
use lazypalette::models::{Color, ColorSet, HarmonyMode, Palette};
use lazypalette::services::{Favorites, FavoritesService, Session, SessionService};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Hex codes of [`sample_colors`], in strip order.
pub const SAMPLE_HEXES: [&str; 5] = ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000"];

/// Five fixed colors with ids `c1`..`c5`.
pub fn sample_colors() -> ColorSet {
    std::array::from_fn(|i| {
        Color::from_hex(SAMPLE_HEXES[i], format!("c{}", i + 1)).expect("valid sample hex")
    })
}

/// Palette over [`sample_colors`] with a deterministic timestamp.
pub fn sample_palette(id: &str, name: Option<&str>) -> Palette {
    let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let palette = Palette::new(id, sample_colors(), HarmonyMode::Triadic, created);
    match name {
        Some(name) => palette.with_name(name),
        None => palette,
    }
}

/// Empty, isolated config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Writes favorites (given newest first) into a config directory.
pub fn write_favorites(config_dir: &Path, palettes: &[Palette]) {
    let mut favorites = Favorites::new();
    for palette in palettes.iter().rev() {
        favorites.add(palette.clone());
    }
    FavoritesService::save(&favorites, &config_dir.join("favorites.json"))
        .expect("Failed to write favorites");
}

/// Writes a session into a config directory.
pub fn write_session(config_dir: &Path, session: &Session) {
    SessionService::save(session, &config_dir.join("session.json"))
        .expect("Failed to write session");
}

/// Reads the session back from a config directory.
pub fn read_session(config_dir: &Path) -> Option<Session> {
    SessionService::load(&config_dir.join("session.json")).expect("Failed to read session")
}

/// Reads favorites back from a config directory.
pub fn read_favorites(config_dir: &Path) -> Favorites {
    FavoritesService::load(&config_dir.join("favorites.json")).expect("Failed to read favorites")
}

/// Path to the lazypalette binary
pub fn lazypalette_bin() -> &'static str {
    env!("CARGO_BIN_EXE_lazypalette")
}

/// Runs the binary against an isolated config directory.
pub fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(lazypalette_bin())
        .env("LAZYPALETTE_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Stdout of a run as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a run as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Asserts a zero exit status, showing stderr on failure.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr(output)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sample_palette() {
        let palette = sample_palette("abc", Some("Primaries"));
        assert_eq!(palette.colors().len(), 5);
        assert_eq!(palette.colors()[2].hex(), "#0000FF");
        assert_eq!(palette.name(), Some("Primaries"));
    }

    #[test]
    fn test_fixture_favorites_order() {
        let dir = temp_config_dir();
        write_favorites(
            dir.path(),
            &[sample_palette("newest", None), sample_palette("oldest", None)],
        );
        let ids: Vec<String> = read_favorites(dir.path())
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, vec!["newest", "oldest"]);
    }
}
