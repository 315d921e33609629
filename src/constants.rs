//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and palette dimensions.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LazyPalette";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "lazypalette";

/// Number of colors in every generated set and saved palette.
pub const PALETTE_SIZE: usize = 5;

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "LAZYPALETTE_CONFIG_DIR";
