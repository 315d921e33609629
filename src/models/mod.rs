//! Data models for colors, harmony modes, and saved palettes.
//!
//! This module contains the core data structures used throughout the application.
//! Models are pure values; none of them touch the file system.

pub mod color;
pub mod harmony;
pub mod hsl;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use color::{generate_id, Color, ColorSet};
pub use harmony::{HarmonyMode, LightnessPlan, SaturationSpread};
pub use hsl::{
    normalize_hue, HslColor, MAX_LIGHTNESS, MAX_SATURATION, MIN_LIGHTNESS, MIN_SATURATION,
};
pub use palette::Palette;
pub use rgb::RgbColor;
