//! HSL color values and the range helpers shared by the generator.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// Lowest saturation a generated color may have.
pub const MIN_SATURATION: f64 = 30.0;
/// Highest saturation a generated color may have.
pub const MAX_SATURATION: f64 = 100.0;
/// Lowest lightness a generated color may have.
pub const MIN_LIGHTNESS: f64 = 15.0;
/// Highest lightness a generated color may have.
pub const MAX_LIGHTNESS: f64 = 85.0;

/// Wraps any hue in degrees into [0, 360).
///
/// # Examples
///
/// ```
/// use lazypalette::models::normalize_hue;
///
/// assert_eq!(normalize_hue(-30.0), 330.0);
/// assert_eq!(normalize_hue(390.0), 30.0);
/// assert_eq!(normalize_hue(360.0), 0.0);
/// ```
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    // Hues already in range come back bit-identical
    let wrapped = h.rem_euclid(360.0);
    // Tiny negative inputs round up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Color in HSL space.
///
/// Hue is in degrees [0, 360), saturation and lightness are percentages
/// [0, 100]. Values keep full float precision; rounding only happens for
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in degrees
    pub h: f64,
    /// Saturation percentage
    pub s: f64,
    /// Lightness percentage
    pub l: f64,
}

impl HslColor {
    /// Creates a new `HslColor` without normalizing or clamping.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Normalizes the hue and clamps saturation and lightness into the
    /// generator's perceptual ranges.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            h: normalize_hue(self.h),
            s: self.s.clamp(MIN_SATURATION, MAX_SATURATION),
            l: self.l.clamp(MIN_LIGHTNESS, MAX_LIGHTNESS),
        }
    }

    /// Converts to RGB.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor::from_hsl(self.h, self.s, self.l)
    }
}

impl fmt::Display for HslColor {
    /// CSS notation with every component rounded, e.g. `hsl(210, 65%, 48%)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}
