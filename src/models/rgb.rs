//! RGB color handling with hex parsing and HSL conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::hsl::{normalize_hue, HslColor};

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Channels are `u8`, so the out-of-range input that hex formatting cannot
/// represent is ruled out by the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use lazypalette::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use lazypalette::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#FF0000");
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `rgb(58, 123, 213)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Converts the color to a crossterm Color for terminal rendering.
    #[must_use]
    pub const fn to_crossterm_color(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }

    /// Creates an `RgbColor` from HSL (Hue, Saturation, Lightness).
    ///
    /// Uses the chroma / intermediate / match decomposition and selects the
    /// pre-offset triple by the 60° sector the hue falls into.
    ///
    /// # Arguments
    ///
    /// * `h` - Hue in degrees. Normalized into [0, 360) before sector selection.
    /// * `s` - Saturation percentage (0.0-100.0)
    /// * `l` - Lightness percentage (0.0-100.0)
    ///
    /// Channels are not clamped. Saturation or lightness outside 0-100 is a
    /// caller bug; the float-to-`u8` cast saturates in that case.
    ///
    /// # Panics
    ///
    /// Panics if any component is not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazypalette::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsl(0.0, 100.0, 50.0), RgbColor::new(255, 0, 0));
    /// assert_eq!(RgbColor::from_hsl(120.0, 100.0, 50.0), RgbColor::new(0, 255, 0));
    /// assert_eq!(RgbColor::from_hsl(240.0, 100.0, 50.0), RgbColor::new(0, 0, 255));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        assert!(
            h.is_finite() && s.is_finite() && l.is_finite(),
            "HSL components must be finite (got h={h}, s={s}, l={l})"
        );

        let h = normalize_hue(h);
        let s = s / 100.0;
        let l = l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: ((r + m) * 255.0).round() as u8,
            g: ((g + m) * 255.0).round() as u8,
            b: ((b + m) * 255.0).round() as u8,
        }
    }

    /// Converts the RGB color to HSL.
    ///
    /// Hue is in [0, 360) (0.0 for grayscale), saturation and lightness are
    /// percentages in [0, 100].
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn to_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return HslColor::new(0.0, 0.0, l * 100.0);
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        let h = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        HslColor::new(normalize_hue(h), s * 100.0, l * 100.0)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
