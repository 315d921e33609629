//! Relative luminance and the light/dark overlay text decision.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;

use crate::models::RgbColor;

/// Luminance above which dark text reads better than light text.
pub const LUMINANCE_THRESHOLD: f64 = 0.179;

/// Text color to draw on top of a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastColor {
    /// Light text for dark swatches
    White,
    /// Dark text for light swatches
    Black,
}

impl ContrastColor {
    /// RGB value of the text color.
    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        match self {
            Self::White => RgbColor::new(255, 255, 255),
            Self::Black => RgbColor::new(0, 0, 0),
        }
    }
}

impl fmt::Display for ContrastColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::White => "white",
            Self::Black => "black",
        })
    }
}

/// WCAG relative luminance of an sRGB color, in [0, 1].
///
/// # Examples
///
/// ```
/// use lazypalette::contrast::luminance;
///
/// assert_eq!(luminance(0, 0, 0), 0.0);
/// assert!((luminance(255, 255, 255) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// Overlay text color for an already parsed color.
#[must_use]
pub fn contrast_color_for(rgb: RgbColor) -> ContrastColor {
    if luminance(rgb.r, rgb.g, rgb.b) > LUMINANCE_THRESHOLD {
        ContrastColor::Black
    } else {
        ContrastColor::White
    }
}

/// Overlay text color for a `#RRGGBB` string.
///
/// # Errors
///
/// Returns an error if `hex` is not a well-formed hex color.
///
/// # Examples
///
/// ```
/// use lazypalette::contrast::{contrast_color, ContrastColor};
///
/// assert_eq!(contrast_color("#FFFFFF").unwrap(), ContrastColor::Black);
/// assert_eq!(contrast_color("#000000").unwrap(), ContrastColor::White);
/// ```
pub fn contrast_color(hex: &str) -> Result<ContrastColor> {
    let rgb = RgbColor::from_hex(hex).context("Cannot pick a contrast color")?;
    Ok(contrast_color_for(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance(0, 0, 0), 0.0);
        assert!((luminance(255, 255, 255) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_luminance_channel_weights() {
        assert!((luminance(255, 0, 0) - 0.2126).abs() < 1e-9);
        assert!((luminance(0, 255, 0) - 0.7152).abs() < 1e-9);
        assert!((luminance(0, 0, 255) - 0.0722).abs() < 1e-9);
    }

    #[test]
    fn test_luminance_linear_segment() {
        // 10/255 ≈ 0.0392 sits below the 0.03928 knee
        let expected = (10.0 / 255.0) / 12.92;
        assert!((luminance(10, 10, 10) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_color_black_and_white() {
        assert_eq!(contrast_color("#FFFFFF").unwrap(), ContrastColor::Black);
        assert_eq!(contrast_color("#000000").unwrap(), ContrastColor::White);
    }

    #[test]
    fn test_contrast_color_threshold() {
        // Pure blue is dark, pure yellow is light
        assert_eq!(contrast_color("#0000FF").unwrap(), ContrastColor::White);
        assert_eq!(contrast_color("#FFFF00").unwrap(), ContrastColor::Black);
        // Mid gray (#777777 ≈ 0.184) is just over the cut, #757575 (≈ 0.178) just under
        assert_eq!(contrast_color("#777777").unwrap(), ContrastColor::Black);
        assert_eq!(contrast_color("#757575").unwrap(), ContrastColor::White);
    }

    #[test]
    fn test_contrast_color_rejects_malformed_hex() {
        assert!(contrast_color("#FFF").is_err());
        assert!(contrast_color("not a color").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ContrastColor::White.to_string(), "white");
        assert_eq!(ContrastColor::Black.to_string(), "black");
        assert_eq!(ContrastColor::Black.rgb(), RgbColor::new(0, 0, 0));
    }
}
