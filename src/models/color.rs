//! A single palette swatch and the five-slot color set.

use anyhow::{bail, Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::hsl::{normalize_hue, HslColor};
use super::RgbColor;
use crate::constants::PALETTE_SIZE;
use crate::contrast::{self, ContrastColor};

/// The five ordered slots shown left to right.
pub type ColorSet = [Color; PALETTE_SIZE];

/// Generates an opaque identifier from the given random source.
///
/// Ids are UUID-formatted so they stay unique across saved palettes, but are
/// drawn from the caller's generator so seeded runs are reproducible.
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    uuid::Builder::from_random_bytes(rng.random())
        .into_uuid()
        .to_string()
}

/// A generated swatch.
///
/// `hex`, `rgb` and `hsl` always describe the same color. They are only set
/// together by the constructors; the lock flag is the one mutable field.
/// Deserialization checks the stored forms against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredColor")]
pub struct Color {
    hex: String,
    rgb: RgbColor,
    hsl: HslColor,
    locked: bool,
    id: String,
}

/// On-disk shape of a [`Color`], unchecked.
#[derive(Deserialize)]
struct StoredColor {
    hex: String,
    rgb: RgbColor,
    hsl: HslColor,
    locked: bool,
    id: String,
}

impl TryFrom<StoredColor> for Color {
    type Error = anyhow::Error;

    fn try_from(stored: StoredColor) -> Result<Self> {
        let rgb = RgbColor::from_hex(&stored.hex)
            .with_context(|| format!("Stored color '{}' is not a hex color", stored.hex))?;
        if rgb != stored.rgb {
            bail!(
                "Stored color {} does not match its {}",
                stored.hex,
                stored.rgb.to_css()
            );
        }

        let hsl = HslColor::new(normalize_hue(stored.hsl.h), stored.hsl.s, stored.hsl.l);
        // HSL keeps full precision, so allow one step of rounding per channel
        let derived = hsl.to_rgb();
        let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
        if !(close(derived.r, rgb.r) && close(derived.g, rgb.g) && close(derived.b, rgb.b)) {
            bail!("Stored color {} does not match its {}", stored.hex, hsl);
        }

        Ok(Self {
            hex: rgb.to_hex(),
            rgb,
            hsl,
            locked: stored.locked,
            id: stored.id,
        })
    }
}

impl Color {
    /// Builds an unlocked color from HSL, deriving the RGB and hex forms.
    ///
    /// The hue is normalized into [0, 360); saturation and lightness are
    /// stored with full precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazypalette::models::{Color, HslColor};
    ///
    /// let color = Color::from_hsl(HslColor::new(-120.0, 100.0, 50.0), "slot-1");
    /// assert_eq!(color.hex(), "#0000FF");
    /// assert_eq!(color.hsl().h, 240.0);
    /// assert!(!color.is_locked());
    /// ```
    #[must_use]
    pub fn from_hsl(hsl: HslColor, id: impl Into<String>) -> Self {
        let hsl = HslColor::new(normalize_hue(hsl.h), hsl.s, hsl.l);
        let rgb = hsl.to_rgb();

        Self {
            hex: rgb.to_hex(),
            rgb,
            hsl,
            locked: false,
            id: id.into(),
        }
    }

    /// Builds an unlocked color from a hex string, deriving HSL from RGB.
    ///
    /// # Errors
    ///
    /// Returns an error if the hex string is malformed.
    pub fn from_hex(hex: &str, id: impl Into<String>) -> Result<Self> {
        let rgb = RgbColor::from_hex(hex)?;

        Ok(Self {
            hex: rgb.to_hex(),
            rgb,
            hsl: rgb.to_hsl(),
            locked: false,
            id: id.into(),
        })
    }

    /// Canonical `#RRGGBB` form.
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// RGB channels.
    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        self.rgb
    }

    /// HSL components at full precision.
    #[must_use]
    pub const fn hsl(&self) -> HslColor {
        self.hsl
    }

    /// Whether the slot survives regeneration.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Slot identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sets the lock flag.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Flips the lock flag and returns the new state.
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }

    /// Returns the same color with the lock cleared.
    #[must_use]
    pub fn unlocked(mut self) -> Self {
        self.locked = false;
        self
    }

    /// Text color that stays readable on top of this swatch.
    #[must_use]
    pub fn contrast_color(&self) -> ContrastColor {
        contrast::contrast_color_for(self.rgb)
    }
}
