//! Harmony modes and their fixed offset tables.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::PALETTE_SIZE;

/// Color-theory rule used to derive five colors from one base color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyMode {
    /// Neighbouring hues within ±30°
    #[default]
    Analogous,
    /// Base hue and its opposite
    Complementary,
    /// Three hues 120° apart plus two accents
    Triadic,
    /// Base hue plus the two hues beside its complement
    SplitComplementary,
    /// One hue, varying saturation and lightness
    Monochromatic,
}

/// How a mode spreads saturation across the five slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SaturationSpread {
    /// Base saturation plus uniform random jitter in `[-amount, amount]`.
    Jitter(f64),
    /// Base saturation plus a fixed per-slot offset.
    Ladder([f64; PALETTE_SIZE]),
}

/// How a mode spreads lightness across the five slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightnessPlan {
    /// Base lightness plus a fixed per-slot offset.
    Relative([f64; PALETTE_SIZE]),
    /// Absolute lightness values; the base lightness is ignored.
    Fixed([f64; PALETTE_SIZE]),
}

impl HarmonyMode {
    /// All modes in display order.
    pub const ALL: [Self; 5] = [
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
        Self::SplitComplementary,
        Self::Monochromatic,
    ];

    /// Tag used in storage and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::SplitComplementary => "split-complementary",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Analogous => "Analogous",
            Self::Complementary => "Complementary",
            Self::Triadic => "Triadic",
            Self::SplitComplementary => "Split Complementary",
            Self::Monochromatic => "Monochromatic",
        }
    }

    /// Per-slot hue offsets in degrees, added to the base hue.
    #[must_use]
    pub const fn hue_offsets(&self) -> [f64; PALETTE_SIZE] {
        match self {
            Self::Analogous => [-30.0, -15.0, 0.0, 15.0, 30.0],
            Self::Complementary => [0.0, 15.0, 180.0, 165.0, 195.0],
            Self::Triadic => [0.0, 120.0, 240.0, 30.0, 150.0],
            Self::SplitComplementary => [0.0, 150.0, 210.0, 165.0, 195.0],
            Self::Monochromatic => [0.0; PALETTE_SIZE],
        }
    }

    /// Saturation rule for this mode.
    #[must_use]
    pub const fn saturation_spread(&self) -> SaturationSpread {
        match self {
            Self::Analogous | Self::Triadic => SaturationSpread::Jitter(10.0),
            Self::Complementary | Self::SplitComplementary => SaturationSpread::Jitter(7.0),
            Self::Monochromatic => SaturationSpread::Ladder([-20.0, -10.0, 0.0, 5.0, 10.0]),
        }
    }

    /// Lightness rule for this mode.
    #[must_use]
    pub const fn lightness_plan(&self) -> LightnessPlan {
        match self {
            Self::Analogous => LightnessPlan::Relative([-15.0, -5.0, 0.0, 10.0, 20.0]),
            Self::Complementary => LightnessPlan::Relative([0.0, 15.0, -10.0, 5.0, 20.0]),
            Self::Triadic => LightnessPlan::Relative([0.0, 10.0, -10.0, 20.0, 5.0]),
            Self::SplitComplementary => LightnessPlan::Relative([0.0, 15.0, -10.0, 25.0, 5.0]),
            Self::Monochromatic => LightnessPlan::Fixed([25.0, 40.0, 50.0, 65.0, 80.0]),
        }
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown harmony mode '{s}'. Expected one of: {}",
                    Self::ALL.map(|m| m.as_str()).join(", ")
                )
            })
    }
}
