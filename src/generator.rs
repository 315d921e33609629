//! Harmony generator.
//!
//! Every generation cycle draws a single random base color and derives all five
//! slots from it using the fixed offset tables of the selected
//! [`HarmonyMode`]. Saturation jitter is the only other random input, so with a
//! seeded generator the output is fully reproducible.
//!
//! Locked slots of the previous set are carried over untouched; unlocked slots
//! are recomputed but keep their previous id so callers can follow a slot
//! across regenerations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::constants::PALETTE_SIZE;
use crate::models::{
    generate_id, Color, ColorSet, HarmonyMode, HslColor, LightnessPlan, SaturationSpread,
};

/// Randomly drawn color that seeds a whole generation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseColor {
    /// Hue in degrees, 0-359
    pub hue: u16,
    /// Saturation percentage, 55-85
    pub saturation: u8,
    /// Lightness percentage, 35-70
    pub lightness: u8,
}

impl BaseColor {
    /// Draws a base color: any hue, vivid saturation, mid lightness.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            hue: rng.random_range(0..360),
            saturation: rng.random_range(55..=85),
            lightness: rng.random_range(35..=70),
        }
    }
}

/// Computes the five clamped HSL triples for a mode and base color.
///
/// Hues are normalized into [0, 360), saturation is clamped to [30, 100] and
/// lightness to [15, 85]. `rng` is only consulted by modes with saturation
/// jitter.
pub fn harmony_slots<R: Rng + ?Sized>(
    mode: HarmonyMode,
    base: BaseColor,
    rng: &mut R,
) -> [HslColor; PALETTE_SIZE] {
    let base_hue = f64::from(base.hue);
    let base_saturation = f64::from(base.saturation);
    let base_lightness = f64::from(base.lightness);

    let hues = mode.hue_offsets().map(|offset| base_hue + offset);

    let saturations: [f64; PALETTE_SIZE] = match mode.saturation_spread() {
        SaturationSpread::Jitter(amount) => {
            std::array::from_fn(|_| base_saturation + rng.random_range(-amount..=amount))
        }
        SaturationSpread::Ladder(offsets) => offsets.map(|offset| base_saturation + offset),
    };

    let lightnesses = match mode.lightness_plan() {
        LightnessPlan::Relative(offsets) => offsets.map(|offset| base_lightness + offset),
        LightnessPlan::Fixed(values) => values,
    };

    std::array::from_fn(|i| HslColor::new(hues[i], saturations[i], lightnesses[i]).clamped())
}

/// Decides what ends up in one slot.
///
/// A locked previous color wins unchanged. Otherwise the computed color is
/// used, inheriting the previous slot id when there is one.
pub fn merge_slot<R: Rng + ?Sized>(
    computed: HslColor,
    previous: Option<&Color>,
    rng: &mut R,
) -> Color {
    match previous {
        Some(prev) if prev.is_locked() => prev.clone(),
        Some(prev) => Color::from_hsl(computed, prev.id()),
        None => Color::from_hsl(computed, generate_id(rng)),
    }
}

/// Generates a new color set for `mode`, honouring locks in `previous`.
///
/// # Examples
///
/// ```
/// use lazypalette::generator::generate_palette;
/// use lazypalette::models::HarmonyMode;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let first = generate_palette(HarmonyMode::Triadic, None, &mut rng);
///
/// let mut edited = first.clone();
/// edited[2].set_locked(true);
/// let second = generate_palette(HarmonyMode::Triadic, Some(&edited), &mut rng);
///
/// assert_eq!(second[2], edited[2]);
/// assert_eq!(second[0].id(), first[0].id());
/// ```
pub fn generate_palette<R: Rng + ?Sized>(
    mode: HarmonyMode,
    previous: Option<&ColorSet>,
    rng: &mut R,
) -> ColorSet {
    let base = BaseColor::random(rng);
    let slots = harmony_slots(mode, base, rng);

    debug!(
        %mode,
        base_hue = base.hue,
        base_saturation = base.saturation,
        base_lightness = base.lightness,
        locked = previous.map_or(0, |p| p.iter().filter(|c| c.is_locked()).count()),
        "Generating palette"
    );

    std::array::from_fn(|i| merge_slot(slots[i], previous.map(|p| &p[i]), rng))
}

/// Random source for one command: seeded when `seed` is given so runs can be
/// reproduced, otherwise seeded from the operating system.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
