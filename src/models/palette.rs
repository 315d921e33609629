//! Saved palettes: a snapshot of five colors plus how they were generated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::color::{generate_id, ColorSet};
use super::HarmonyMode;

/// A named, timestamped snapshot of a color set.
///
/// Palettes are immutable once created. Editing the colors happens on the
/// live session and a new palette is assembled when the user saves again.
///
/// # Storage format
///
/// Serialized with the field names `id`, `colors`, `mode`, `createdAt`
/// (epoch milliseconds) and `name` (omitted when absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    id: String,
    colors: ColorSet,
    mode: HarmonyMode,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Palette {
    /// Assembles a palette from the displayed colors with a fresh id and the
    /// current time. The colors are stored exactly as given.
    #[must_use]
    pub fn create(colors: ColorSet, mode: HarmonyMode) -> Self {
        Self::new(generate_id(&mut rand::rng()), colors, mode, Utc::now())
    }

    /// Builds a palette with an explicit id and timestamp.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        colors: ColorSet,
        mode: HarmonyMode,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            colors,
            mode,
            created_at,
            name: None,
        }
    }

    /// Attaches a user label. Blank labels are dropped.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        let name = name.trim();
        self.name = (!name.is_empty()).then(|| name.to_string());
        self
    }

    /// Unique palette id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The five colors in strip order.
    #[must_use]
    pub const fn colors(&self) -> &ColorSet {
        &self.colors
    }

    /// Harmony mode the colors were generated with.
    #[must_use]
    pub const fn mode(&self) -> HarmonyMode {
        self.mode
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Optional user label.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Label to show in listings: the name, or the creation date.
    #[must_use]
    pub fn title(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            format!("Untitled ({})", self.created_at.format("%Y-%m-%d %H:%M"))
        })
    }
}
