//! JSON document export.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::Color;

/// One entry of the exported JSON array.
#[derive(Debug, Serialize)]
struct ExportedColor<'a> {
    name: String,
    hex: &'a str,
    rgb: String,
    hsl: String,
}

/// Renders colors as a pretty-printed JSON array.
///
/// Entries carry a display name (`Color 1`, `Color 2`, ...), the hex value
/// and CSS `rgb()` / `hsl()` strings. HSL components are rounded for display
/// only.
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
///
/// ```
/// use lazypalette::export::export_as_json;
/// use lazypalette::models::Color;
///
/// let red = Color::from_hex("#FF0000", "red").unwrap();
/// let json = export_as_json(&[red]).unwrap();
/// assert!(json.contains("\"rgb\": \"rgb(255, 0, 0)\""));
/// ```
pub fn export_as_json(colors: &[Color]) -> Result<String> {
    let entries: Vec<ExportedColor<'_>> = colors
        .iter()
        .enumerate()
        .map(|(index, color)| ExportedColor {
            name: format!("Color {}", index + 1),
            hex: color.hex(),
            rgb: color.rgb().to_css(),
            hsl: color.hsl().to_string(),
        })
        .collect();

    serde_json::to_string_pretty(&entries).context("Failed to serialize palette as JSON")
}
