//! Export functionality for color sets.
//!
//! Two presentation formats are supported: a CSS custom-property block and a
//! JSON document. Both only read the colors; there is no importer.

pub mod css;
pub mod json;

pub use css::export_as_css;
pub use json::export_as_json;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Color;

/// Output format of an export.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// `:root { --color-1: ... }` block
    #[default]
    Css,
    /// Array of `{ name, hex, rgb, hsl }` objects
    Json,
}

impl ExportFormat {
    /// File extension without the dot.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
        }
    }

    /// Default file name used when exporting into a directory.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("palette.{}", self.extension())
    }

    /// Renders `colors` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render(&self, colors: &[Color]) -> Result<String> {
        match self {
            Self::Css => Ok(export_as_css(colors)),
            Self::Json => export_as_json(colors),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(ExportFormat::Css.file_name(), "palette.css");
        assert_eq!(ExportFormat::Json.file_name(), "palette.json");
    }

    #[test]
    fn test_render_dispatch() {
        let colors = [Color::from_hex("#336699", "a").unwrap()];
        assert_eq!(
            ExportFormat::Css.render(&colors).unwrap(),
            export_as_css(&colors)
        );
        assert_eq!(
            ExportFormat::Json.render(&colors).unwrap(),
            export_as_json(&colors).unwrap()
        );
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ExportFormat::Json).unwrap(), "\"json\"");
        let format: ExportFormat = serde_json::from_str("\"css\"").unwrap();
        assert_eq!(format, ExportFormat::Css);
    }
}
