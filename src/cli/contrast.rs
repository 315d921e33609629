//! Contrast command: reports luminance and the readable text color for a hex.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::contrast::{contrast_color, luminance, ContrastColor};
use crate::models::RgbColor;
use clap::Args;
use serde::Serialize;

/// Show the readable text color for a background color
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Background color as #RRGGBB
    #[arg(value_name = "HEX", allow_hyphen_values = true)]
    pub hex: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ContrastResponse {
    hex: String,
    luminance: f64,
    text: ContrastColor,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self) -> CliResult<()> {
        let invalid = |e: anyhow::Error| CliError::validation(format!("Invalid color: {e:#}"));
        let text = contrast_color(&self.hex).map_err(invalid)?;
        let rgb = RgbColor::from_hex(&self.hex).map_err(invalid)?;

        let response = ContrastResponse {
            hex: rgb.to_hex(),
            luminance: luminance(rgb.r, rgb.g, rgb.b),
            text,
        };

        if self.json {
            return print_json(&response);
        }

        println!(
            "{}  luminance {:.4}  text: {}",
            response.hex, response.luminance, response.text
        );
        Ok(())
    }
}
