//! Configuration management CLI commands.

use crate::cli::common::{load_config, print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::export::ExportFormat;
use crate::models::HarmonyMode;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Harmony mode used when there is no palette yet
    #[arg(long, value_enum, value_name = "MODE")]
    default_mode: Option<HarmonyMode>,

    /// Export format used when --format is omitted
    #[arg(long, value_enum, value_name = "FORMAT")]
    default_format: Option<ExportFormat>,

    /// Theme mode
    #[arg(long, value_enum, ignore_case = true, value_name = "MODE")]
    theme: Option<ThemeMode>,

    /// Print the readable text color next to each swatch
    #[arg(long, value_name = "BOOL")]
    show_contrast: Option<bool>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    generation: GenerationOutput,
    export: ExportOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct GenerationOutput {
    default_mode: HarmonyMode,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    default_format: ExportFormat,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_contrast: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            output_json(&config)
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.default_mode.is_none()
            && self.default_format.is_none()
            && self.theme.is_none()
            && self.show_contrast.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-mode, --default-format, --theme, or --show-contrast",
            ));
        }

        let mut config = load_config()?;

        if let Some(mode) = self.default_mode {
            config.generation.default_mode = mode;
        }

        if let Some(format) = self.default_format {
            config.export.default_format = format;
        }

        if let Some(theme) = self.theme {
            config.ui.theme_mode = theme;
        }

        if let Some(show_contrast) = self.show_contrast {
            config.ui.show_contrast = show_contrast;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        generation: GenerationOutput {
            default_mode: config.generation.default_mode,
        },
        export: ExportOutput {
            default_format: config.export.default_format,
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.to_string(),
            show_contrast: config.ui.show_contrast,
        },
    };

    print_json(&output)
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("LazyPalette Configuration");
    println!("=========================");
    println!();

    println!("Generation:");
    println!("  Default Mode: {}", config.generation.default_mode);
    println!();

    println!("Export:");
    println!("  Default Format: {}", config.export.default_format);
    println!();

    println!("UI:");
    println!("  Theme: {}", config.ui.theme_mode);
    println!("  Show Contrast: {}", config.ui.show_contrast);

    if let Ok(path) = Config::config_file_path() {
        println!();
        println!("Config file: {}", path.display());
    }
}
