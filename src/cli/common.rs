//! Shared CLI plumbing: error type, exit codes and small helpers used by
//! every command.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use super::render::{render_strip, RenderOptions};
use crate::config::Config;
use crate::constants::{APP_BINARY_NAME, PALETTE_SIZE};
use crate::models::{Color, HarmonyMode};
use crate::services::{FavoritesService, Session, SessionService};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unknown id, malformed color, invalid option
    ValidationError = 1,
    /// Filesystem, clipboard or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit status.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Error returned by CLI commands, carrying the exit code to use.
#[derive(Debug)]
pub struct CliError {
    /// Exit code for the process
    pub code: ExitCode,
    /// Human readable message, printed after `Error: `
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Filesystem or other environment failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the configuration file, or defaults when it does not exist.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))
}

/// Location of the persisted session.
pub fn session_path() -> CliResult<PathBuf> {
    SessionService::default_path()
        .map_err(|e| CliError::io(format!("Failed to resolve session path: {e:#}")))
}

/// Location of the favorites file.
pub fn favorites_path() -> CliResult<PathBuf> {
    FavoritesService::default_path()
        .map_err(|e| CliError::io(format!("Failed to resolve favorites path: {e:#}")))
}

/// Loads the session if one exists.
pub fn load_session(path: &Path) -> CliResult<Option<Session>> {
    SessionService::load(path).map_err(|e| CliError::io(format!("Failed to load session: {e:#}")))
}

/// Loads the session, failing when nothing has been generated yet.
pub fn require_session(path: &Path) -> CliResult<Session> {
    load_session(path)?.ok_or_else(|| {
        CliError::validation(format!(
            "No palette yet. Run `{APP_BINARY_NAME} generate` first"
        ))
    })
}

/// Writes the session back.
pub fn store_session(session: &Session, path: &Path) -> CliResult<()> {
    SessionService::save(session, path)
        .map_err(|e| CliError::io(format!("Failed to save session: {e:#}")))
}

/// Converts a 1-based slot number from the command line into an index.
pub fn slot_index(slot: usize) -> CliResult<usize> {
    if (1..=PALETTE_SIZE).contains(&slot) {
        Ok(slot - 1)
    } else {
        Err(CliError::validation(format!(
            "Slot must be between 1 and {PALETTE_SIZE}, got {slot}"
        )))
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Prints a color strip using the UI preferences from `config`.
pub fn print_strip(mode: HarmonyMode, colors: &[Color], config: &Config) {
    let options = RenderOptions::for_stdout(config.ui.theme_mode, config.ui.show_contrast);
    println!("{}", render_strip(mode, colors, options));
}

/// Places `text` on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> CliResult<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_owned()))
        .map_err(|e| CliError::io(format!("Failed to copy to clipboard: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_index() {
        assert_eq!(slot_index(1).unwrap(), 0);
        assert_eq!(slot_index(5).unwrap(), 4);

        let err = slot_index(0).unwrap_err();
        assert_eq!(err.code, ExitCode::ValidationError);
        assert!(err.message.contains("between 1 and 5"));
        assert!(slot_index(6).is_err());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CliError::validation("bad").code.code(), 1);
        assert_eq!(CliError::io("disk").code.code(), 2);
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::io("disk").to_string(), "disk");
    }
}
