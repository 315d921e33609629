//! CLI command handlers for LazyPalette.
//!
//! Every command reads and writes the session and favorites files under the
//! config directory, so consecutive invocations behave like one editing
//! session.

pub mod common;
pub mod config;
pub mod contrast;
pub mod copy;
pub mod export;
pub mod favorites;
pub mod generate;
pub mod lock;
pub mod render;
pub mod save;
pub mod show;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contrast::ContrastArgs;
pub use copy::CopyArgs;
pub use export::ExportArgs;
pub use favorites::FavoritesArgs;
pub use generate::GenerateArgs;
pub use lock::LockArgs;
pub use save::SaveArgs;
pub use show::ShowArgs;
