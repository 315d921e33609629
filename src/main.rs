//! LazyPalette - five-color harmony palettes in the terminal.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lazypalette::cli::{
    CliResult, ConfigArgs, ContrastArgs, CopyArgs, ExitCode, ExportArgs, FavoritesArgs,
    GenerateArgs, LockArgs, SaveArgs, ShowArgs,
};

/// LazyPalette - five-color harmony palettes in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a new palette, keeping locked colors
    Generate(GenerateArgs),
    /// Show the current palette
    Show(ShowArgs),
    /// Toggle the lock on a slot
    Lock(LockArgs),
    /// Copy a slot's hex code to the clipboard
    Copy(CopyArgs),
    /// Save the current palette to favorites
    Save(SaveArgs),
    /// Manage saved palettes
    Favorites(FavoritesArgs),
    /// Export a palette as CSS or JSON
    Export(ExportArgs),
    /// Show the readable text color for a background
    Contrast(ContrastArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Show(args) => args.execute(),
            Self::Lock(args) => args.execute(),
            Self::Copy(args) => args.execute(),
            Self::Save(args) => args.execute(),
            Self::Favorites(args) => args.execute(),
            Self::Export(args) => args.execute(),
            Self::Contrast(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays pipeable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = cli
        .command
        .unwrap_or(Command::Show(ShowArgs { json: false }));

    match command.execute() {
        Ok(()) => std::process::ExitCode::from(ExitCode::Success.code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::ExitCode::from(e.code.code())
        }
    }
}
