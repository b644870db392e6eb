//! Conventions CLI - operator interface for the convention verifier
//!
//! This CLI lets maintainers of a text-distance library:
//! - Run the convention battery and read the report
//! - List the units discovered in the source tree
//! - Inspect the active layout's predicates and the effective configuration

use clap::{Parser, Subcommand};
use conventions_verifier::{Layout, VerifierConfig};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::{check, config, predicates, units};
pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// Conventions CLI application
#[derive(Parser, Debug)]
#[command(name = "conventions")]
#[command(about = "Verify that every algorithm unit is wired through the library", long_about = None)]
#[command(version)]
struct Cli {
    /// Repository root to inspect
    #[arg(long, global = true, env = "CONVENTIONS_ROOT", default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to conventions.toml in the root)
    #[arg(long, global = true, env = "CONVENTIONS_CONFIG")]
    config: Option<PathBuf>,

    /// Repository layout (flat, namespaced)
    #[arg(long, global = true, env = "CONVENTIONS_LAYOUT")]
    layout: Option<Layout>,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the convention battery
    Check(check::CheckArgs),

    /// List discovered units
    Units,

    /// List the predicates of the active layout
    Predicates,

    /// Show the effective configuration
    Config,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Logs go to stderr so json/yaml output stays parseable.
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    let base = load_config(&cli)?;
    match cli.command {
        Commands::Check(args) => check::execute(args, base, cli.output),
        Commands::Units => units::execute(base, cli.output),
        Commands::Predicates => predicates::execute(base, cli.output),
        Commands::Config => config::execute(base, cli.output),
    }
}

/// Configuration file values with the global flags applied on top.
fn load_config(cli: &Cli) -> CliResult<VerifierConfig> {
    let mut config = VerifierConfig::load(cli.config.as_deref(), &cli.root)?;
    if let Some(layout) = cli.layout {
        config.layout = layout;
    }
    tracing::debug!(root = %config.root.display(), layout = %config.layout, "effective configuration");
    Ok(config)
}
