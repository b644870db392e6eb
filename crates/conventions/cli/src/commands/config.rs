//! Show the effective configuration

use crate::error::CliResult;
use crate::output::{print_structured, OutputFormat};
use colored::Colorize;
use conventions_verifier::VerifierConfig;

/// Execute config command
pub fn execute(mut config: VerifierConfig, format: OutputFormat) -> CliResult<()> {
    // Print the skip set that will actually apply.
    config.skip = Some(config.skip_set().into_iter().collect());

    if print_structured(format, &config)? {
        return Ok(());
    }

    println!("{} {}", "Configuration for".bold().cyan(), config.root.display());
    println!("{}", "=".repeat(50));
    print!("{}", config.to_toml()?);
    Ok(())
}
