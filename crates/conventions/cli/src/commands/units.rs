//! List discovered units

use crate::error::CliResult;
use crate::output::{print_structured, OutputFormat};
use colored::Colorize;
use conventions_verifier::{UnitName, Verifier, VerifierConfig};
use serde::Serialize;

#[derive(Serialize)]
struct UnitListing<'a> {
    dir: String,
    units: Vec<&'a UnitName>,
    skipped: Vec<&'a UnitName>,
}

/// Execute units command
pub fn execute(config: VerifierConfig, format: OutputFormat) -> CliResult<()> {
    let discovery = Verifier::with_config(config).discover()?;
    let listing = UnitListing {
        dir: discovery.dir.display().to_string(),
        units: discovery.iter().collect(),
        skipped: discovery.skipped.iter().collect(),
    };

    if print_structured(format, &listing)? {
        return Ok(());
    }

    println!("{} {}", "Units in".bold().cyan(), listing.dir.bold());
    println!("{}", "=".repeat(50));
    for unit in &listing.units {
        println!("  {}", unit);
    }
    if !listing.skipped.is_empty() {
        let skipped: Vec<&str> = listing.skipped.iter().map(|u| u.as_str()).collect();
        println!();
        println!("  {} {}", "skipped:".dimmed(), skipped.join(", ").dimmed());
    }
    println!();
    println!("{} unit(s)", listing.units.len());
    Ok(())
}
