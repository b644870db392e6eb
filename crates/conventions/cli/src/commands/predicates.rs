//! List the active layout's predicates

use crate::error::CliResult;
use crate::output::{print_structured, OutputFormat};
use colored::Colorize;
use conventions_verifier::VerifierConfig;

/// Execute predicates command
pub fn execute(config: VerifierConfig, format: OutputFormat) -> CliResult<()> {
    let active = config.active_predicates()?;
    let rows: Vec<_> = config
        .layout
        .predicates()
        .iter()
        .map(|p| {
            serde_json::json!({
                "id": p.as_str(),
                "description": p.description(),
                "active": active.contains(p),
            })
        })
        .collect();

    if print_structured(format, &rows)? {
        return Ok(());
    }

    println!(
        "{} ({} layout)",
        "Convention Predicates".bold().cyan(),
        config.layout
    );
    println!("{}", "=".repeat(70));
    for p in config.layout.predicates() {
        let id = format!("{:<26}", p.as_str());
        if active.contains(p) {
            println!("  {} {}", id.bold(), p.description());
        } else {
            println!("  {} {}", id.dimmed(), p.description().dimmed());
        }
    }
    Ok(())
}
