//! Run the convention battery

use crate::error::{CliError, CliResult};
use crate::output::{print_structured, OutputFormat};
use clap::Args;
use colored::Colorize;
use conventions_verifier::{PredicateId, UnitName, VerificationReport, Verifier, VerifierConfig};

/// Filters for a check run
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Run only this predicate (repeatable)
    #[arg(short, long)]
    pub predicate: Vec<PredicateId>,

    /// Check only this unit (repeatable)
    #[arg(short, long)]
    pub unit: Vec<String>,

    /// Replace the skip set with these names (repeatable)
    #[arg(long)]
    pub skip: Vec<String>,
}

/// Execute check command
pub fn execute(args: CheckArgs, base: VerifierConfig, format: OutputFormat) -> CliResult<()> {
    let config = apply_filters(args, base);
    let report = Verifier::with_config(config).run_all()?;

    if !print_structured(format, &report)? {
        print_table(&report);
    }

    if report.all_passed() {
        Ok(())
    } else {
        Err(CliError::ChecksFailed(report.summary.failed))
    }
}

fn apply_filters(args: CheckArgs, mut config: VerifierConfig) -> VerifierConfig {
    if !args.predicate.is_empty() {
        config.predicates = args.predicate;
    }
    if !args.unit.is_empty() {
        config.units = args.unit.iter().map(|u| UnitName::new(u)).collect();
    }
    if !args.skip.is_empty() {
        config.skip = Some(args.skip);
    }
    config
}

fn print_table(report: &VerificationReport) {
    println!(
        "{} ({} layout, {} units)",
        "Convention Verification".bold().cyan(),
        report.layout,
        report.summary.units
    );
    println!("{}", "=".repeat(60));

    for p in &report.predicates {
        let counts = format!("{}/{}", p.passed, p.results.len());
        if p.all_passed() {
            println!("  {} {:<28} {}", "✓".green(), p.predicate.to_string(), counts);
        } else {
            println!("  {} {:<28} {}", "✗".red(), p.predicate.to_string(), counts.red());
        }
        for r in p.results.iter().filter(|r| !r.passed) {
            println!(
                "      {} {}",
                r.unit.as_str().yellow(),
                r.details.as_deref().unwrap_or("").dimmed()
            );
        }
    }

    println!("{}", "=".repeat(60));
    if report.all_passed() {
        println!("{} {}", "PASS".green().bold(), report.summary);
    } else {
        println!("{} {}", "FAIL".red().bold(), report.summary);
    }
}
