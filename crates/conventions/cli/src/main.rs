use colored::Colorize;
use conventions_cli::CliError;
use std::process::ExitCode;

fn main() -> ExitCode {
    match conventions_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !matches!(err, CliError::ChecksFailed(_)) {
                eprintln!("{} {}", "error:".red().bold(), err);
            }
            ExitCode::from(err.exit_code())
        }
    }
}
