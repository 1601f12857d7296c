//! Command-line layer: argument parsing, output, exit status.

pub mod args;
pub mod exit_status;
pub mod report;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use anyhow::Result;

use crate::config::Config;
use crate::core::analyze;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let config = Config::from_current_dir()?;
    if args.verbose {
        report::print_config(&config)?;
    }

    let analysis = analyze(&config)?;
    report::print_report(&analysis.report)?;

    if args.verbose {
        report::print_warnings(&analysis.warnings);
        report::print_summary(&analysis);
    }

    Ok(ExitStatus::Success)
}
