//! Report output and stderr diagnostics.
//!
//! The JSON report is the only thing written to stdout. Everything else
//! goes to stderr so the output can be piped straight into other tools.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::core::{Analysis, Report, ScanWarning};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the report as pretty JSON to stdout.
pub fn print_report(report: &Report) -> Result<()> {
    print_report_to(report, &mut io::stdout().lock())
}

/// Print the report to a custom writer.
///
/// Two-space indentation, non-ASCII kept as-is, trailing newline.
pub fn print_report_to<W: Write>(report: &Report, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report.")?;
    writeln!(writer, "{}", json).context("Failed to write report.")?;
    Ok(())
}

pub fn print_config(config: &Config) -> Result<()> {
    let json = config.to_json()?;
    eprintln!("{} {}", "config:".bold().cyan(), json);
    Ok(())
}

pub fn print_warnings(warnings: &[ScanWarning]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

pub fn print_warnings_to<W: Write>(warnings: &[ScanWarning], writer: &mut W) {
    for warning in warnings {
        let _ = match &warning.path {
            Some(path) => writeln!(
                writer,
                "{} Skipped {}: {}",
                "warning:".bold().yellow(),
                path,
                warning.error
            ),
            None => writeln!(
                writer,
                "{} Skipped entry: {}",
                "warning:".bold().yellow(),
                warning.error
            ),
        };
    }
}

pub fn print_summary(analysis: &Analysis) {
    print_summary_to(analysis, &mut io::stderr().lock());
}

pub fn print_summary_to<W: Write>(analysis: &Analysis, writer: &mut W) {
    let files = analysis.source_files_checked;
    let report = &analysis.report;
    let msg = format!(
        "Scanned {} source {}, {} translation {}, {} missing",
        files,
        if files == 1 { "file" } else { "files" },
        report.translation_key_count,
        if report.translation_key_count == 1 { "key" } else { "keys" },
        report.missing_keys.len()
    );

    let _ = if report.missing_keys.is_empty() {
        writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green())
    } else {
        writeln!(writer, "{} {}", FAILURE_MARK.red(), msg.red())
    };
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".bold().red(), err);
}
