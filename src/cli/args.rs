//! CLI argument definitions using clap.
//!
//! The tool takes no positional arguments: every path comes from the
//! project layout anchored at the working directory.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Print configuration, skipped paths and a summary to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
