use std::process::ExitCode;

use clap::Parser;
use keygap::cli::{Arguments, ExitStatus, report::print_error};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match keygap::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            print_error(&err);
            ExitStatus::Error.into()
        }
    }
}
