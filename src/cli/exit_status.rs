use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): Report printed, whether or not keys are missing
/// - `Error` (2): Run aborted (locale file missing or invalid, unreadable source file, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Report printed.
    Success,
    /// Run aborted before a report could be produced.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
