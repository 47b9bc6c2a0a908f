use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed (a key file was written, nothing was
///   found, or the user declined to overwrite)
/// - `Failure` (1): Command could not do its job (e.g. config file already exists)
/// - `Error` (2): Command failed due to an error (unreadable jar, unwritable output, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
