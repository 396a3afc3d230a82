use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): Scan completed (missing translations alone do not fail a run)
/// - `Failure` (1): `--strict` was given and missing translations were found
/// - `Error` (2): The tool failed before scanning (config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed.
    Success,
    /// Missing translations found in strict mode.
    Failure,
    /// Tool failed due to internal error (config error, invalid pattern, etc.).
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
