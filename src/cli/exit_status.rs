use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Run completed, every file handled
/// - `Failure` (1): Run completed but some target files were skipped
/// - `Error` (2): Run aborted (missing reference data, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed, every file handled.
    Success,
    /// Run completed but some target files were skipped.
    Failure,
    /// Run aborted before touching any file.
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
