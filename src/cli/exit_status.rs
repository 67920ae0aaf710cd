use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): the untranslated catalog was written
/// - `Failure` (1): untranslated strings found and `--fail-on-untranslated` set
/// - `Error` (2): fatal error (unreadable input, syntax error, malformed catalog)
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
