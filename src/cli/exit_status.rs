use std::process::ExitCode;

/// Exit status of the extractor.
///
/// - `Success` (0): Every file was processed; the catalog was written or there was nothing to write
/// - `Error` (2): The run aborted on an I/O, configuration or literal decoding error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed.
    Success,
    /// Run aborted; the output file was not modified.
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
