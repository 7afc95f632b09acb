use std::process::ExitCode;

use crate::core::SyncReport;

/// Exit status for the CLI.
///
/// - `Success` (0): nothing to do, or every change was applied
/// - `Failure` (1): changes were found but not applied, or the reference
///   file could not be loaded
/// - `Error` (1): the run aborted (unreadable source file, bad config, write
///   failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_report(report: &SyncReport) -> Self {
        if report.is_resolved() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure | ExitStatus::Error => ExitCode::from(1),
        }
    }
}
