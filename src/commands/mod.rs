pub mod consolidate;
mod context;
pub mod propagate;

pub use context::RunContext;

use crate::cli::ExitStatus;

/// Outcome counts for one batch run over the target locale files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn exit_status(&self) -> ExitStatus {
        if self.skipped > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
