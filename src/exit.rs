//! Ending a test run.
//!
//! When [`HarnessOptions::exit_at_end`](crate::HarnessOptions::exit_at_end) is
//! set, summary and exception hand the final [`RunStatus`] to a [`TestExit`]
//! strategy. The default strategy, [`ProcessExit`], terminates the process like
//! `exit(EXIT_SUCCESS)` / `exit(EXIT_FAILURE)` would.

use std::process::{self, ExitCode};

use tracing::debug;

/// The overall result of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStatus {
    Success,
    Failure,
}

impl RunStatus {
    pub fn from_failed(failed: bool) -> Self {
        match failed {
            true => Self::Failure,
            false => Self::Success,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// The process exit code for this status.
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(value: RunStatus) -> Self {
        match value {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// A strategy for ending the run once summary or exception decided the status.
pub trait TestExit {
    fn exit(&self, status: RunStatus);
}

/// Terminate the process with the run's exit code.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl TestExit for ProcessExit {
    fn exit(&self, status: RunStatus) {
        debug!(?status, code = status.code(), "terminating test process");
        process::exit(status.code())
    }
}

impl<F> TestExit for F
where
    F: Fn(RunStatus),
{
    fn exit(&self, status: RunStatus) {
        self(status)
    }
}
