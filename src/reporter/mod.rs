//! Reporting for stest.
//!
//! A reporter is the presentation side of the harness. The harness decides
//! *what* happened (counts, merges, skips) and calls into the reporter with
//! already computed values, the reporter decides how that looks.
//!
//! The built in [`PrettyReporter`] produces the classic sTest console output.
//! [`NoReporter`] produces nothing, which is handy when only the counts matter.
//!
//! Reporter errors never abort a run. The harness collects them as
//! [`ReportError`] values, see [`TestHarness::fmt_errors`](crate::TestHarness::fmt_errors).

use std::fmt::Debug;

use tracing::warn;

use crate::{event::Assertion, location::Location, state::TestCounter};

pub mod common;

mod no;
pub use no::*;

mod pretty;
pub use pretty::*;

/// Data for [`TestReporter::fmt_check`].
#[derive(Debug, Clone, Copy)]
pub struct FmtCheck<'a> {
    pub assertion: &'a Assertion<'a>,

    /// The assertion was checked with skip semantics.
    pub skip: bool,

    /// A failure of the same merged run was already printed.
    pub continuation: bool,
}

/// The presentation sink of the harness.
///
/// Every method corresponds to one piece of console output. Implementations
/// own no harness state, they only render what they are given.
pub trait TestReporter {
    type Error;

    /// Called once, before the very first event is handled.
    fn fmt_banner(&mut self) -> Result<(), Self::Error>;

    fn fmt_group(&mut self, name: &str) -> Result<(), Self::Error>;

    fn fmt_section(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Report a checked assertion.
    ///
    /// Returns whether anything was emitted. Reporters must return `true` for
    /// failed assertions and `false` for passed ones, the harness relies on it
    /// for merge bookkeeping.
    fn fmt_check(&mut self, data: FmtCheck<'_>) -> Result<bool, Self::Error>;

    /// Report the counters of a group that just ended.
    fn fmt_group_status(&mut self, group: &TestCounter) -> Result<(), Self::Error>;

    fn fmt_summary(&mut self, total: &TestCounter) -> Result<(), Self::Error>;

    /// Report an exception. `last` is the location of the most recent assertion.
    fn fmt_exception(&mut self, last: Option<&Location>) -> Result<(), Self::Error>;

    fn fmt_print(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Block until the user confirms the end of the run.
    fn wait(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// The reporter operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FormatError {
    #[error("could not report banner")]
    Banner,
    #[error("could not report group header")]
    Group,
    #[error("could not report section header")]
    Section,
    #[error("could not report assertion")]
    Check,
    #[error("could not report group status")]
    GroupStatus,
    #[error("could not report summary")]
    Summary,
    #[error("could not report exception")]
    Exception,
    #[error("could not print line")]
    Print,
    #[error("could not wait for input")]
    Wait,
}

/// A reporter error together with the operation that produced it.
#[derive(Debug, thiserror::Error)]
#[error("{step}")]
pub struct ReportError<E> {
    pub step: FormatError,
    #[source]
    pub source: E,
}

pub(crate) trait FmtErrors<E> {
    /// Keep the error of a failed reporter call, pass the value of a successful one.
    fn push_on_error<T>(&mut self, step: FormatError, result: Result<T, E>) -> Option<T>;
}

impl<E: Debug> FmtErrors<E> for Vec<ReportError<E>> {
    fn push_on_error<T>(&mut self, step: FormatError, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(source) => {
                warn!(%step, error = ?source, "reporter failed");
                self.push(ReportError { step, source });
                None
            }
        }
    }
}
