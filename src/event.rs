//! The events a driver sends to the harness.
//!
//! Every operation on a [`TestHarness`](crate::TestHarness) is one of these
//! events, and all of them go through [`TestHarness::log`](crate::TestHarness::log).

use crate::location::Location;

/// A single checked assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion<'a> {
    /// The textual form of the checked expression.
    pub expr: &'a str,
    pub location: Location,
    pub passed: bool,
}

impl<'a> Assertion<'a> {
    pub fn new(expr: &'a str, location: Location, passed: bool) -> Self {
        Self {
            expr,
            location,
            passed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event<'a> {
    /// An assertion was checked.
    Check(Assertion<'a>),

    /// An assertion was checked and the caller will skip dependent tests if it
    /// failed.
    CheckSkip(Assertion<'a>),

    /// Start a new group. `None` is ignored.
    BeginGroup(Option<&'a str>),

    /// Start a new section. `None` is ignored.
    BeginSection(Option<&'a str>),

    /// Turn merge mode on or off.
    Merge(bool),

    /// Print a line of custom text. `None` is ignored.
    Print(Option<&'a str>),

    /// Print the summary and finish the run.
    Summary,

    /// Report an exception after the last checked assertion and finish the run.
    Exception,

    /// Ask whether any assertion has failed so far.
    Failed,

    /// Set whether summary and exception terminate the process.
    SetExit(bool),

    /// Set whether the harness waits for a line of input before terminating.
    SetWait(bool),
}
