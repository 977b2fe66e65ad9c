use std::convert::Infallible;

use crate::{
    location::Location,
    reporter::{FmtCheck, TestReporter},
    state::TestCounter,
};

/// A reporter that produces no output.
///
/// `NoReporter` still answers [`TestReporter::fmt_check`] truthfully (failures
/// count as reported), so merged runs are accounted exactly like with a real
/// reporter. Useful when a driver only cares about
/// [`TestHarness::failed`](crate::TestHarness::failed) or the exit status.
#[derive(Debug, Default, Clone)]
pub struct NoReporter;

impl TestReporter for NoReporter {
    type Error = Infallible;

    fn fmt_banner(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fmt_group(&mut self, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fmt_section(&mut self, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fmt_check(&mut self, data: FmtCheck<'_>) -> Result<bool, Self::Error> {
        Ok(!data.assertion.passed)
    }

    fn fmt_group_status(&mut self, _: &TestCounter) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fmt_summary(&mut self, _: &TestCounter) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fmt_exception(&mut self, _: Option<&Location>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fmt_print(&mut self, _: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}
