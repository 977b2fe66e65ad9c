use std::{
    any::Any,
    fmt::Debug,
    io,
    panic::{AssertUnwindSafe, catch_unwind},
};

use tracing::{debug, error, info, trace};

use crate::{
    event::{Assertion, Event},
    exit::{ProcessExit, RunStatus, TestExit},
    options::{HarnessOptions, MergeOutput},
    reporter::{FmtCheck, FmtErrors, FormatError, PrettyReporter, ReportError, TestReporter},
    state::HarnessState,
};

/// The console harness used by the global facade.
pub type DefaultHarness = TestHarness<PrettyReporter<io::Stdout, io::Stdin>, ProcessExit>;

/// Create a harness printing to stdout and terminating the process at the end
/// of the run.
pub fn harness() -> DefaultHarness {
    TestHarness::default()
}

/// The assertion bookkeeping state machine.
///
/// A driver sends [`Event`]s, either through [`TestHarness::log`] or through
/// the convenience methods which all funnel into it. The harness keeps total
/// and per group counters, reports through its [`TestReporter`] and ends the
/// run through its [`TestExit`] strategy.
pub struct TestHarness<Reporter: TestReporter, Exit> {
    pub(crate) state: HarnessState,
    pub(crate) options: HarnessOptions,
    pub(crate) reporter: Reporter,
    pub(crate) exit: Exit,
    pub(crate) fmt_errors: Vec<ReportError<Reporter::Error>>,
}

impl Default for DefaultHarness {
    fn default() -> Self {
        TestHarness {
            state: HarnessState::default(),
            options: HarnessOptions::default(),
            reporter: PrettyReporter::default(),
            exit: ProcessExit,
            fmt_errors: Vec::new(),
        }
    }
}

impl<Reporter: TestReporter, Exit> Debug for TestHarness<Reporter, Exit> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestHarness")
            .field("state", &self.state)
            .field("options", &self.options)
            .field("fmt_errors", &self.fmt_errors.len())
            .finish_non_exhaustive()
    }
}

impl<Reporter, Exit> TestHarness<Reporter, Exit>
where
    Reporter: TestReporter,
    Reporter::Error: Debug,
    Exit: TestExit,
{
    /// Handle a single event.
    ///
    /// The returned flag depends on the event:
    /// - checks echo the assertion's `passed` flag
    /// - [`Event::Summary`] returns whether the finished run passed
    /// - [`Event::Failed`] returns whether any assertion failed so far
    /// - [`Event::Merge`], [`Event::SetExit`] and [`Event::SetWait`] echo their payload
    /// - everything else returns `false`
    pub fn log(&mut self, event: Event<'_>) -> bool {
        trace!(?event, "handling test event");

        if !self.state.banner_printed {
            self.fmt_errors
                .push_on_error(FormatError::Banner, self.reporter.fmt_banner());
            self.state.banner_printed = true;
        }

        match event {
            Event::Check(assertion) => self.handle_check(&assertion, false),
            Event::CheckSkip(assertion) => self.handle_check(&assertion, true),
            Event::BeginGroup(Some(name)) => {
                self.handle_group(name);
                false
            }
            Event::BeginSection(Some(name)) => {
                self.handle_section(name);
                false
            }
            Event::BeginGroup(None) | Event::BeginSection(None) | Event::Print(None) => false,
            Event::Merge(merging) => {
                debug!(merging, "merge mode toggled");
                self.state.merging = merging;
                self.state.merge_run.clear();
                merging
            }
            Event::Print(Some(text)) => {
                self.fmt_errors
                    .push_on_error(FormatError::Print, self.reporter.fmt_print(text));
                false
            }
            Event::Summary => self.handle_summary(),
            Event::Exception => {
                self.handle_exception();
                false
            }
            Event::Failed => self.state.total.failed(),
            Event::SetExit(exit_at_end) => {
                self.options.exit_at_end = exit_at_end;
                exit_at_end
            }
            Event::SetWait(wait_at_exit) => {
                self.options.wait_at_exit = wait_at_exit;
                wait_at_exit
            }
        }
    }

    fn handle_check(&mut self, assertion: &Assertion<'_>, skip: bool) -> bool {
        let state = &mut self.state;
        state.has_tests_or_group = true;

        if !state.merging || !state.merge_run.counted {
            state.total.count_test();
            state.group.count_test();
            state.merge_run.counted = state.merging;
        }

        state.last_location = Some(assertion.location.clone());

        if !assertion.passed {
            if !state.merging || !state.merge_run.failed {
                state.total.count_failure();
                state.group.count_failure();
                state.merge_run.failed = state.merging;
            }
            if skip {
                state.total.skipped = true;
                state.group.skipped = true;
            }
        }

        let silenced = state.merging
            && state.merge_run.printed
            && self.options.merge_output == MergeOutput::FirstFailure;
        if !silenced {
            let data = FmtCheck {
                assertion,
                skip,
                continuation: state.merge_run.printed,
            };
            let printed = self
                .fmt_errors
                .push_on_error(FormatError::Check, self.reporter.fmt_check(data))
                .unwrap_or(false);
            self.state.merge_run.printed = printed && self.state.merging;
        }

        assertion.passed
    }

    fn report_group_status(&mut self) {
        self.fmt_errors.push_on_error(
            FormatError::GroupStatus,
            self.reporter.fmt_group_status(&self.state.group),
        );
    }

    fn handle_group(&mut self, name: &str) {
        debug!(group = name, previous = ?self.state.group, "beginning test group");
        if self.state.has_tests_or_group {
            self.report_group_status();
        }
        self.fmt_errors
            .push_on_error(FormatError::Group, self.reporter.fmt_group(name));

        self.state.reset_group();
        self.state.has_tests_or_group = true;
    }

    fn handle_section(&mut self, name: &str) {
        debug!(section = name, previous = ?self.state.group, "beginning test section");
        if self.state.has_tests_or_group {
            self.report_group_status();
            self.state.has_tests_or_group = false;
        }
        self.fmt_errors
            .push_on_error(FormatError::Section, self.reporter.fmt_section(name));

        self.state.reset_group();
    }

    fn handle_summary(&mut self) -> bool {
        if self.state.has_tests_or_group {
            self.report_group_status();
        }
        self.fmt_errors.push_on_error(
            FormatError::Summary,
            self.reporter.fmt_summary(&self.state.total),
        );

        let total = self.state.total;
        info!(
            tests = total.tests,
            failures = total.failures,
            skipped = total.skipped,
            "test run finished"
        );
        let status = RunStatus::from_failed(total.failed());
        self.state.reset_run();

        if self.options.exit_at_end {
            self.finish(status);
        }
        status.is_success()
    }

    fn handle_exception(&mut self) {
        info!(last_location = ?self.state.last_location, "test run aborted by exception");
        self.fmt_errors.push_on_error(
            FormatError::Exception,
            self.reporter
                .fmt_exception(self.state.last_location.as_ref()),
        );

        self.state.reset_run();

        if self.options.exit_at_end {
            self.finish(RunStatus::Failure);
        }
    }

    fn finish(&mut self, status: RunStatus) {
        if self.options.wait_at_exit {
            self.fmt_errors
                .push_on_error(FormatError::Wait, self.reporter.wait());
        }
        self.exit.exit(status);
    }
}

impl<Reporter, Exit> TestHarness<Reporter, Exit>
where
    Reporter: TestReporter,
    Reporter::Error: Debug,
    Exit: TestExit,
{
    /// Check an assertion.
    pub fn check(&mut self, assertion: Assertion<'_>) -> bool {
        self.log(Event::Check(assertion))
    }

    /// Check an assertion, marking the run as possibly skipping tests if it
    /// fails.
    ///
    /// The returned flag is meant for the caller's own control flow, e.g. to
    /// return early when a precondition failed.
    pub fn check_skip(&mut self, assertion: Assertion<'_>) -> bool {
        self.log(Event::CheckSkip(assertion))
    }

    pub fn group(&mut self, name: &str) {
        self.log(Event::BeginGroup(Some(name)));
    }

    pub fn section(&mut self, name: &str) {
        self.log(Event::BeginSection(Some(name)));
    }

    /// Collapse the following assertions into a single test until merging is
    /// turned off or the next group, section, summary or exception.
    pub fn merge(&mut self, merging: bool) {
        self.log(Event::Merge(merging));
    }

    pub fn print(&mut self, text: &str) {
        self.log(Event::Print(Some(text)));
    }

    /// Print the summary and end the run. Returns whether every test passed.
    pub fn summary(&mut self) -> bool {
        self.log(Event::Summary)
    }

    pub fn exception(&mut self) {
        self.log(Event::Exception);
    }

    /// Whether any assertion failed since the run started.
    pub fn failed(&mut self) -> bool {
        self.log(Event::Failed)
    }

    pub fn set_exit(&mut self, exit_at_end: bool) {
        self.log(Event::SetExit(exit_at_end));
    }

    pub fn set_wait(&mut self, wait_at_exit: bool) {
        self.log(Event::SetWait(wait_at_exit));
    }

    /// Run a driver body, turning a panic into an exception event.
    ///
    /// Returns the body's value, or `None` if it panicked.
    pub fn guard<T>(&mut self, body: impl FnOnce(&mut Self) -> T) -> Option<T> {
        match catch_unwind(AssertUnwindSafe(|| body(&mut *self))) {
            Ok(value) => Some(value),
            Err(payload) => {
                error!(panic = %payload_as_string(payload), "test driver panicked");
                self.exception();
                None
            }
        }
    }
}

impl<Reporter: TestReporter, Exit> TestHarness<Reporter, Exit> {
    pub fn with_reporter<WithReporter: TestReporter>(
        self,
        reporter: WithReporter,
    ) -> TestHarness<WithReporter, Exit> {
        TestHarness {
            state: self.state,
            options: self.options,
            reporter,
            exit: self.exit,
            fmt_errors: Vec::new(),
        }
    }

    pub fn with_exit<WithExit: TestExit>(self, exit: WithExit) -> TestHarness<Reporter, WithExit> {
        TestHarness {
            state: self.state,
            options: self.options,
            reporter: self.reporter,
            exit,
            fmt_errors: self.fmt_errors,
        }
    }

    pub fn with_options(self, options: HarnessOptions) -> Self {
        Self { options, ..self }
    }

    pub fn state(&self) -> &HarnessState {
        &self.state
    }

    pub fn options(&self) -> &HarnessOptions {
        &self.options
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Reporter errors collected so far, in the order they happened.
    pub fn fmt_errors(&self) -> &[ReportError<Reporter::Error>] {
        &self.fmt_errors
    }

    pub fn take_fmt_errors(&mut self) -> Vec<ReportError<Reporter::Error>> {
        std::mem::take(&mut self.fmt_errors)
    }
}

/// Convert a panic payload into a string.
///
/// This matches the common payload types produced by `panic!` (`&'static str`
/// and `String`). Other payload types are formatted as a generic placeholder.
pub fn payload_as_string(payload: Box<dyn Any + Send + 'static>) -> String {
    payload
        .downcast::<&'static str>()
        .map(|s| s.to_string())
        .or_else(|payload| payload.downcast::<String>().map(|s| *s))
        .unwrap_or_else(|_| String::from("Box<dyn Any>"))
}
