use crate::location::Location;

/// Test and failure counts for either the whole run or the current group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestCounter {
    pub tests: u64,
    pub failures: u64,

    /// Set once an assertion checked with skip semantics failed.
    pub skipped: bool,
}

impl TestCounter {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn failed(&self) -> bool {
        self.failures > 0
    }

    pub(crate) fn count_test(&mut self) {
        self.tests += 1;
    }

    pub(crate) fn count_failure(&mut self) {
        self.failures += 1;
    }
}

/// Bookkeeping for the current run of merged assertions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRun {
    /// The run already added its single test to the counters.
    pub counted: bool,

    /// The run already added its single failure to the counters.
    pub failed: bool,

    /// A failure line was printed for the run.
    pub printed: bool,
}

impl MergeRun {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Everything the harness remembers between events.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HarnessState {
    pub total: TestCounter,
    pub group: TestCounter,
    pub merging: bool,
    pub merge_run: MergeRun,

    /// Location of the most recent assertion, reported on exceptions.
    pub last_location: Option<Location>,

    pub banner_printed: bool,

    /// Whether the current section produced output that still needs a group
    /// status line.
    pub has_tests_or_group: bool,
}

impl HarnessState {
    /// Reset everything scoped to a group: group counters and merge state.
    pub(crate) fn reset_group(&mut self) {
        self.group.clear();
        self.merging = false;
        self.merge_run.clear();
    }

    /// Reset everything scoped to a run, leaving the banner printed.
    pub(crate) fn reset_run(&mut self) {
        self.total.clear();
        self.reset_group();
        self.has_tests_or_group = false;
    }
}
