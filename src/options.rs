/// How failures inside a merged run are printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeOutput {
    /// Only the first failure of a merged run is printed.
    #[default]
    FirstFailure,

    /// Every failure is printed, the ones after the first as a continuation
    /// (`      failed!`).
    Continuation,
}

/// Options controlling how a run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HarnessOptions {
    /// Terminate through the exit strategy after summary and exception.
    pub exit_at_end: bool,

    /// Wait for a line of input before terminating.
    pub wait_at_exit: bool,

    pub merge_output: MergeOutput,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            exit_at_end: true,
            wait_at_exit: true,
            merge_output: MergeOutput::default(),
        }
    }
}

impl HarnessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exit_at_end(self, exit_at_end: bool) -> Self {
        Self {
            exit_at_end,
            ..self
        }
    }

    pub fn with_wait_at_exit(self, wait_at_exit: bool) -> Self {
        Self {
            wait_at_exit,
            ..self
        }
    }

    pub fn with_merge_output(self, merge_output: MergeOutput) -> Self {
        Self {
            merge_output,
            ..self
        }
    }
}
