//! Common helpers for reporter implementations.

pub mod color;

/// Separator line printed above the summary and exception reports.
pub const RULE: &str = "==============================";

/// Which wording to use for messages the original harness misspelled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spelling {
    /// Byte-for-byte the original output, typos included.
    #[default]
    Original,

    /// Corrected wording.
    Corrected,
}

impl Spelling {
    pub fn exception_after_test(self) -> &'static str {
        match self {
            Spelling::Original => "Exception afer test in: ",
            Spelling::Corrected => "Exception after test in: ",
        }
    }

    pub fn exception_before_any_test(self) -> &'static str {
        match self {
            Spelling::Original => "Exception beafore anny test!",
            Spelling::Corrected => "Exception before any test!",
        }
    }
}
