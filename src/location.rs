//! Source locations of assertions.
//!
//! The harness never inspects these beyond printing them, so a location is just
//! an opaque file name and a line number. The call-site macros fill them in
//! from [`file!`] and [`line!`].

use std::{borrow::Cow, fmt::Display};

/// Where an assertion was checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub file: Cow<'static, str>,
    pub line: u32,
}

impl Location {
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Strip the directories from a source path, keeping only the file name.
    ///
    /// Both `/` and `\` count as separators so output looks the same for paths
    /// produced on any platform.
    pub fn file_name(path: &str) -> &str {
        path.rsplit(|c| c == '/' || c == '\\')
            .next()
            .unwrap_or(path)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Extract a bare function name from the type name of a marker fn nested in it.
///
/// Used by [`test_group_fn!`](crate::test_group_fn) and
/// [`test_section_fn!`](crate::test_section_fn), which define a local `__here`
/// function and pass `type_name_of_val(&__here)`.
#[doc(hidden)]
pub fn function_name(path: &'static str) -> &'static str {
    let path = path.strip_suffix("::__here").unwrap_or(path);
    path.rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or(path)
}
