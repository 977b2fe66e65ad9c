use std::sync::LazyLock;

use regex::Regex;

static LIBTEST_PREAMBLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Everything libtest prints before the harness banner, e.g.
    //   \nrunning 1 test\n
    Regex::new(r"(?s)\A.*?(sTest v )").unwrap()
});

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches: process.rs:42
    Regex::new(r"(?P<file>[\w-]+\.rs):\d+").unwrap()
});

/// Strip libtest noise from a child's stdout and hide line numbers.
pub fn sanitize_child_output(input: &str) -> String {
    let tmp = LIBTEST_PREAMBLE_RE.replace(input, "${1}");
    let tmp = LINE_RE.replace_all(tmp.as_ref(), "${file}:<line>");
    tmp.to_string()
}
