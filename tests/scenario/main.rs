use pretty_assertions::assert_eq;
use stest::{
    HarnessOptions, MergeOutput,
    event::{Assertion, Event},
    exit::RunStatus,
    location::Location,
};

mod lib;
use lib::*;


const BANNER: [&str; 2] = ["sTest v 1.1 <console:text>", ""];
const RULE: &str = "==============================";

fn assert_at(expr: &str, line: u32, passed: bool) -> Assertion<'_> {
    Assertion::new(expr, Location::new("f", line), passed)
}

fn expected(lines: &[&str]) -> Vec<String> {
    BANNER
        .iter()
        .chain(lines)
        .map(|line| line.to_string())
        .collect()
}

#[test]
fn passing_group() {
    let (mut harness, output, exit) = scenario_harness();
    harness.log(Event::BeginGroup(Some("add")));
    harness.log(Event::Check(assert_at("1+1==2", 1, true)));
    harness.log(Event::Check(assert_at("1+2==3", 2, true)));
    harness.log(Event::Summary);

    assert_eq!(
        output.lines(),
        expected(&[
            "add",
            " -test count: 2",
            "",
            RULE,
            "All tests passed!",
            "Test count: 2",
        ])
    );
    assert_eq!(exit.status(), Some(RunStatus::Success));
}

#[test]
fn failing_group() {
    let (mut harness, output, exit) = scenario_harness();
    harness.log(Event::BeginGroup(Some("sub")));
    harness.log(Event::Check(assert_at("1-1==1", 3, false)));
    harness.log(Event::Summary);

    assert_eq!(
        output.lines(),
        expected(&[
            "sub",
            " Test failed!   f:3   1-1==1",
            " -failed: 1 of 1",
            "",
            RULE,
            "Warning 1 tests failed!",
            "Test count: 1",
        ])
    );
    assert_eq!(exit.status(), Some(RunStatus::Failure));
}

#[test]
fn merged_failures_count_once() {
    let (mut harness, output, exit) = scenario_harness();
    harness.log(Event::BeginGroup(Some("mul")));
    harness.log(Event::Check(assert_at("0*1==0", 5, true)));
    harness.log(Event::Merge(true));
    harness.log(Event::Check(assert_at("1*2==2", 6, false)));
    harness.log(Event::Check(assert_at("2*1==1", 7, false)));
    harness.log(Event::Summary);

    assert_eq!(
        output.lines(),
        expected(&[
            "mul",
            " Test failed!   f:6   1*2==2",
            " -failed: 1 of 2",
            "",
            RULE,
            "Warning 1 tests failed!",
            "Test count: 2",
        ])
    );
    assert_eq!(exit.status(), Some(RunStatus::Failure));
}

#[test]
fn merged_failures_with_continuation_lines() {
    let (harness, output, _) = scenario_harness();
    let mut harness = harness
        .with_options(HarnessOptions::new().with_merge_output(MergeOutput::Continuation));
    harness.log(Event::BeginGroup(Some("mul")));
    harness.log(Event::Check(assert_at("0*1==0", 5, true)));
    harness.log(Event::Merge(true));
    harness.log(Event::Check(assert_at("1*2==2", 6, false)));
    harness.log(Event::Check(assert_at("2*1==1", 7, false)));
    harness.log(Event::Summary);

    assert_eq!(
        output.lines(),
        expected(&[
            "mul",
            " Test failed!   f:6   1*2==2",
            "      failed!   f:7   2*1==1",
            " -failed: 1 of 2",
            "",
            RULE,
            "Warning 1 tests failed!",
            "Test count: 2",
        ])
    );
}

#[test]
fn skipped_failure_is_marked() {
    let (mut harness, output, exit) = scenario_harness();
    assert!(!harness.log(Event::CheckSkip(assert_at("x==1", 10, false))));
    harness.log(Event::Summary);

    assert_eq!(
        output.lines(),
        expected(&[
            " Test failed!   f:10   x==1",
            " -skipping next tests",
            " -failed: 1 of 1*",
            "",
            RULE,
            "Warning 1 tests failed!",
            "Test count: 1*",
            "*Some tests may be skipped.",
        ])
    );
    assert_eq!(exit.status(), Some(RunStatus::Failure));
}

#[test]
fn exception_after_a_test() {
    let (mut harness, output, exit) = scenario_harness();
    harness.log(Event::BeginGroup(Some("A")));
    harness.log(Event::Check(assert_at("a", 21, true)));
    harness.log(Event::Exception);

    assert_eq!(
        output.lines(),
        expected(&["A", "", RULE, "Exception afer test in: f:21"])
    );
    assert_eq!(exit.status(), Some(RunStatus::Failure));
}

#[test]
fn exit_disabled() {
    let (mut harness, output, exit) = scenario_harness();
    harness.log(Event::SetExit(false));
    assert!(harness.log(Event::Summary));

    assert_eq!(
        output.lines(),
        expected(&[RULE, "All tests passed!", "Test count: 0"])
    );
    assert_eq!(exit.status(), None);
}

#[test]
fn sections_and_groups() {
    let (mut harness, output, _) = scenario_harness();
    harness.section("arithmetic");
    harness.group("add");
    harness.check(assert_at("1+1==2", 1, true));
    harness.group("sub");
    harness.check(assert_at("1-1==0", 2, true));
    harness.section("logic");
    harness.group("and");
    harness.check(assert_at("true&&false", 3, false));
    harness.print("done with logic");
    harness.summary();

    assert_eq!(
        output.lines(),
        expected(&[
            "[arithmetic]",
            "",
            "add",
            " -test count: 1",
            "",
            "sub",
            " -test count: 1",
            "",
            "[logic]",
            "",
            "and",
            " Test failed!   f:3   true&&false",
            "done with logic",
            " -failed: 1 of 1",
            "",
            RULE,
            "Warning 1 tests failed!",
            "Test count: 3",
        ])
    );
}

#[test]
fn a_second_run_starts_from_zero() {
    let (mut harness, output, exit) = scenario_harness();
    harness.set_exit(false);
    harness.check(assert_at("a", 1, false));
    assert!(!harness.summary());
    assert!(!harness.failed());

    harness.set_exit(true);
    harness.check(assert_at("b", 2, true));
    assert!(harness.summary());

    assert_eq!(exit.status(), Some(RunStatus::Success));
    assert!(output.to_string().ends_with(&format!(
        "{RULE}\nAll tests passed!\nTest count: 1\n"
    )));
}
