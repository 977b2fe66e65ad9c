use std::{
    fmt::Display,
    io::{self, Read},
};

use crate::{
    location::Location,
    reporter::{
        FmtCheck, TestReporter,
        common::{
            RULE, Spelling,
            color::{ColorSetting, SupportsColor, colors::*},
        },
    },
    state::TestCounter,
};

pub const BANNER: &str = "sTest v 1.1 <console:text>";

/// The classic sTest console output.
///
/// Writes to `W` (stdout by default) and, when the harness waits before
/// exiting, reads a line from `I` (stdin by default). Every report ends with a
/// flushed newline so output survives an immediate process exit.
#[derive(Debug)]
pub struct PrettyReporter<W: io::Write, I: io::Read> {
    target: W,
    input: I,
    color_setting: ColorSetting,
    spelling: Spelling,
}

impl Default for PrettyReporter<io::Stdout, io::Stdin> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
            input: io::stdin(),
            color_setting: Default::default(),
            spelling: Default::default(),
        }
    }
}

impl<W: io::Write, I: io::Read> PrettyReporter<W, I> {
    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> PrettyReporter<WithTarget, I> {
        PrettyReporter {
            target: with_target,
            input: self.input,
            color_setting: self.color_setting,
            spelling: self.spelling,
        }
    }

    pub fn with_input<WithInput: io::Read>(self, with_input: WithInput) -> PrettyReporter<W, WithInput> {
        PrettyReporter {
            target: self.target,
            input: with_input,
            color_setting: self.color_setting,
            spelling: self.spelling,
        }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        PrettyReporter {
            color_setting: color_setting.into(),
            ..self
        }
    }

    pub fn with_spelling(self, spelling: Spelling) -> Self {
        PrettyReporter { spelling, ..self }
    }

    pub fn target(&self) -> &W {
        &self.target
    }

    pub fn into_target(self) -> W {
        self.target
    }

    fn end_line(&mut self) -> io::Result<()> {
        writeln!(self.target)?;
        self.target.flush()
    }
}

impl<W: io::Write + SupportsColor, I: io::Read> PrettyReporter<W, I> {
    /// Return whether this reporter will currently emit colored output.
    pub fn use_color(&self) -> bool {
        match self.color_setting {
            ColorSetting::Automatic => self.target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }

    fn paint(&mut self, color: &str, text: impl Display) -> io::Result<()> {
        match self.use_color() {
            true => write!(self.target, "{color}{text}{RESET}"),
            false => write!(self.target, "{text}"),
        }
    }
}

impl<W: io::Write + SupportsColor, I: io::Read> TestReporter for PrettyReporter<W, I> {
    type Error = io::Error;

    fn fmt_banner(&mut self) -> io::Result<()> {
        writeln!(self.target, "{BANNER}")?;
        self.end_line()
    }

    fn fmt_group(&mut self, name: &str) -> io::Result<()> {
        write!(self.target, "{name}")?;
        self.end_line()
    }

    fn fmt_section(&mut self, name: &str) -> io::Result<()> {
        self.paint(CYAN, format_args!("[{name}]"))?;
        writeln!(self.target)?;
        self.end_line()
    }

    fn fmt_check(&mut self, data: FmtCheck<'_>) -> io::Result<bool> {
        let FmtCheck {
            assertion,
            skip,
            continuation,
        } = data;
        if assertion.passed {
            return Ok(false);
        }

        match continuation {
            true => {
                write!(self.target, "      ")?;
                self.paint(RED, "failed!")?;
            }
            false => {
                write!(self.target, " ")?;
                self.paint(RED, "Test failed!")?;
            }
        }
        write!(self.target, "   {}   {}", assertion.location, assertion.expr)?;
        if skip {
            writeln!(self.target)?;
            self.paint(YELLOW, " -skipping next tests")?;
        }
        self.end_line()?;
        Ok(true)
    }

    fn fmt_group_status(&mut self, group: &TestCounter) -> io::Result<()> {
        match group.failures {
            0 => write!(self.target, " -test count: {}", group.tests)?,
            failures => write!(self.target, " -failed: {failures} of {}", group.tests)?,
        }
        if group.skipped {
            write!(self.target, "*")?;
        }
        writeln!(self.target)?;
        self.end_line()
    }

    fn fmt_summary(&mut self, total: &TestCounter) -> io::Result<()> {
        writeln!(self.target, "{RULE}")?;
        match total.failures {
            0 => self.paint(GREEN, "All tests passed!")?,
            failures => self.paint(RED, format_args!("Warning {failures} tests failed!"))?,
        }
        writeln!(self.target)?;
        write!(self.target, "Test count: {}", total.tests)?;
        if total.skipped {
            write!(self.target, "*\n*Some tests may be skipped.")?;
        }
        self.end_line()
    }

    fn fmt_exception(&mut self, last: Option<&Location>) -> io::Result<()> {
        write!(self.target, "\n{RULE}\n")?;
        match last {
            Some(location) => write!(
                self.target,
                "{}{location}",
                self.spelling.exception_after_test()
            )?,
            None => write!(self.target, "{}", self.spelling.exception_before_any_test())?,
        }
        self.end_line()
    }

    fn fmt_print(&mut self, text: &str) -> io::Result<()> {
        write!(self.target, "{text}")?;
        self.end_line()
    }

    fn wait(&mut self) -> io::Result<()> {
        self.target.flush()?;
        for byte in (&mut self.input).bytes() {
            if byte? == b'\n' {
                break;
            }
        }
        Ok(())
    }
}
