use std::{
    io,
    sync::{Arc, Mutex},
};

use stest::{
    TestHarness,
    exit::{RunStatus, TestExit},
    reporter::{PrettyReporter, common::color::SupportsColor},
};

mod sanitize;
pub use sanitize::*;

#[derive(Debug, Default, Clone)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        io::Write::write(&mut *guard, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SupportsColor for Buffer {
    fn supports_color(&self) -> bool {
        false
    }
}

impl Buffer {
    pub fn lines(&self) -> Vec<String> {
        self.to_string().lines().map(String::from).collect()
    }
}

impl std::fmt::Display for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.0.lock().map_err(|_| std::fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&guard))
    }
}

/// Exit strategy remembering the last status instead of terminating.
#[derive(Debug, Default, Clone)]
pub struct LastExit(Arc<Mutex<Option<RunStatus>>>);

impl TestExit for LastExit {
    fn exit(&self, status: RunStatus) {
        if let Ok(mut last) = self.0.lock() {
            *last = Some(status);
        }
    }
}

impl LastExit {
    pub fn status(&self) -> Option<RunStatus> {
        self.0.lock().ok().and_then(|last| *last)
    }
}

pub type ScenarioHarness = TestHarness<PrettyReporter<Buffer, io::Empty>, LastExit>;

pub fn scenario_harness() -> (ScenarioHarness, Buffer, LastExit) {
    let output = Buffer::default();
    let exit = LastExit::default();
    let harness = stest::harness()
        .with_reporter(
            PrettyReporter::default()
                .with_target(output.clone())
                .with_input(io::empty()),
        )
        .with_exit(exit.clone());
    (harness, output, exit)
}
