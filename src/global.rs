//! The process wide harness behind the `test_*!` macros.
//!
//! Each thread owns one [`DefaultHarness`], created lazily on first use. A
//! driver is expected to run on a single thread, so in practice this is the one
//! harness of the process.

use std::cell::RefCell;

use tracing::error;

use crate::{
    event::Event,
    harness::{DefaultHarness, payload_as_string},
};

thread_local! {
    static HARNESS: RefCell<DefaultHarness> = RefCell::new(DefaultHarness::default());
}

/// Send an event to this thread's harness.
pub fn log(event: Event<'_>) -> bool {
    HARNESS.with_borrow_mut(|harness| harness.log(event))
}

/// Access this thread's harness directly, e.g. to change options or inspect
/// counters.
pub fn with_harness<T>(f: impl FnOnce(&mut DefaultHarness) -> T) -> T {
    HARNESS.with_borrow_mut(f)
}

/// Run a driver body, reporting an exception if it panics.
///
/// This is the counterpart to wrapping the driver in a catch-all block and
/// calling [`test_exception!`](crate::test_exception) from it. Returns the
/// body's value, or `None` if it panicked (and the exit policy let the process
/// continue).
pub fn guard<T>(body: impl FnOnce() -> T) -> Option<T> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(body)) {
        Ok(value) => Some(value),
        Err(payload) => {
            error!(panic = %payload_as_string(payload), "test driver panicked");
            log(Event::Exception);
            None
        }
    }
}
