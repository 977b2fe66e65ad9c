//! A tiny unit test harness driven from your own `main`.
//!
//! The driver checks assertions, opens groups and sections and finally asks for
//! a summary. The harness counts tests and failures, prints a console report
//! and ends the process with a matching exit code.
//!
//! ```no_run
//! use stest::{test_check, test_group, test_merge, test_summary};
//!
//! fn main() {
//!     stest::global::guard(|| {
//!         test_group!("test_add");
//!         test_check!(1 + 1 == 2);
//!
//!         test_group!("test_mul");
//!         test_merge!(true);
//!         test_check!(1 * 2 == 2);
//!         test_check!(2 * 1 == 2);
//!
//!         test_summary!();
//!     });
//! }
//! ```
//!
//! The macros use a per-thread [`DefaultHarness`] (see [`global`]). Drivers
//! that want explicit state can build their own [`TestHarness`] and swap the
//! reporter or the exit strategy.

pub mod event;
pub mod exit;
pub mod global;
pub mod location;
pub mod reporter;

mod harness;
pub use harness::*;

mod macros;

mod options;
pub use options::*;

mod state;
pub use state::*;
