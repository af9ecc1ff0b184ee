//! Ready-made [`EventHandler`](crate::EventHandler)s that report a run in the GoogleTest format.
//!
//! ```text
//! [==========] Running 2 tests from 1 test suite.
//! [----------] Global test environments setup.
//! [----------] 2 tests from Math
//! [ RUN      ] Math.AddsTwoNumbers
//! [       OK ] Math.AddsTwoNumbers
//! [ RUN      ] Math.WrongAnswer
//! src/math.rs:12: Failure
//!       Expected: 2 + 2 == 5
//!         Actual: 4 == 5
//! [  FAILED  ] Math.WrongAnswer
//! [----------] 2 tests from Math ran.
//! [----------] Global test environments tear-down.
//! [==========] 2 tests from 1 test suite ran.
//! [  PASSED  ] 1 test.
//! [  FAILED  ] 1 test.
//! ```

#[cfg(feature = "defmt")]
mod defmt;
mod logging;
mod printing;

#[cfg(feature = "defmt")]
pub use self::defmt::DefmtEventHandler;
pub use self::{logging::LoggingEventHandler, printing::PrintingEventHandler};

/// `"test"` or `"tests"`.
fn tests(count: u32) -> &'static str {
    if count == 1 {
        "test"
    } else {
        "tests"
    }
}

/// `"test suite"` or `"test suites"`.
fn suites(count: u32) -> &'static str {
    if count == 1 {
        "test suite"
    } else {
        "test suites"
    }
}
