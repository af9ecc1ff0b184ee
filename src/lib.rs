//! A GoogleTest-style unit test framework for resource-constrained devices, like
//! microcontrollers.
//!
//! Tests are registered statically, run one after the other and never allocate: the fixture of
//! the running test lives in a fixed-size memory pool. Every step of a run is reported to an
//! [`EventHandler`], which decides how (and whether) results are presented.
//!
//! ```
//! use unit_test::{expect_eq, expect_streq};
//!
//! #[unit_test::test(Math)]
//! fn adds_two_numbers() {
//!     expect_eq!(2 + 2, 4);
//!     expect_streq!("abc", "abc");
//! }
//!
//! # fn main() {
//! assert_eq!(unit_test::run_all_tests(), 0);
//! # }
//! ```
//!
//! # Compile-time checks
//!
//! A [`const_test`] body is also evaluated by the compiler; its `const_expect_*` and
//! `const_assert_*` checks fail the build when they do not hold.
//!
//! ```compile_fail,E0080
//! use unit_test::const_expect_eq;
//!
//! #[unit_test::const_test(Math)]
//! fn adds_two_numbers() {
//!     const_expect_eq!(2 + 2, 5);
//! }
//! # fn main() {}
//! ```

#![cfg_attr(not(test), no_std)]
#![doc(html_logo_url = "https://knurling.ferrous-systems.com/knurling_logo_light_text.svg")]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod config;
pub mod const_eval;
mod error;
pub mod event;
mod expect;
#[doc(hidden)]
pub mod export;
mod fixture;
mod framework;
pub mod handlers;
mod macros;
mod pool;
mod registry;

pub use crate::{
    error::Error,
    event::{
        EmptyEventHandler, EventHandler, MultiEventHandler, ProgramSummary, RunTestsSummary,
        TestCase, TestExpectation, TestResult, TestSuite,
    },
    expect::StrOperand,
    fixture::{Fixture, FixtureTest, Test, TestFactory},
    framework::{Framework, SKIPPED_EXPRESSION},
    pool::POISON,
    registry::{is_valid_suite_name, TestInfo, Tests, DISABLED_PREFIX},
};

/// Declares a test that runs without fixture: `#[test(Suite)] fn case() { .. }`.
///
/// The test is registered as `Suite.case`. Suite names must not contain underscores, other than
/// in a leading `DISABLED_`; a `DISABLED_` suite or case name turns the test off.
pub use unit_test_macros::test;

/// Declares a test that runs against a fixture:
/// `#[test_f(MyFixture)] fn case(fixture: &mut MyFixture) { .. }`.
///
/// The suite name is the name of the fixture type, which must implement [`Fixture`].
pub use unit_test_macros::test_f;

/// Declares a test that is checked at run time and at compile time:
/// `#[const_test(Suite)] fn case() { .. }`.
///
/// At run time this is a [`test`]. In addition, a `const fn` copy of the body is evaluated while
/// compiling, in which every `const_expect_*!` and `const_assert_*!` that does not hold is a
/// build error. Everything else in the body must be usable in constant evaluation.
pub use unit_test_macros::const_test;

/// Expects that a `bool` expression is `true`: `expect_true!(condition)`.
pub use unit_test_macros::expect_true_ as expect_true;

/// Expects that a `bool` expression is `false`: `expect_false!(condition)`.
pub use unit_test_macros::expect_false_ as expect_false;

/// Expects `left == right`; both operands must implement `Debug`.
pub use unit_test_macros::expect_eq_ as expect_eq;

/// Expects `left != right`; both operands must implement `Debug`.
pub use unit_test_macros::expect_ne_ as expect_ne;

/// Expects `left < right`; both operands must implement `Debug`.
pub use unit_test_macros::expect_lt_ as expect_lt;

/// Expects `left <= right`; both operands must implement `Debug`.
pub use unit_test_macros::expect_le_ as expect_le;

/// Expects `left > right`; both operands must implement `Debug`.
pub use unit_test_macros::expect_gt_ as expect_gt;

/// Expects `left >= right`; both operands must implement `Debug`.
pub use unit_test_macros::expect_ge_ as expect_ge;

/// Expects that two numbers differ by at most an epsilon: `expect_near!(left, right, epsilon)`.
pub use unit_test_macros::expect_near_ as expect_near;

/// Expects that two `f32` are equal within four units in the last place.
pub use unit_test_macros::expect_float_eq_ as expect_float_eq;

/// Expects that two `f64` are equal within four units in the last place.
pub use unit_test_macros::expect_double_eq_ as expect_double_eq;

/// Expects that two strings ([`StrOperand`]s) are equal; `None` only equals `None`.
pub use unit_test_macros::expect_streq_ as expect_streq;

/// Expects that two strings ([`StrOperand`]s) differ; `None` differs from every string.
pub use unit_test_macros::expect_strne_ as expect_strne;

/// Like [`expect_true!`] but returns from the test on failure.
pub use unit_test_macros::assert_true_ as assert_true;

/// Like [`expect_false!`] but returns from the test on failure.
pub use unit_test_macros::assert_false_ as assert_false;

/// Like [`expect_eq!`] but returns from the test on failure.
pub use unit_test_macros::assert_eq_ as assert_eq;

/// Like [`expect_ne!`] but returns from the test on failure.
pub use unit_test_macros::assert_ne_ as assert_ne;

/// Like [`expect_lt!`] but returns from the test on failure.
pub use unit_test_macros::assert_lt_ as assert_lt;

/// Like [`expect_le!`] but returns from the test on failure.
pub use unit_test_macros::assert_le_ as assert_le;

/// Like [`expect_gt!`] but returns from the test on failure.
pub use unit_test_macros::assert_gt_ as assert_gt;

/// Like [`expect_ge!`] but returns from the test on failure.
pub use unit_test_macros::assert_ge_ as assert_ge;

/// Like [`expect_near!`] but returns from the test on failure.
pub use unit_test_macros::assert_near_ as assert_near;

/// Like [`expect_float_eq!`] but returns from the test on failure.
pub use unit_test_macros::assert_float_eq_ as assert_float_eq;

/// Like [`expect_double_eq!`] but returns from the test on failure.
pub use unit_test_macros::assert_double_eq_ as assert_double_eq;

/// Like [`expect_streq!`] but returns from the test on failure.
pub use unit_test_macros::assert_streq_ as assert_streq;

/// Like [`expect_strne!`] but returns from the test on failure.
pub use unit_test_macros::assert_strne_ as assert_strne;

/// Runs every test declared with the test attributes on the global [`Framework`].
///
/// Returns `0` if no test failed and `1` otherwise.
pub fn run_all_tests() -> i32 {
    Framework::get().run_all_tests()
}

/// Sets the handler of the global [`Framework`]; `None` drops all events.
pub fn register_event_handler(handler: Option<&'static dyn EventHandler>) {
    Framework::get().register_event_handler(handler)
}

/// Restricts the runs of the global [`Framework`] to `suites`; an empty slice runs every suite.
pub fn set_test_suites_to_run(suites: &'static [&'static str]) {
    Framework::get().set_test_suites_to_run(suites)
}
