//! Test run events and the [`EventHandler`] observer interface.
//!
//! The framework reports every transition of a test run through the registered
//! [`EventHandler`]. Presentation (text, logs, wire protocols) is entirely up to the handler; the
//! framework only guarantees that the data is available.

/// The outcome of a single test case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TestResult {
    /// All expectations passed.
    Success,
    /// At least one expectation failed.
    Failure,
    /// The test requested to be skipped and nothing failed before that.
    Skipped,
}

/// Identity of a test case, as surfaced to event handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TestCase {
    /// Name of the suite the test belongs to.
    pub suite_name: &'static str,
    /// Name of the test case.
    pub test_name: &'static str,
    /// Path of the file where the test was defined.
    pub file_name: &'static str,
}

/// One evaluated expectation.
///
/// Only lives for the duration of the [`EventHandler::test_case_expect`] call; handlers that want
/// to keep it must copy the strings out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TestExpectation<'a> {
    /// The expression as written in the source, e.g. `a + b == 4`.
    pub expression: &'a str,
    /// The expression with its operands replaced by their values, e.g. `5 == 4`.
    pub evaluated_expression: &'a str,
    /// Line of the expectation in the file of the current test.
    pub line_number: u32,
    /// Whether the expectation held.
    pub success: bool,
}

/// Run-wide counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunTestsSummary {
    /// Tests that finished with [`TestResult::Success`].
    pub passed_tests: u32,
    /// Tests that finished with [`TestResult::Failure`].
    pub failed_tests: u32,
    /// Tests that finished with [`TestResult::Skipped`].
    pub skipped_tests: u32,
    /// Tests that were not run because they are disabled.
    pub disabled_tests: u32,
}

impl RunTestsSummary {
    /// Number of tests that were executed.
    pub fn ran_tests(&self) -> u32 {
        self.passed_tests + self.failed_tests + self.skipped_tests
    }
}

/// A contiguous group of test cases sharing a suite name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TestSuite {
    /// Name of the suite.
    pub name: &'static str,
    /// Number of enabled tests of the group that will run.
    pub test_to_run_count: u32,
}

/// Summary of a whole test program.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProgramSummary {
    /// Number of enabled tests that pass the suite filter.
    pub tests_to_run: u32,
    /// Number of suite groups that contain at least one test to run.
    pub test_suites: u32,
    /// Counters; all zero at program start.
    pub tests_summary: RunTestsSummary,
}

/// Receives the events of a test run.
///
/// Events are delivered synchronously and in order from the thread that executes
/// `run_all_tests`; a handler that blocks stalls the whole run. Implementations must not rely on
/// being called from a particular thread.
///
/// All methods take `&self`; handlers that keep state use interior mutability. The program,
/// environment and suite events have empty default implementations.
pub trait EventHandler: Sync {
    /// The test program is about to run its tests.
    fn test_program_start(&self, _program_summary: &ProgramSummary) {}

    /// The test program finished.
    fn test_program_end(&self, _program_summary: &ProgramSummary) {}

    /// Global test environments were set up.
    fn environments_set_up_end(&self) {}

    /// Global test environments were torn down.
    fn environments_tear_down_end(&self) {}

    /// A group of tests of `test_suite` is about to run.
    fn test_suite_start(&self, _test_suite: &TestSuite) {}

    /// A group of tests of `test_suite` finished.
    fn test_suite_end(&self, _test_suite: &TestSuite) {}

    /// The framework starts iterating over the registered tests.
    fn run_all_tests_start(&self);

    /// The framework finished iterating over the registered tests.
    fn run_all_tests_end(&self, run_tests_summary: &RunTestsSummary);

    /// `test_case` is about to run.
    fn test_case_start(&self, test_case: &TestCase);

    /// `test_case` finished with `result`.
    fn test_case_end(&self, test_case: &TestCase, result: TestResult);

    /// `test_case` is disabled and will not run.
    fn test_case_disabled(&self, test_case: &TestCase);

    /// An expectation of `test_case` was evaluated.
    fn test_case_expect(&self, test_case: &TestCase, expectation: &TestExpectation<'_>);
}

/// An event handler that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyEventHandler;

impl EventHandler for EmptyEventHandler {
    fn run_all_tests_start(&self) {}

    fn run_all_tests_end(&self, _: &RunTestsSummary) {}

    fn test_case_start(&self, _: &TestCase) {}

    fn test_case_end(&self, _: &TestCase, _: TestResult) {}

    fn test_case_disabled(&self, _: &TestCase) {}

    fn test_case_expect(&self, _: &TestCase, _: &TestExpectation<'_>) {}
}

/// Forwards every event to several handlers, in the order they were given.
///
/// ```
/// use unit_test::{EmptyEventHandler, MultiEventHandler};
///
/// static FIRST: EmptyEventHandler = EmptyEventHandler;
/// static SECOND: EmptyEventHandler = EmptyEventHandler;
/// static BOTH: MultiEventHandler<2> = MultiEventHandler::new([&FIRST, &SECOND]);
///
/// unit_test::register_event_handler(Some(&BOTH));
/// ```
pub struct MultiEventHandler<const N: usize> {
    handlers: [&'static dyn EventHandler; N],
}

impl<const N: usize> MultiEventHandler<N> {
    /// Creates a handler that fans out to `handlers`.
    pub const fn new(handlers: [&'static dyn EventHandler; N]) -> Self {
        Self { handlers }
    }

    fn for_each(&self, f: impl Fn(&dyn EventHandler)) {
        for handler in &self.handlers {
            f(*handler)
        }
    }
}

impl<const N: usize> EventHandler for MultiEventHandler<N> {
    fn test_program_start(&self, program_summary: &ProgramSummary) {
        self.for_each(|h| h.test_program_start(program_summary))
    }

    fn test_program_end(&self, program_summary: &ProgramSummary) {
        self.for_each(|h| h.test_program_end(program_summary))
    }

    fn environments_set_up_end(&self) {
        self.for_each(|h| h.environments_set_up_end())
    }

    fn environments_tear_down_end(&self) {
        self.for_each(|h| h.environments_tear_down_end())
    }

    fn test_suite_start(&self, test_suite: &TestSuite) {
        self.for_each(|h| h.test_suite_start(test_suite))
    }

    fn test_suite_end(&self, test_suite: &TestSuite) {
        self.for_each(|h| h.test_suite_end(test_suite))
    }

    fn run_all_tests_start(&self) {
        self.for_each(|h| h.run_all_tests_start())
    }

    fn run_all_tests_end(&self, run_tests_summary: &RunTestsSummary) {
        self.for_each(|h| h.run_all_tests_end(run_tests_summary))
    }

    fn test_case_start(&self, test_case: &TestCase) {
        self.for_each(|h| h.test_case_start(test_case))
    }

    fn test_case_end(&self, test_case: &TestCase, result: TestResult) {
        self.for_each(|h| h.test_case_end(test_case, result))
    }

    fn test_case_disabled(&self, test_case: &TestCase) {
        self.for_each(|h| h.test_case_disabled(test_case))
    }

    fn test_case_expect(&self, test_case: &TestCase, expectation: &TestExpectation<'_>) {
        self.for_each(|h| h.test_case_expect(test_case, expectation))
    }
}
