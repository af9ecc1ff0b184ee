use core::{
    cell::{Cell, RefCell},
    mem,
};

use critical_section::Mutex;

use crate::{
    event::{
        EventHandler, ProgramSummary, RunTestsSummary, TestCase, TestExpectation, TestResult,
        TestSuite,
    },
    export,
    fixture::Fixture,
    pool::MemoryPool,
    registry::{Registry, Tests},
    Error, TestInfo,
};

/// Expression and evaluated text reported by [`skip!`](crate::skip).
pub const SKIPPED_EXPRESSION: &str = "(test skipped)";

/// The framework whose `run_all_tests` is currently executing.
static ACTIVE: Mutex<Cell<Option<&'static Framework>>> = Mutex::new(Cell::new(None));

struct State {
    registry: Registry,
    static_tests_linked: bool,
    current_test: Option<&'static TestInfo>,
    current_result: TestResult,
    summary: RunTestsSummary,
    handler: Option<&'static dyn EventHandler>,
    suites_to_run: &'static [&'static str],
}

impl State {
    const fn new() -> Self {
        Self {
            registry: Registry::new(),
            static_tests_linked: false,
            current_test: None,
            current_result: TestResult::Success,
            summary: RunTestsSummary {
                passed_tests: 0,
                failed_tests: 0,
                skipped_tests: 0,
                disabled_tests: 0,
            },
            handler: None,
            suites_to_run: &[],
        }
    }
}

/// Registers, sequences and runs tests and reports every step to an [`EventHandler`].
///
/// Test programs normally use the global instance returned by [`Framework::get`], through the
/// free functions at the crate root. Separate instances are useful to drive registrations by
/// hand:
///
/// ```
/// use unit_test::{Framework, FixtureTest, Test, TestInfo};
///
/// fn adds(_: &mut Test) {
///     unit_test::expect_eq!(2 + 2, 4);
/// }
///
/// static ADDS: FixtureTest<Test> = FixtureTest::new(adds);
/// static INFO: TestInfo = TestInfo::new("Math", "Adds", file!(), line!(), &ADDS);
/// static FRAMEWORK: Framework = Framework::new();
///
/// FRAMEWORK.register_test(&INFO).unwrap();
/// assert_eq!(FRAMEWORK.run_all_tests(), 0);
/// assert_eq!(FRAMEWORK.summary().passed_tests, 1);
/// ```
pub struct Framework {
    state: Mutex<RefCell<State>>,
    pool: MemoryPool,
}

impl Framework {
    /// Creates a framework without tests and without event handler.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(State::new())),
            pool: MemoryPool::new(),
        }
    }

    /// Returns the global framework.
    ///
    /// On first access, every test declared with [`test`](crate::test),
    /// [`test_f`](crate::test_f) or [`const_test`](crate::const_test) is registered.
    ///
    /// # Panics
    ///
    /// Panics if two of those tests share their suite and case name.
    pub fn get() -> &'static Framework {
        static FRAMEWORK: Framework = Framework::new();

        if let Err(e) = FRAMEWORK.link_static_tests() {
            panic!("{}", e);
        }
        &FRAMEWORK
    }

    fn link_static_tests(&self) -> Result<(), Error> {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            if mem::replace(&mut state.static_tests_linked, true) {
                return Ok(());
            }

            for test in export::TESTS.static_slice() {
                state.registry.push(cs, test)?;
            }
            log::debug!(
                "linked {} statically declared tests",
                export::TESTS.static_slice().len()
            );
            Ok(())
        })
    }

    /// Adds `test` at the end of the registry.
    pub fn register_test(&self, test: &'static TestInfo) -> Result<(), Error> {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).registry.push(cs, test))?;
        log::debug!(
            "registered {}.{} ({}:{})",
            test.suite_name(),
            test.test_name(),
            test.file_name(),
            test.line()
        );
        Ok(())
    }

    /// Sets the handler that receives the events of the next runs; `None` drops all events.
    pub fn register_event_handler(&self, handler: Option<&'static dyn EventHandler>) {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).handler = handler);
    }

    /// Restricts the next runs to the suites in `suites`; an empty slice runs every suite.
    ///
    /// Tests of other suites are skipped without any event.
    pub fn set_test_suites_to_run(&self, suites: &'static [&'static str]) {
        critical_section::with(|cs| self.state.borrow_ref_mut(cs).suites_to_run = suites);
    }

    /// The registered tests, in registration order.
    pub fn tests(&self) -> Tests {
        critical_section::with(|cs| self.state.borrow_ref(cs).registry.iter())
    }

    /// Counters of the current or last run.
    pub fn summary(&self) -> RunTestsSummary {
        critical_section::with(|cs| self.state.borrow_ref(cs).summary)
    }

    /// Whether `run_all_tests` is executing on this framework.
    pub fn is_running(&self) -> bool {
        active().is_some_and(|active| core::ptr::eq(active, self))
    }

    /// The test that is currently executing, if any.
    pub fn current_test(&self) -> Option<TestCase> {
        critical_section::with(|cs| self.state.borrow_ref(cs).current_test).map(TestInfo::test_case)
    }

    /// Runs every registered test once, in registration order.
    ///
    /// Returns `0` if no test failed and `1` otherwise; skipped and disabled tests do not count
    /// as failures. Only one run may be in progress at any time; a nested or concurrent call
    /// fails immediately and returns `1`.
    pub fn run_all_tests(&'static self) -> i32 {
        let _run = match RunGuard::new(self) {
            Ok(run) => run,
            Err(e) => {
                log::error!("refusing to run tests: {}", e);
                return 1;
            }
        };

        let suites_to_run = critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            state.summary = RunTestsSummary::default();
            state.suites_to_run
        });

        let mut program_summary = self.program_summary(suites_to_run);
        log::debug!(
            "running {} tests from {} test suites",
            program_summary.tests_to_run,
            program_summary.test_suites
        );

        self.emit(|h| h.test_program_start(&program_summary));
        self.emit(|h| h.environments_set_up_end());
        self.emit(|h| h.run_all_tests_start());

        let mut remaining = selected(self.tests(), suites_to_run);
        while let Some(first) = remaining.clone().next() {
            let suite_name = first.suite_name();
            let group = remaining
                .clone()
                .take_while(move |test| test.suite_name() == suite_name);

            let mut group_len = 0;
            let mut test_to_run_count = 0;
            for test in group.clone() {
                group_len += 1;
                if test.enabled() {
                    test_to_run_count += 1;
                }
            }

            self.run_test_suite(
                group,
                TestSuite {
                    name: suite_name,
                    test_to_run_count,
                },
            );

            for _ in 0..group_len {
                remaining.next();
            }
        }

        let summary = self.summary();
        self.emit(|h| h.run_all_tests_end(&summary));
        self.emit(|h| h.environments_tear_down_end());

        program_summary.tests_summary = summary;
        self.emit(|h| h.test_program_end(&program_summary));

        log::debug!(
            "{} passed, {} failed, {} skipped, {} disabled",
            summary.passed_tests,
            summary.failed_tests,
            summary.skipped_tests,
            summary.disabled_tests
        );

        if summary.failed_tests == 0 {
            0
        } else {
            1
        }
    }

    /// Constructs fixture `F` in the memory pool and runs `body` against it.
    ///
    /// `set_up` and `tear_down` always run; `body` does not run if the test was skipped by then.
    /// The fixture is dropped and the pool poisoned before this returns, also when unwinding.
    pub fn create_and_run_test<F: Fixture>(&self, body: fn(&mut F)) -> Result<(), Error> {
        let mut fixture = self.pool.acquire::<F>()?;

        fixture.set_up();
        if self.current_result() != TestResult::Skipped {
            body(&mut fixture);
        }
        fixture.tear_down();

        Ok(())
    }

    /// Reports an expectation of the current test; a failed one fails the test.
    ///
    /// Returns `success`.
    pub fn current_test_expect(
        &self,
        expression: &str,
        evaluated_expression: &str,
        line_number: u32,
        success: bool,
    ) -> bool {
        let (current_test, handler) = critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            if !success {
                state.current_result = TestResult::Failure;
            }
            (state.current_test, state.handler)
        });

        let Some(current_test) = current_test else {
            log::warn!(
                "`{}` evaluated outside of a test (line {})",
                expression,
                line_number
            );
            return success;
        };

        if let Some(handler) = handler {
            handler.test_case_expect(
                &current_test.test_case(),
                &TestExpectation {
                    expression,
                    evaluated_expression,
                    line_number,
                    success,
                },
            );
        }
        success
    }

    /// Marks the current test as skipped, unless it already failed.
    ///
    /// The caller has to leave the test body itself.
    pub fn current_test_skip(&self, line_number: u32) {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            if state.current_result == TestResult::Success {
                state.current_result = TestResult::Skipped;
            }
        });
        self.current_test_expect(SKIPPED_EXPRESSION, SKIPPED_EXPRESSION, line_number, true);
    }

    fn current_result(&self) -> TestResult {
        critical_section::with(|cs| self.state.borrow_ref(cs).current_result)
    }

    fn handler(&self) -> Option<&'static dyn EventHandler> {
        critical_section::with(|cs| self.state.borrow_ref(cs).handler)
    }

    /// Calls `f` with the registered handler, outside of the critical section.
    fn emit(&self, f: impl FnOnce(&dyn EventHandler)) {
        if let Some(handler) = self.handler() {
            f(handler)
        }
    }

    fn program_summary(&self, suites_to_run: &'static [&'static str]) -> ProgramSummary {
        let mut summary = ProgramSummary::default();
        let mut current_suite = None;
        let mut suite_counted = false;
        for test in selected(self.tests(), suites_to_run) {
            if current_suite != Some(test.suite_name()) {
                current_suite = Some(test.suite_name());
                suite_counted = false;
            }
            if test.enabled() {
                summary.tests_to_run += 1;
                if !suite_counted {
                    summary.test_suites += 1;
                    suite_counted = true;
                }
            }
        }
        summary
    }

    fn run_test_suite(
        &self,
        group: impl Iterator<Item = &'static TestInfo>,
        test_suite: TestSuite,
    ) {
        if test_suite.test_to_run_count != 0 {
            self.emit(|h| h.test_suite_start(&test_suite));
        }

        let mut left_to_run = test_suite.test_to_run_count;
        for test in group {
            let test_case = test.test_case();

            if !test.enabled() {
                log::debug!("{}.{} is disabled", test_case.suite_name, test_case.test_name);
                self.update_summary(|summary| summary.disabled_tests += 1);
                self.emit(|h| h.test_case_disabled(&test_case));
                continue;
            }

            self.emit(|h| h.test_case_start(&test_case));

            let factory = test.factory();
            if left_to_run == test_suite.test_to_run_count {
                factory.set_up_test_suite();
            }

            let result = self.run_test(test);

            left_to_run -= 1;
            if left_to_run == 0 {
                factory.tear_down_test_suite();
            }

            self.update_summary(|summary| match result {
                TestResult::Success => summary.passed_tests += 1,
                TestResult::Failure => summary.failed_tests += 1,
                TestResult::Skipped => summary.skipped_tests += 1,
            });
            self.emit(|h| h.test_case_end(&test_case, result));
        }

        if test_suite.test_to_run_count != 0 {
            self.emit(|h| h.test_suite_end(&test_suite));
        }
    }

    fn run_test(&self, test: &'static TestInfo) -> TestResult {
        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            state.current_test = Some(test);
            state.current_result = TestResult::Success;
        });
        log::debug!(
            "running {}.{} ({} byte fixture)",
            test.suite_name(),
            test.test_name(),
            test.factory().fixture_size()
        );

        if let Err(e) = test.factory().create_and_run(self) {
            log::error!("{}.{}: {}", test.suite_name(), test.test_name(), e);
            critical_section::with(|cs| {
                self.state.borrow_ref_mut(cs).current_result = TestResult::Failure
            });
        }

        critical_section::with(|cs| {
            let mut state = self.state.borrow_ref_mut(cs);
            state.current_test = None;
            state.current_result
        })
    }

    fn update_summary(&self, f: impl FnOnce(&mut RunTestsSummary)) {
        critical_section::with(|cs| f(&mut self.state.borrow_ref_mut(cs).summary))
    }
}

impl Default for Framework {
    fn default() -> Self {
        Self::new()
    }
}

/// Marks a framework as active for the duration of a run.
struct RunGuard;

impl RunGuard {
    fn new(framework: &'static Framework) -> Result<Self, Error> {
        critical_section::with(|cs| {
            let active = ACTIVE.borrow(cs);
            if active.get().is_some() {
                return Err(Error::RunInProgress);
            }
            active.set(Some(framework));
            Ok(RunGuard)
        })
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        critical_section::with(|cs| ACTIVE.borrow(cs).set(None));
    }
}

fn selected(
    tests: Tests,
    suites_to_run: &'static [&'static str],
) -> impl Iterator<Item = &'static TestInfo> + Clone {
    tests.filter(move |test| suites_to_run.is_empty() || suites_to_run.contains(&test.suite_name()))
}

/// The framework whose `run_all_tests` is executing.
pub(crate) fn active() -> Option<&'static Framework> {
    critical_section::with(|cs| ACTIVE.borrow(cs).get())
}

/// Reports an expectation to the active framework.
pub(crate) fn expect(expression: &str, evaluated: &str, line: u32, success: bool) -> bool {
    match active() {
        Some(framework) => framework.current_test_expect(expression, evaluated, line, success),
        None => {
            log::warn!(
                "`{}` evaluated while no tests are running (line {})",
                expression,
                line
            );
            success
        }
    }
}

/// Skips the current test of the active framework.
pub(crate) fn skip(line: u32) {
    match active() {
        Some(framework) => framework.current_test_skip(line),
        None => log::warn!("skip requested while no tests are running (line {})", line),
    }
}
