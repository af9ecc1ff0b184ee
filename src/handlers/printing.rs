use core::fmt;

use super::{suites, tests};
use crate::event::{
    EventHandler, ProgramSummary, RunTestsSummary, TestCase, TestExpectation, TestResult,
    TestSuite,
};

/// Prints a run in the GoogleTest format, one line per call of a user-supplied function.
///
/// ```
/// use unit_test::handlers::PrintingEventHandler;
///
/// static PRINTER: PrintingEventHandler =
///     PrintingEventHandler::new(|line| println!("{}", line), false);
///
/// unit_test::register_event_handler(Some(&PRINTER));
/// ```
pub struct PrintingEventHandler {
    write_line: fn(fmt::Arguments<'_>),
    verbose: bool,
}

impl PrintingEventHandler {
    /// `write_line` receives every line without its terminator. In `verbose` mode, passing
    /// expectations are printed too.
    pub const fn new(write_line: fn(fmt::Arguments<'_>), verbose: bool) -> Self {
        Self {
            write_line,
            verbose,
        }
    }

    fn line(&self, args: fmt::Arguments<'_>) {
        (self.write_line)(args)
    }
}

impl EventHandler for PrintingEventHandler {
    fn test_program_start(&self, program_summary: &ProgramSummary) {
        self.line(format_args!(
            "[==========] Running {} {} from {} {}.",
            program_summary.tests_to_run,
            tests(program_summary.tests_to_run),
            program_summary.test_suites,
            suites(program_summary.test_suites),
        ));
    }

    fn test_program_end(&self, program_summary: &ProgramSummary) {
        let summary = &program_summary.tests_summary;
        self.line(format_args!(
            "[==========] {} {} from {} {} ran.",
            summary.ran_tests(),
            tests(summary.ran_tests()),
            program_summary.test_suites,
            suites(program_summary.test_suites),
        ));

        let counters = [
            ("[  PASSED  ]", summary.passed_tests, true),
            ("[  SKIPPED ]", summary.skipped_tests, false),
            ("[ DISABLED ]", summary.disabled_tests, false),
            ("[  FAILED  ]", summary.failed_tests, false),
        ];
        for (tag, count, always) in counters {
            if always || count != 0 {
                self.line(format_args!("{} {} {}.", tag, count, tests(count)));
            }
        }
    }

    fn environments_set_up_end(&self) {
        self.line(format_args!("[----------] Global test environments setup."));
    }

    fn environments_tear_down_end(&self) {
        self.line(format_args!("[----------] Global test environments tear-down."));
    }

    fn test_suite_start(&self, test_suite: &TestSuite) {
        self.line(format_args!(
            "[----------] {} {} from {}",
            test_suite.test_to_run_count,
            tests(test_suite.test_to_run_count),
            test_suite.name
        ));
    }

    fn test_suite_end(&self, test_suite: &TestSuite) {
        self.line(format_args!(
            "[----------] {} {} from {} ran.",
            test_suite.test_to_run_count,
            tests(test_suite.test_to_run_count),
            test_suite.name
        ));
    }

    fn run_all_tests_start(&self) {}

    fn run_all_tests_end(&self, _: &RunTestsSummary) {}

    fn test_case_start(&self, test_case: &TestCase) {
        self.line(format_args!(
            "[ RUN      ] {}.{}",
            test_case.suite_name, test_case.test_name
        ));
    }

    fn test_case_end(&self, test_case: &TestCase, result: TestResult) {
        let tag = match result {
            TestResult::Success => "[       OK ]",
            TestResult::Failure => "[  FAILED  ]",
            TestResult::Skipped => "[  SKIPPED ]",
        };
        self.line(format_args!(
            "{} {}.{}",
            tag, test_case.suite_name, test_case.test_name
        ));
    }

    fn test_case_disabled(&self, test_case: &TestCase) {
        self.line(format_args!(
            "[ DISABLED ] {}.{}",
            test_case.suite_name, test_case.test_name
        ));
    }

    fn test_case_expect(&self, test_case: &TestCase, expectation: &TestExpectation<'_>) {
        if expectation.success && !self.verbose {
            return;
        }

        self.line(format_args!(
            "{}:{}: {}",
            test_case.file_name,
            expectation.line_number,
            if expectation.success {
                "Success"
            } else {
                "Failure"
            }
        ));
        self.line(format_args!("      Expected: {}", expectation.expression));
        self.line(format_args!(
            "        Actual: {}",
            expectation.evaluated_expression
        ));
    }
}
