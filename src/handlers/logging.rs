use super::{suites, tests};
use crate::event::{
    EventHandler, ProgramSummary, RunTestsSummary, TestCase, TestExpectation, TestResult,
    TestSuite,
};

/// Reports a run through the `log` facade.
///
/// Progress is logged at `info` level, failures at `error` level and passing expectations at
/// `debug` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn test_program_start(&self, program_summary: &ProgramSummary) {
        log::info!(
            "[==========] Running {} {} from {} {}.",
            program_summary.tests_to_run,
            tests(program_summary.tests_to_run),
            program_summary.test_suites,
            suites(program_summary.test_suites),
        );
    }

    fn test_program_end(&self, program_summary: &ProgramSummary) {
        let summary = &program_summary.tests_summary;
        log::info!(
            "[==========] {} {} from {} {} ran.",
            summary.ran_tests(),
            tests(summary.ran_tests()),
            program_summary.test_suites,
            suites(program_summary.test_suites),
        );
        log::info!(
            "[  PASSED  ] {} {}.",
            summary.passed_tests,
            tests(summary.passed_tests)
        );
        if summary.skipped_tests != 0 {
            log::info!(
                "[  SKIPPED ] {} {}.",
                summary.skipped_tests,
                tests(summary.skipped_tests)
            );
        }
        if summary.disabled_tests != 0 {
            log::info!(
                "[ DISABLED ] {} {}.",
                summary.disabled_tests,
                tests(summary.disabled_tests)
            );
        }
        if summary.failed_tests != 0 {
            log::error!(
                "[  FAILED  ] {} {}.",
                summary.failed_tests,
                tests(summary.failed_tests)
            );
        }
    }

    fn environments_set_up_end(&self) {
        log::info!("[----------] Global test environments setup.");
    }

    fn environments_tear_down_end(&self) {
        log::info!("[----------] Global test environments tear-down.");
    }

    fn test_suite_start(&self, test_suite: &TestSuite) {
        log::info!(
            "[----------] {} {} from {}",
            test_suite.test_to_run_count,
            tests(test_suite.test_to_run_count),
            test_suite.name
        );
    }

    fn test_suite_end(&self, test_suite: &TestSuite) {
        log::info!(
            "[----------] {} {} from {} ran.",
            test_suite.test_to_run_count,
            tests(test_suite.test_to_run_count),
            test_suite.name
        );
    }

    fn run_all_tests_start(&self) {}

    fn run_all_tests_end(&self, _: &RunTestsSummary) {}

    fn test_case_start(&self, test_case: &TestCase) {
        log::info!(
            "[ RUN      ] {}.{}",
            test_case.suite_name,
            test_case.test_name
        );
    }

    fn test_case_end(&self, test_case: &TestCase, result: TestResult) {
        match result {
            TestResult::Success => log::info!(
                "[       OK ] {}.{}",
                test_case.suite_name,
                test_case.test_name
            ),
            TestResult::Failure => log::error!(
                "[  FAILED  ] {}.{}",
                test_case.suite_name,
                test_case.test_name
            ),
            TestResult::Skipped => log::info!(
                "[  SKIPPED ] {}.{}",
                test_case.suite_name,
                test_case.test_name
            ),
        }
    }

    fn test_case_disabled(&self, test_case: &TestCase) {
        log::info!(
            "[ DISABLED ] {}.{}",
            test_case.suite_name,
            test_case.test_name
        );
    }

    fn test_case_expect(&self, test_case: &TestCase, expectation: &TestExpectation<'_>) {
        if expectation.success {
            log::debug!(
                "{}:{}: Success\n      Expected: {}\n        Actual: {}",
                test_case.file_name,
                expectation.line_number,
                expectation.expression,
                expectation.evaluated_expression
            );
        } else {
            log::error!(
                "{}:{}: Failure\n      Expected: {}\n        Actual: {}",
                test_case.file_name,
                expectation.line_number,
                expectation.expression,
                expectation.evaluated_expression
            );
        }
    }
}
