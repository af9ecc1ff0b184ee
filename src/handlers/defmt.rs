use crate::event::{
    EventHandler, ProgramSummary, RunTestsSummary, TestCase, TestExpectation, TestResult,
    TestSuite,
};

/// Reports a run through `defmt`, for targets that ship their output over a defmt transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefmtEventHandler;

impl EventHandler for DefmtEventHandler {
    fn test_program_start(&self, program_summary: &ProgramSummary) {
        defmt::info!(
            "[==========] Running {=u32} test(s) from {=u32} test suite(s).",
            program_summary.tests_to_run,
            program_summary.test_suites
        );
    }

    fn test_program_end(&self, program_summary: &ProgramSummary) {
        let summary = &program_summary.tests_summary;
        defmt::info!(
            "[==========] {=u32} test(s) from {=u32} test suite(s) ran.",
            summary.ran_tests(),
            program_summary.test_suites
        );
        defmt::info!("[  PASSED  ] {=u32} test(s).", summary.passed_tests);
        if summary.skipped_tests != 0 {
            defmt::info!("[  SKIPPED ] {=u32} test(s).", summary.skipped_tests);
        }
        if summary.disabled_tests != 0 {
            defmt::info!("[ DISABLED ] {=u32} test(s).", summary.disabled_tests);
        }
        if summary.failed_tests != 0 {
            defmt::error!("[  FAILED  ] {=u32} test(s).", summary.failed_tests);
        }
    }

    fn environments_set_up_end(&self) {
        defmt::info!("[----------] Global test environments setup.");
    }

    fn environments_tear_down_end(&self) {
        defmt::info!("[----------] Global test environments tear-down.");
    }

    fn test_suite_start(&self, test_suite: &TestSuite) {
        defmt::info!(
            "[----------] {=u32} test(s) from {=str}",
            test_suite.test_to_run_count,
            test_suite.name
        );
    }

    fn test_suite_end(&self, test_suite: &TestSuite) {
        defmt::info!(
            "[----------] {=u32} test(s) from {=str} ran.",
            test_suite.test_to_run_count,
            test_suite.name
        );
    }

    fn run_all_tests_start(&self) {}

    fn run_all_tests_end(&self, _: &RunTestsSummary) {}

    fn test_case_start(&self, test_case: &TestCase) {
        defmt::info!(
            "[ RUN      ] {=str}.{=str}",
            test_case.suite_name,
            test_case.test_name
        );
    }

    fn test_case_end(&self, test_case: &TestCase, result: TestResult) {
        match result {
            TestResult::Success => defmt::info!(
                "[       OK ] {=str}.{=str}",
                test_case.suite_name,
                test_case.test_name
            ),
            TestResult::Failure => defmt::error!(
                "[  FAILED  ] {=str}.{=str}",
                test_case.suite_name,
                test_case.test_name
            ),
            TestResult::Skipped => defmt::info!(
                "[  SKIPPED ] {=str}.{=str}",
                test_case.suite_name,
                test_case.test_name
            ),
        }
    }

    fn test_case_disabled(&self, test_case: &TestCase) {
        defmt::info!(
            "[ DISABLED ] {=str}.{=str}",
            test_case.suite_name,
            test_case.test_name
        );
    }

    fn test_case_expect(&self, test_case: &TestCase, expectation: &TestExpectation<'_>) {
        if expectation.success {
            defmt::debug!(
                "{=str}:{=u32}: Success\n      Expected: {=str}\n        Actual: {=str}",
                test_case.file_name,
                expectation.line_number,
                expectation.expression,
                expectation.evaluated_expression
            );
        } else {
            defmt::error!(
                "{=str}:{=u32}: Failure\n      Expected: {=str}\n        Actual: {=str}",
                test_case.file_name,
                expectation.line_number,
                expectation.expression,
                expectation.evaluated_expression
            );
        }
    }
}
