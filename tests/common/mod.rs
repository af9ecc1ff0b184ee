#![allow(dead_code)]

use std::{
    fmt::Write as _,
    sync::{Mutex, MutexGuard},
};

use unit_test::{
    EventHandler, Fixture, FixtureTest, Framework, ProgramSummary, RunTestsSummary, Test,
    TestCase, TestExpectation, TestInfo, TestResult, TestSuite,
};

/// Expectations report to whichever framework is running, so tests that run one take turns.
pub fn serial() -> MutexGuard<'static, ()> {
    static SERIAL: Mutex<()> = Mutex::new(());
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

pub fn framework() -> &'static Framework {
    Box::leak(Box::new(Framework::new()))
}

pub fn register(
    framework: &Framework,
    suite: &'static str,
    name: &'static str,
    body: fn(&mut Test),
) {
    register_f::<Test>(framework, suite, name, body)
}

pub fn register_f<F: Fixture + 'static>(
    framework: &Framework,
    suite: &'static str,
    name: &'static str,
    body: fn(&mut F),
) {
    let factory: &'static FixtureTest<F> = Box::leak(Box::new(FixtureTest::new(body)));
    let info = Box::leak(Box::new(TestInfo::new(suite, name, file!(), 1, factory)));
    framework.register_test(info).unwrap();
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    ProgramStart(ProgramSummary),
    ProgramEnd(ProgramSummary),
    EnvironmentsSetUpEnd,
    EnvironmentsTearDownEnd,
    SuiteStart(TestSuite),
    SuiteEnd(TestSuite),
    RunAllTestsStart,
    RunAllTestsEnd(RunTestsSummary),
    CaseStart(String),
    CaseEnd(String, TestResult),
    CaseDisabled(String),
    Expect(Expectation),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expectation {
    pub test: String,
    pub expression: String,
    pub evaluated: String,
    pub line: u32,
    pub success: bool,
}

fn name(test_case: &TestCase) -> String {
    let mut name = String::new();
    let _ = write!(name, "{}.{}", test_case.suite_name, test_case.test_name);
    name
}

/// Records every event it receives.
pub struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub const fn new() -> Self {
        Recorder {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn leak() -> &'static Recorder {
        Box::leak(Box::new(Recorder::new()))
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn expectations(&self) -> Vec<Expectation> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Expect(expectation) => Some(expectation),
                _ => None,
            })
            .collect()
    }

    /// Every case event, as `"<tag> Suite.Case"`.
    pub fn cases(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::CaseStart(test) => Some(format!("start {}", test)),
                Event::CaseEnd(test, result) => Some(format!("end {} {:?}", test, result)),
                Event::CaseDisabled(test) => Some(format!("disabled {}", test)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl EventHandler for Recorder {
    fn test_program_start(&self, program_summary: &ProgramSummary) {
        self.push(Event::ProgramStart(*program_summary));
    }

    fn test_program_end(&self, program_summary: &ProgramSummary) {
        self.push(Event::ProgramEnd(*program_summary));
    }

    fn environments_set_up_end(&self) {
        self.push(Event::EnvironmentsSetUpEnd);
    }

    fn environments_tear_down_end(&self) {
        self.push(Event::EnvironmentsTearDownEnd);
    }

    fn test_suite_start(&self, test_suite: &TestSuite) {
        self.push(Event::SuiteStart(*test_suite));
    }

    fn test_suite_end(&self, test_suite: &TestSuite) {
        self.push(Event::SuiteEnd(*test_suite));
    }

    fn run_all_tests_start(&self) {
        self.push(Event::RunAllTestsStart);
    }

    fn run_all_tests_end(&self, run_tests_summary: &RunTestsSummary) {
        self.push(Event::RunAllTestsEnd(*run_tests_summary));
    }

    fn test_case_start(&self, test_case: &TestCase) {
        self.push(Event::CaseStart(name(test_case)));
    }

    fn test_case_end(&self, test_case: &TestCase, result: TestResult) {
        self.push(Event::CaseEnd(name(test_case), result));
    }

    fn test_case_disabled(&self, test_case: &TestCase) {
        self.push(Event::CaseDisabled(name(test_case)));
    }

    fn test_case_expect(&self, test_case: &TestCase, expectation: &TestExpectation<'_>) {
        self.push(Event::Expect(Expectation {
            test: name(test_case),
            expression: expectation.expression.to_string(),
            evaluated: expectation.evaluated_expression.to_string(),
            line: expectation.line_number,
            success: expectation.success,
        }));
    }
}
