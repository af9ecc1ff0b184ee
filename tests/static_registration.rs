//! Tests declared with the attributes are linked into the global framework and run by
//! `run_all_tests`. Runs without the libtest harness, like a test program on a device would.

use std::sync::atomic::{AtomicUsize, Ordering};

use unit_test::{
    const_assert_lt, const_expect_eq, const_expect_float_eq, const_expect_near, const_expect_streq,
    expect_eq, Fixture, Framework, RunTestsSummary, TestResult,
};

use crate::common::{Event, Recorder};

mod common;

static RECORDER: Recorder = Recorder::new();
static SUITE_SET_UPS: AtomicUsize = AtomicUsize::new(0);
static SUITE_TEAR_DOWNS: AtomicUsize = AtomicUsize::new(0);

#[unit_test::test(Math)]
fn AddsTwoNumbers() {
    expect_eq!(2 + 2, 4);
}

#[unit_test::test(Math)]
fn WrongAnswer() {
    expect_eq!(2 + 2, 5);
    unit_test::assert_true!(false);
    unit_test::fail!();
}

#[unit_test::test(Math)]
fn DISABLED_Slow() {
    unit_test::fail!();
}

struct Counter {
    count: u32,
}

impl Fixture for Counter {
    fn new() -> Self {
        Counter { count: 0 }
    }

    fn set_up(&mut self) {
        self.count += 1;
    }

    fn set_up_test_suite() {
        SUITE_SET_UPS.fetch_add(1, Ordering::Relaxed);
    }

    fn tear_down_test_suite() {
        SUITE_TEAR_DOWNS.fetch_add(1, Ordering::Relaxed);
    }
}

#[unit_test::test_f(Counter)]
fn StartsAtOne(counter: &mut Counter) {
    expect_eq!(counter.count, 1);
    counter.count = 100;
}

#[unit_test::test_f(Counter)]
fn IsFreshEveryTime(counter: &mut Counter) {
    expect_eq!(counter.count, 1);
    counter.count = 100;
}

#[unit_test::const_test(Const)]
fn Arithmetic() {
    const_expect_eq!(2 + 2, 4);
    const_assert_lt!(1, 2);
    const_expect_near!(10, 12, 2);
    const_expect_float_eq!(0.5 + 0.25, 0.75);
    unit_test::const_expect_streq!("const", "const");
    const_expect_streq!("a", "a");
}

#[unit_test::test(Skip)]
fn NotYet() {
    unit_test::skip!();
}

fn main() {
    unit_test::register_event_handler(Some(&RECORDER));

    assert_eq!(Framework::get().tests().count(), 7);
    assert_eq!(unit_test::run_all_tests(), 1);

    let mut cases = RECORDER.cases();
    cases.sort();
    let mut expected = vec![
        "start Math.AddsTwoNumbers",
        "end Math.AddsTwoNumbers Success",
        "start Math.WrongAnswer",
        "end Math.WrongAnswer Failure",
        "disabled Math.DISABLED_Slow",
        "start Counter.StartsAtOne",
        "end Counter.StartsAtOne Success",
        "start Counter.IsFreshEveryTime",
        "end Counter.IsFreshEveryTime Success",
        "start Const.Arithmetic",
        "end Const.Arithmetic Success",
        "start Skip.NotYet",
        "end Skip.NotYet Skipped",
    ];
    expected.sort();
    assert_eq!(cases, expected);

    assert_eq!(
        Framework::get().summary(),
        RunTestsSummary {
            passed_tests: 4,
            failed_tests: 1,
            skipped_tests: 1,
            disabled_tests: 1,
        }
    );

    let wrong_answer = RECORDER
        .expectations()
        .into_iter()
        .filter(|e| e.test == "Math.WrongAnswer")
        .collect::<Vec<_>>();
    assert_eq!(wrong_answer.len(), 2);
    assert!(wrong_answer.iter().all(|e| !e.success));

    let arithmetic = RECORDER
        .expectations()
        .into_iter()
        .filter(|e| e.test == "Const.Arithmetic")
        .collect::<Vec<_>>();
    assert_eq!(arithmetic.len(), 6);
    assert!(arithmetic.iter().all(|e| e.success));
    assert_eq!(arithmetic[0].expression, "2 + 2 == 4");

    assert!(SUITE_SET_UPS.load(Ordering::Relaxed) >= 1);
    assert_eq!(
        SUITE_SET_UPS.load(Ordering::Relaxed),
        SUITE_TEAR_DOWNS.load(Ordering::Relaxed)
    );

    let ends = RECORDER
        .events()
        .into_iter()
        .filter(|event| matches!(event, Event::CaseEnd(_, TestResult::Failure)))
        .count();
    assert_eq!(ends, 1);

    // a second run starts from zero
    assert_eq!(unit_test::run_all_tests(), 1);
    assert_eq!(Framework::get().summary().passed_tests, 4);

    println!("static registration: ok");
}
