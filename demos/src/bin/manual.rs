use std::process;

use unit_test::{assert_streq, expect_eq, FixtureTest, Framework, Test, TestInfo};

fn adds(_: &mut Test) {
    expect_eq!(2 + 2, 4);
}

fn slow(_: &mut Test) {
    expect_eq!(1, 2);
}

fn not_yet(_: &mut Test) {
    unit_test::skip!();
}

fn null(_: &mut Test) {
    let name: Option<&str> = None;
    assert_streq!(name, "ferris");
    unit_test::add_failure!();
}

static ADDS: FixtureTest<Test> = FixtureTest::new(adds);
static SLOW: FixtureTest<Test> = FixtureTest::new(slow);
static NOT_YET: FixtureTest<Test> = FixtureTest::new(not_yet);
static NULL: FixtureTest<Test> = FixtureTest::new(null);

static TESTS: [TestInfo; 4] = [
    TestInfo::new("Math", "Adds", file!(), line!(), &ADDS),
    TestInfo::new("Math", "DISABLED_Slow", file!(), line!(), &SLOW),
    TestInfo::new("Math", "NotYet", file!(), line!(), &NOT_YET),
    TestInfo::new("Strings", "Null", file!(), line!(), &NULL),
];

static FRAMEWORK: Framework = Framework::new();

fn main() {
    for test in &TESTS {
        if let Err(e) = FRAMEWORK.register_test(test) {
            eprintln!("{}", e);
            process::exit(2);
        }
    }

    FRAMEWORK.register_event_handler(Some(&demos::VERBOSE_PRINTER));
    process::exit(FRAMEWORK.run_all_tests())
}
