use core::cell::Cell;

use critical_section::{CriticalSection, Mutex};

use crate::{event::TestCase, fixture::TestFactory, Error};

/// Marker that disables a suite or a test case when it prefixes its name.
pub const DISABLED_PREFIX: &str = "DISABLED_";

/// Static description of a registered test case.
///
/// Descriptors are created once, live for the whole program and are linked into the registry of
/// a [`Framework`](crate::Framework). They are usually generated by the [`test`](crate::test) and
/// [`test_f`](crate::test_f) attributes.
///
/// `TestInfo::new` validates the names; used in a `static` initializer, an invalid name fails the
/// build:
///
/// ```compile_fail
/// use unit_test::{FixtureTest, Test, TestInfo};
///
/// fn body(_: &mut Test) {}
///
/// static FACTORY: FixtureTest<Test> = FixtureTest::new(body);
/// static INFO: TestInfo = TestInfo::new("Bad_Suite", "Case", file!(), line!(), &FACTORY);
/// ```
pub struct TestInfo {
    suite_name: &'static str,
    test_name: &'static str,
    file_name: &'static str,
    line: u32,
    factory: &'static dyn TestFactory,
    next: Mutex<Cell<Option<&'static TestInfo>>>,
    linked: Mutex<Cell<bool>>,
}

impl TestInfo {
    /// Describes test `suite_name.test_name`, defined at `file_name:line`.
    ///
    /// # Panics
    ///
    /// Panics (at compile time, in a `static`) if either name is empty or if the suite name
    /// contains an underscore other than in a leading `DISABLED_`.
    pub const fn new(
        suite_name: &'static str,
        test_name: &'static str,
        file_name: &'static str,
        line: u32,
        factory: &'static dyn TestFactory,
    ) -> Self {
        assert!(!suite_name.is_empty(), "test suite names must not be empty");
        assert!(!test_name.is_empty(), "test names must not be empty");
        assert!(
            is_valid_suite_name(suite_name),
            "test suite names must not contain underscores"
        );

        Self {
            suite_name,
            test_name,
            file_name,
            line,
            factory,
            next: Mutex::new(Cell::new(None)),
            linked: Mutex::new(Cell::new(false)),
        }
    }

    /// Name of the suite.
    pub fn suite_name(&self) -> &'static str {
        self.suite_name
    }

    /// Name of the test case.
    pub fn test_name(&self) -> &'static str {
        self.test_name
    }

    /// File the test is defined in.
    pub fn file_name(&self) -> &'static str {
        self.file_name
    }

    /// Line the test is defined at.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The factory that constructs and runs the fixture of this test.
    pub fn factory(&self) -> &'static dyn TestFactory {
        self.factory
    }

    /// Whether the test runs at all; `DISABLED_` on the suite or case name turns it off.
    pub fn enabled(&self) -> bool {
        !self.suite_name.starts_with(DISABLED_PREFIX) && !self.test_name.starts_with(DISABLED_PREFIX)
    }

    /// The identity reported to event handlers.
    pub fn test_case(&self) -> TestCase {
        TestCase {
            suite_name: self.suite_name,
            test_name: self.test_name,
            file_name: self.file_name,
        }
    }

    fn next(&self, cs: CriticalSection<'_>) -> Option<&'static TestInfo> {
        self.next.borrow(cs).get()
    }

    fn is_same_test(&self, other: &TestInfo) -> bool {
        self.suite_name == other.suite_name && self.test_name == other.test_name
    }
}

impl core::fmt::Debug for TestInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TestInfo")
            .field("suite_name", &self.suite_name)
            .field("test_name", &self.test_name)
            .field("file_name", &self.file_name)
            .field("line", &self.line)
            .finish()
    }
}

/// Intrusive list of descriptors, in registration order.
pub(crate) struct Registry {
    head: Option<&'static TestInfo>,
    tail: Option<&'static TestInfo>,
}

impl Registry {
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }

    /// Appends `test`.
    ///
    /// Rejects a second test with the same suite and case name, a suite that would mix fixture
    /// types and a descriptor that is already linked into a registry.
    pub(crate) fn push(
        &mut self,
        cs: CriticalSection<'_>,
        test: &'static TestInfo,
    ) -> Result<(), Error> {
        let mut current = self.head;
        while let Some(registered) = current {
            if registered.is_same_test(test) {
                return Err(Error::DuplicateTest {
                    suite_name: test.suite_name,
                    test_name: test.test_name,
                });
            }
            if registered.suite_name == test.suite_name
                && registered.factory.fixture_type() != test.factory.fixture_type()
            {
                return Err(Error::FixtureMismatch {
                    suite_name: test.suite_name,
                    test_name: test.test_name,
                });
            }
            current = registered.next(cs);
        }

        // the `next` link can only belong to one list
        if test.linked.borrow(cs).replace(true) {
            return Err(Error::AlreadyLinked {
                suite_name: test.suite_name,
                test_name: test.test_name,
            });
        }

        test.next.borrow(cs).set(None);
        match self.tail {
            Some(tail) => tail.next.borrow(cs).set(Some(test)),
            None => self.head = Some(test),
        }
        self.tail = Some(test);
        Ok(())
    }

    pub(crate) fn iter(&self) -> Tests {
        Tests { next: self.head }
    }
}

/// Iterator over registered tests, in registration order.
#[derive(Clone)]
pub struct Tests {
    next: Option<&'static TestInfo>,
}

impl Iterator for Tests {
    type Item = &'static TestInfo;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = critical_section::with(|cs| current.next(cs));
        Some(current)
    }
}

/// Suite names must not contain `_`, except in a leading `DISABLED_`.
pub const fn is_valid_suite_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    let prefix = DISABLED_PREFIX.as_bytes();

    let mut i = if starts_with(bytes, prefix) {
        prefix.len()
    } else {
        0
    };
    if i == bytes.len() {
        return false;
    }

    while i < bytes.len() {
        if bytes[i] == b'_' {
            return false;
        }
        i += 1;
    }
    true
}

const fn starts_with(bytes: &[u8], prefix: &[u8]) -> bool {
    if bytes.len() < prefix.len() {
        return false;
    }

    let mut i = 0;
    while i < prefix.len() {
        if bytes[i] != prefix[i] {
            return false;
        }
        i += 1;
    }
    true
}
