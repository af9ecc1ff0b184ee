use core::{any, mem};

use crate::{Error, Framework};

/// Per-test state and hooks; the Rust counterpart of GoogleTest's `::testing::Test`.
///
/// A fresh fixture is constructed for every test case, inside the memory pool of the framework,
/// and dropped right after the test. The lifecycle of one case is:
///
/// `new` → `set_up` → test body → `tear_down` → drop
///
/// The body does not run if `set_up` skipped the test.
///
/// `set_up_test_suite` runs before the first test of a contiguous group of tests of the same
/// suite, `tear_down_test_suite` after the last one.
///
/// A fixture must fit into [`MEMORY_POOL_SIZE`](crate::config::MEMORY_POOL_SIZE) bytes; a larger
/// one fails to build:
///
/// ```compile_fail,E0080
/// use unit_test::{config::MEMORY_POOL_SIZE, Fixture};
///
/// struct Huge([u8; MEMORY_POOL_SIZE + 1]);
///
/// impl Fixture for Huge {
///     fn new() -> Self {
///         Huge([0; MEMORY_POOL_SIZE + 1])
///     }
/// }
///
/// #[unit_test::test_f(Huge)]
/// fn too_big(_: &mut Huge) {}
/// # fn main() {}
/// ```
pub trait Fixture: Sized {
    /// Constructs the fixture.
    fn new() -> Self;

    /// Runs before the test body.
    fn set_up(&mut self) {}

    /// Runs after the test body, even if it failed an assertion.
    fn tear_down(&mut self) {}

    /// Runs once before the first test of the suite.
    fn set_up_test_suite() {}

    /// Runs once after the last test of the suite.
    fn tear_down_test_suite() {}
}

/// The fixture of tests declared with [`test`](crate::test); holds nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Test;

impl Fixture for Test {
    fn new() -> Self {
        Test
    }
}

/// Constructs and runs the fixture of one test.
///
/// Every registered [`TestInfo`](crate::TestInfo) refers to one factory. [`FixtureTest`] is the
/// implementation used by the test attributes.
pub trait TestFactory: Sync {
    /// Constructs the fixture in the memory pool of `framework`, runs the test and drops the
    /// fixture again.
    fn create_and_run(&self, framework: &Framework) -> Result<(), Error>;

    /// Runs the suite set up hook of the fixture type.
    fn set_up_test_suite(&self);

    /// Runs the suite tear down hook of the fixture type.
    fn tear_down_test_suite(&self);

    /// Size in bytes of the fixture in the memory pool.
    fn fixture_size(&self) -> usize;

    /// Name of the fixture type; all tests of a suite share it.
    fn fixture_type(&self) -> &'static str;
}

/// A test body that runs against fixture `F`.
pub struct FixtureTest<F> {
    body: fn(&mut F),
}

impl<F> FixtureTest<F> {
    /// Creates the factory for `body`.
    pub const fn new(body: fn(&mut F)) -> Self {
        Self { body }
    }
}

impl<F: Fixture> TestFactory for FixtureTest<F> {
    fn create_and_run(&self, framework: &Framework) -> Result<(), Error> {
        framework.create_and_run_test(self.body)
    }

    fn set_up_test_suite(&self) {
        F::set_up_test_suite()
    }

    fn tear_down_test_suite(&self) {
        F::tear_down_test_suite()
    }

    fn fixture_size(&self) -> usize {
        mem::size_of::<F>()
    }

    fn fixture_type(&self) -> &'static str {
        any::type_name::<F>()
    }
}
