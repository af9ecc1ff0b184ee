use core::fmt;

/// Errors reported by the [`Framework`](crate::Framework).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A test with the same suite and case name is already registered.
    DuplicateTest {
        /// Suite name of the rejected test.
        suite_name: &'static str,
        /// Case name of the rejected test.
        test_name: &'static str,
    },
    /// A test of the same suite is already registered with a different fixture type.
    FixtureMismatch {
        /// Suite name of the rejected test.
        suite_name: &'static str,
        /// Case name of the rejected test.
        test_name: &'static str,
    },
    /// The descriptor is already registered with a framework.
    AlreadyLinked {
        /// Suite name of the rejected test.
        suite_name: &'static str,
        /// Case name of the rejected test.
        test_name: &'static str,
    },
    /// `run_all_tests` was called while a run was already in progress.
    RunInProgress,
    /// A fixture was requested while another one is still alive in the memory pool.
    PoolBusy,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateTest {
                suite_name,
                test_name,
            } => write!(
                f,
                "test `{}.{}` is registered more than once",
                suite_name, test_name
            ),
            Error::FixtureMismatch {
                suite_name,
                test_name,
            } => write!(
                f,
                "test `{}.{}` uses a different fixture than the other tests of its suite",
                suite_name, test_name
            ),
            Error::AlreadyLinked {
                suite_name,
                test_name,
            } => write!(
                f,
                "test `{}.{}` is already registered with a framework",
                suite_name, test_name
            ),
            Error::RunInProgress => f.write_str("a test run is already in progress"),
            Error::PoolBusy => f.write_str("the fixture memory pool is already in use"),
        }
    }
}
