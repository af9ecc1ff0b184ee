//! Items the code generated by `unit-test-macros` refers to.

pub use linkme;

pub use crate::{
    const_eval::{double_eq, float_eq, near_f32, near_f64, opt_bytes_eq, str_eq},
    expect::{
        expect_binary, expect_bool, expect_double_eq, expect_float_eq, expect_near,
        expect_simple, expect_str, skip, StrOperand,
    },
    pool::assert_fits,
};

use crate::TestInfo;

/// Every test declared with the test attributes, in link order.
#[linkme::distributed_slice]
pub static TESTS: [TestInfo] = [..];

/// Expression of [`succeed!`](crate::succeed).
pub const SUCCESS: &str = "(success)";

/// Expression of [`fail!`](crate::fail) and [`add_failure!`](crate::add_failure).
pub const FAILURE_EXPRESSION: &str = "(line is not executed)";

/// Evaluated text of [`fail!`](crate::fail) and [`add_failure!`](crate::add_failure).
pub const FAILURE_EVALUATED: &str = "(line was executed)";
