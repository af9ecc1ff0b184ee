/// Records a successful expectation.
///
/// Only has an effect on event handlers that show passing expectations.
#[macro_export]
macro_rules! succeed {
    () => {
        $crate::export::expect_simple(
            $crate::export::SUCCESS,
            $crate::export::SUCCESS,
            ::core::line!(),
            true,
        );
    };
}

/// Fails the current test and returns from the enclosing function.
#[macro_export]
macro_rules! fail {
    () => {{
        $crate::export::expect_simple(
            $crate::export::FAILURE_EXPRESSION,
            $crate::export::FAILURE_EVALUATED,
            ::core::line!(),
            false,
        );
        return;
    }};
}

/// Fails the current test and carries on.
#[macro_export]
macro_rules! add_failure {
    () => {
        $crate::export::expect_simple(
            $crate::export::FAILURE_EXPRESSION,
            $crate::export::FAILURE_EVALUATED,
            ::core::line!(),
            false,
        );
    };
}

/// Skips the current test and returns from the enclosing function.
///
/// A test that already failed stays failed.
#[macro_export]
macro_rules! skip {
    () => {{
        $crate::export::skip(::core::line!());
        return;
    }};
}

/// [`expect_true!`](crate::expect_true) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_true {
    ($($args:tt)*) => {
        $crate::expect_true!($($args)*)
    };
}

/// [`expect_false!`](crate::expect_false) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_false {
    ($($args:tt)*) => {
        $crate::expect_false!($($args)*)
    };
}

/// [`expect_eq!`](crate::expect_eq) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_eq {
    ($($args:tt)*) => {
        $crate::expect_eq!($($args)*)
    };
}

/// [`expect_ne!`](crate::expect_ne) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_ne {
    ($($args:tt)*) => {
        $crate::expect_ne!($($args)*)
    };
}

/// [`expect_lt!`](crate::expect_lt) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_lt {
    ($($args:tt)*) => {
        $crate::expect_lt!($($args)*)
    };
}

/// [`expect_le!`](crate::expect_le) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_le {
    ($($args:tt)*) => {
        $crate::expect_le!($($args)*)
    };
}

/// [`expect_gt!`](crate::expect_gt) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_gt {
    ($($args:tt)*) => {
        $crate::expect_gt!($($args)*)
    };
}

/// [`expect_ge!`](crate::expect_ge) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_ge {
    ($($args:tt)*) => {
        $crate::expect_ge!($($args)*)
    };
}

/// [`expect_near!`](crate::expect_near) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_near {
    ($($args:tt)*) => {
        $crate::expect_near!($($args)*)
    };
}

/// [`expect_float_eq!`](crate::expect_float_eq) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_float_eq {
    ($($args:tt)*) => {
        $crate::expect_float_eq!($($args)*)
    };
}

/// [`expect_double_eq!`](crate::expect_double_eq) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_double_eq {
    ($($args:tt)*) => {
        $crate::expect_double_eq!($($args)*)
    };
}

/// [`expect_streq!`](crate::expect_streq) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_streq {
    ($($args:tt)*) => {
        $crate::expect_streq!($($args)*)
    };
}

/// [`expect_strne!`](crate::expect_strne) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_expect_strne {
    ($($args:tt)*) => {
        $crate::expect_strne!($($args)*)
    };
}

/// [`assert_true!`](crate::assert_true) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_true {
    ($($args:tt)*) => {
        $crate::assert_true!($($args)*)
    };
}

/// [`assert_false!`](crate::assert_false) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_false {
    ($($args:tt)*) => {
        $crate::assert_false!($($args)*)
    };
}

/// [`assert_eq!`](crate::assert_eq) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_eq {
    ($($args:tt)*) => {
        $crate::assert_eq!($($args)*)
    };
}

/// [`assert_ne!`](crate::assert_ne) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_ne {
    ($($args:tt)*) => {
        $crate::assert_ne!($($args)*)
    };
}

/// [`assert_lt!`](crate::assert_lt) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_lt {
    ($($args:tt)*) => {
        $crate::assert_lt!($($args)*)
    };
}

/// [`assert_le!`](crate::assert_le) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_le {
    ($($args:tt)*) => {
        $crate::assert_le!($($args)*)
    };
}

/// [`assert_gt!`](crate::assert_gt) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_gt {
    ($($args:tt)*) => {
        $crate::assert_gt!($($args)*)
    };
}

/// [`assert_ge!`](crate::assert_ge) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_ge {
    ($($args:tt)*) => {
        $crate::assert_ge!($($args)*)
    };
}

/// [`assert_near!`](crate::assert_near) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_near {
    ($($args:tt)*) => {
        $crate::assert_near!($($args)*)
    };
}

/// [`assert_float_eq!`](crate::assert_float_eq) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_float_eq {
    ($($args:tt)*) => {
        $crate::assert_float_eq!($($args)*)
    };
}

/// [`assert_double_eq!`](crate::assert_double_eq) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_double_eq {
    ($($args:tt)*) => {
        $crate::assert_double_eq!($($args)*)
    };
}

/// [`assert_streq!`](crate::assert_streq) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_streq {
    ($($args:tt)*) => {
        $crate::assert_streq!($($args)*)
    };
}

/// [`assert_strne!`](crate::assert_strne) that is also checked at compile time inside a
/// [`const_test`](crate::const_test).
#[macro_export]
macro_rules! const_assert_strne {
    ($($args:tt)*) => {
        $crate::assert_strne!($($args)*)
    };
}
