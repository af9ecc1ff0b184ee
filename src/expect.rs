//! Runtime evaluation of expectations.
//!
//! The `expect_*!` and `assert_*!` macros expand to calls into this module. Each function checks
//! its operands, renders them into a stack buffer of
//! [`EXPECTATION_BUFFER_SIZE`](crate::config::EXPECTATION_BUFFER_SIZE) bytes and reports the
//! outcome to the framework that is currently running tests.

use core::{
    ffi::CStr,
    fmt::{self, Debug, Write as _},
    ops::Sub,
};

use crate::{config::EXPECTATION_BUFFER_SIZE, const_eval, framework};

/// Rendered operands of an expectation; output that does not fit is dropped.
pub(crate) struct Evaluated {
    buffer: heapless::String<EXPECTATION_BUFFER_SIZE>,
}

impl Evaluated {
    pub(crate) fn new(args: fmt::Arguments<'_>) -> Self {
        let mut evaluated = Self {
            buffer: heapless::String::new(),
        };
        // `write_str` never fails
        let _ = evaluated.write_fmt(args);
        evaluated
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl fmt::Write for Evaluated {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.buffer.push_str(s).is_err() {
            for c in s.chars() {
                if self.buffer.push(c).is_err() {
                    break;
                }
            }
        }
        Ok(())
    }
}

/// Operand of `expect_streq!` and `expect_strne!`.
///
/// `None` stands in for a null string: it only equals another `None` and is displayed as
/// `(null)`.
pub trait StrOperand {
    /// The bytes of the string, without any terminator.
    fn str_bytes(&self) -> Option<&[u8]>;
}

impl StrOperand for str {
    fn str_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl StrOperand for CStr {
    fn str_bytes(&self) -> Option<&[u8]> {
        Some(self.to_bytes())
    }
}

impl<T: StrOperand + ?Sized> StrOperand for &T {
    fn str_bytes(&self) -> Option<&[u8]> {
        (**self).str_bytes()
    }
}

impl<T: StrOperand + ?Sized> StrOperand for Option<&T> {
    fn str_bytes(&self) -> Option<&[u8]> {
        self.and_then(StrOperand::str_bytes)
    }
}

#[cfg(feature = "alloc")]
impl StrOperand for alloc::string::String {
    fn str_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

struct DisplayStr<'a>(Option<&'a [u8]>);

impl fmt::Display for DisplayStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(bytes) => write!(f, "\"{}\"", bytes.escape_ascii()),
            None => f.write_str("(null)"),
        }
    }
}

/// Checks `lhs <op> rhs` with `check`; `op` is only used to render the operands.
pub fn expect_binary<L, R>(
    lhs: &L,
    rhs: &R,
    check: impl FnOnce(&L, &R) -> bool,
    op: &str,
    expression: &str,
    line: u32,
) -> bool
where
    L: Debug + ?Sized,
    R: Debug + ?Sized,
{
    let success = check(lhs, rhs);
    let evaluated = Evaluated::new(format_args!("{:?} {} {:?}", lhs, op, rhs));
    framework::expect(expression, evaluated.as_str(), line, success)
}

/// Checks that `lhs` and `rhs` differ by at most `epsilon`.
///
/// The difference is always taken from the larger operand, so unsigned operands do not wrap.
pub fn expect_near<T>(lhs: T, rhs: T, epsilon: T, expression: &str, line: u32) -> bool
where
    T: PartialOrd + Sub<Output = T> + Copy + Debug,
{
    let difference = if lhs > rhs { lhs - rhs } else { rhs - lhs };
    let success = difference <= epsilon;
    let evaluated = Evaluated::new(format_args!(
        "{:?} within {:?} of {:?}",
        lhs, epsilon, rhs
    ));
    framework::expect(expression, evaluated.as_str(), line, success)
}

/// Checks that two `f32` are equal within four units in the last place.
pub fn expect_float_eq(lhs: f32, rhs: f32, expression: &str, line: u32) -> bool {
    let success = const_eval::float_eq(lhs, rhs);
    let evaluated = Evaluated::new(format_args!("{:?} == {:?}", lhs, rhs));
    framework::expect(expression, evaluated.as_str(), line, success)
}

/// Checks that two `f64` are equal within four units in the last place.
pub fn expect_double_eq(lhs: f64, rhs: f64, expression: &str, line: u32) -> bool {
    let success = const_eval::double_eq(lhs, rhs);
    let evaluated = Evaluated::new(format_args!("{:?} == {:?}", lhs, rhs));
    framework::expect(expression, evaluated.as_str(), line, success)
}

/// Compares two strings byte by byte; succeeds if their equality matches `equal`.
pub fn expect_str<L, R>(lhs: &L, rhs: &R, equal: bool, expression: &str, line: u32) -> bool
where
    L: StrOperand + ?Sized,
    R: StrOperand + ?Sized,
{
    let (lhs, rhs) = (lhs.str_bytes(), rhs.str_bytes());
    let success = const_eval::opt_bytes_eq(lhs, rhs) == equal;
    let op = if equal { "==" } else { "!=" };
    let evaluated = Evaluated::new(format_args!(
        "{} {} {}",
        DisplayStr(lhs),
        op,
        DisplayStr(rhs)
    ));
    framework::expect(expression, evaluated.as_str(), line, success)
}

/// Checks that `value` is `expected`.
pub fn expect_bool(value: bool, expected: bool, expression: &str, line: u32) -> bool {
    let evaluated = Evaluated::new(format_args!("{} is {}", value, expected));
    framework::expect(expression, evaluated.as_str(), line, value == expected)
}

/// Reports an expectation whose texts are already known.
pub fn expect_simple(expression: &str, evaluated: &str, line: u32, success: bool) -> bool {
    framework::expect(expression, evaluated, line, success)
}

/// Marks the current test as skipped.
pub fn skip(line: u32) {
    framework::skip(line)
}
