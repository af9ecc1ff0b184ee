//! Comparators usable in constant evaluation.
//!
//! The runtime expectation macros and the code generated by [`const_test`](crate::const_test)
//! share these, so both paths reach the same verdict for the same operands.

/// Tolerance of `float_eq`: four units in the last place around `1.0`.
pub const FLOAT_TOLERANCE: f32 = 4.0 * f32::EPSILON;

/// Tolerance of `double_eq`: four units in the last place around `1.0`.
pub const DOUBLE_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// `|lhs - rhs| <= epsilon`; `false` if any operand is NaN.
pub const fn near_f32(lhs: f32, rhs: f32, epsilon: f32) -> bool {
    let difference = if lhs > rhs { lhs - rhs } else { rhs - lhs };
    difference <= epsilon
}

/// `|lhs - rhs| <= epsilon`; `false` if any operand is NaN.
pub const fn near_f64(lhs: f64, rhs: f64, epsilon: f64) -> bool {
    let difference = if lhs > rhs { lhs - rhs } else { rhs - lhs };
    difference <= epsilon
}

/// Equality of two `f32` within [`FLOAT_TOLERANCE`].
pub const fn float_eq(lhs: f32, rhs: f32) -> bool {
    near_f32(lhs, rhs, FLOAT_TOLERANCE)
}

/// Equality of two `f64` within [`DOUBLE_TOLERANCE`].
pub const fn double_eq(lhs: f64, rhs: f64) -> bool {
    near_f64(lhs, rhs, DOUBLE_TOLERANCE)
}

/// Byte-wise string equality.
pub const fn str_eq(lhs: &str, rhs: &str) -> bool {
    bytes_eq(lhs.as_bytes(), rhs.as_bytes())
}

/// Byte-wise equality of two optional byte strings; `None` only equals `None`.
pub const fn opt_bytes_eq(lhs: Option<&[u8]>, rhs: Option<&[u8]>) -> bool {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => bytes_eq(lhs, rhs),
        (None, None) => true,
        _ => false,
    }
}

const fn bytes_eq(lhs: &[u8], rhs: &[u8]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut i = 0;
    while i < lhs.len() {
        if lhs[i] != rhs[i] {
            return false;
        }
        i += 1;
    }
    true
}
