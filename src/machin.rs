//! Evaluation of pi digits with Machin's formula
//!
//! pi/4 = 4*arctan(1/5) - arctan(1/239)
//!
//! Each arctangent is evaluated from its Taylor series
//!
//! ```math
//! arctan(1/x) = 1/x - 1/(3 x^3) + 1/(5 x^5) - ...
//! ```
//!
//! carried out in fixed-point arithmetic until the terms underflow
//! the digit width to exactly zero.

use crate::FixedPoint;


/// Evaluate arctan(1/x) to the given number of 64-bit digits
///
/// Maintains a running term `1/x^(2k+1)`, shrunk by `x*x` at each
/// half-step; the correction added (or subtracted) is the term
/// divided by the odd denominator of the series. Terms shrink by at
/// least two bits per step, so the loop always terminates when the
/// term underflows to zero.
///
/// The result is exact except for the final digit, which absorbs the
/// truncation of every intermediate division.
///
/// # Panics
///
/// Panics if `x < 2` (1/x must lie below one) or if `x*x` overflows
/// a u64.
///
/// # Example
///
/// ```
/// use machin_pi::arctan_recip;
///
/// // arctan(1/2) = 0.46364760900080611... just under 0x.8000...
/// let x = arctan_recip(2, 4);
/// assert_eq!(x.digits()[0] >> 60, 0x7);
/// ```
pub fn arctan_recip(x: u64, precision: usize) -> FixedPoint {
    assert!(x >= 2, "arctangent series requires an argument of at least 2");
    let x_squared = x.checked_mul(x).expect("arctangent argument overflow");

    let mut result = FixedPoint::reciprocal(x, precision);
    let mut term = result.clone();
    let mut correction = FixedPoint::zero(precision);
    let mut denominator: u64 = 1;

    while !term.is_zero() {
        denominator += 2;
        term /= x_squared;
        correction.set_quotient(&term, denominator);
        result -= &correction;

        denominator += 2;
        term /= x_squared;
        correction.set_quotient(&term, denominator);
        result += &correction;
    }

    result
}

/// The fraction of pi below its integer part, at the default precision
///
/// The digit count is `DEFAULT_PRECISION`, configurable at build time
/// through the `MACHIN_PI_DEFAULT_PRECISION` environment variable.
pub fn pi() -> FixedPoint {
    pi_with_precision(crate::DEFAULT_PRECISION)
}

/// The fraction of pi below its integer part, at the given precision
///
/// Combines the two arctangents of Machin's identity:
/// `(4*arctan(1/5) - arctan(1/239)) * 4`. Both scalings stay inside
/// the digit width except the last, whose escaping carry is exactly
/// pi's integer part of 3 and is dropped here.
///
/// Only the final digit carries truncation error; every digit above
/// it is exact.
///
/// # Example
///
/// ```
/// use machin_pi::pi_with_precision;
///
/// let p = pi_with_precision(2);
/// assert_eq!(p.digits()[0], 0x243f6a8885a308d3);
/// ```
pub fn pi_with_precision(precision: usize) -> FixedPoint {
    let mut p = arctan_recip(5, precision);
    let carry = p.scale(4);
    debug_assert_eq!(carry, 0, "4*arctan(1/5) is below one");

    p -= &arctan_recip(239, precision);

    let integer_part = p.scale(4);
    debug_assert_eq!(integer_part, 3, "pi's integer part");
    p
}
