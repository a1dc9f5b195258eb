//!
//! Scalar long division for fixed-point digit slices
//!

use crate::digit::{Digit, DoubleDigit, DIGIT_BITS};

use num_integer::div_rem;


/// Divide `digits[start..]` in place by the scalar `divisor`
///
/// Classic long division from the most significant digit down. The
/// running remainder stays below `divisor`, so every quotient digit
/// fits. Digits before `start` are not touched and must already be
/// zero.
#[inline]
pub(crate) fn div_assign_digit_slice(digits: &mut [Digit], divisor: Digit, start: usize) {
    debug_assert_ne!(divisor, 0);
    debug_assert!(digits[..start].iter().all(|&d| d == 0));

    let mut rem: Digit = 0;
    for digit in digits[start..].iter_mut() {
        let acc = ((rem as DoubleDigit) << DIGIT_BITS) | *digit as DoubleDigit;
        let (q, r) = div_rem(acc, divisor as DoubleDigit);
        *digit = q as Digit;
        rem = r as Digit;
    }
}


/// Write `src[start..] / divisor` into `dst[start..]`
///
/// Same long division as [`div_assign_digit_slice`], reading from
/// `src`. The caller is responsible for clearing `dst[..start]`;
/// stale digits left there would corrupt the quotient.
#[inline]
pub(crate) fn div_digit_slice_into(src: &[Digit], divisor: Digit, start: usize, dst: &mut [Digit]) {
    debug_assert_eq!(src.len(), dst.len());
    debug_assert_ne!(divisor, 0);
    debug_assert!(src[..start].iter().all(|&d| d == 0));

    let mut rem: Digit = 0;
    for (digit, out) in src[start..].iter().zip(dst[start..].iter_mut()) {
        let acc = ((rem as DoubleDigit) << DIGIT_BITS) | *digit as DoubleDigit;
        let (q, r) = div_rem(acc, divisor as DoubleDigit);
        *out = q as Digit;
        rem = r as Digit;
    }
}
