//!
//! Small-scalar multiplication for fixed-point digit slices
//!

use crate::digit::{Digit, DoubleDigit, split_double};


/// Multiply `digits[hi..]` in place by the scalar `k`
///
/// Walks from the least significant digit up to `hi` carrying in
/// double-width arithmetic; every digit before `hi` must be zero.
/// Passing `hi` one position above the first nonzero digit leaves
/// room for the last carry, which is strictly less than `k`.
///
/// Returns the carry out of position `hi`: the integer part of the
/// product when the nonzero digits start at position 0, and zero
/// otherwise.
#[inline]
pub(crate) fn mul_assign_digit_slice(digits: &mut [Digit], k: Digit, hi: usize) -> Digit {
    debug_assert!(digits[..hi].iter().all(|&d| d == 0));

    let mut carry: Digit = 0;
    for i in (hi..digits.len()).rev() {
        let product = digits[i] as DoubleDigit * k as DoubleDigit + carry as DoubleDigit;
        let (high, low) = split_double(product);
        digits[i] = low;
        carry = high;
    }
    carry
}
