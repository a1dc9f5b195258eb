//!
//! Subtraction algorithms for fixed-point digit slices
//!

use crate::digit::{Digit, DoubleDigit, split_double};


/// Subtract `rhs` from `lhs` in place via two's-complement addition
///
/// Each step, from the least significant digit upward, adds
/// `lhs[i] + !rhs[i] + carry` with the carry seeded to 1, which
/// completes the complement at the lowest digit. `rhs_zeros` is the
/// index of the first nonzero digit of `rhs`: inside that leading
/// zero region a pending carry means every remaining digit of `lhs`
/// stays untouched, so the loop stops there.
///
/// Returns true when no borrow escaped the most significant digit.
/// A false return means `rhs` was larger than `lhs` and `lhs` now
/// holds wrapped digits; callers treat that as a contract violation.
#[inline]
pub(crate) fn sub_assign_digit_slices(lhs: &mut [Digit], rhs: &[Digit], rhs_zeros: usize) -> bool {
    debug_assert_eq!(lhs.len(), rhs.len());
    debug_assert!(rhs[..rhs_zeros].iter().all(|&d| d == 0));

    let mut carry: Digit = 1;
    for i in (0..lhs.len()).rev() {
        if carry == 1 && i < rhs_zeros {
            return true;
        }
        let sum = lhs[i] as DoubleDigit + (!rhs[i]) as DoubleDigit + carry as DoubleDigit;
        let (high, low) = split_double(sum);
        lhs[i] = low;
        carry = high;
    }
    carry == 1
}
