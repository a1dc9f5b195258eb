//! arithmetic routines
//!
//! Slice-level kernels operating on most-significant-first digit
//! slices. Callers are responsible for keeping the leading-zero
//! count of [`crate::FixedPoint`] exact; each kernel documents the
//! range of digits it may change.

use crate::digit::Digit;

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod multiplication;
pub(crate) mod division;
pub(crate) mod inverse;


/// Index of the first nonzero digit at or after `start`
///
/// Returns `digits.len()` if every digit from `start` on is zero.
/// Digits before `start` are not inspected; the caller must know
/// they are zero.
#[inline]
pub(crate) fn first_nonzero_digit(digits: &[Digit], start: usize) -> usize {
    digits[start..]
        .iter()
        .position(|&d| d != 0)
        .map(|pos| start + pos)
        .unwrap_or(digits.len())
}


#[cfg(test)]
mod test_first_nonzero_digit {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $digits:expr, $start:literal => $expected:literal ) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let digits: &[Digit] = &$digits;
                    assert_eq!(first_nonzero_digit(digits, $start), $expected);
                }
            }
        };
    }

    impl_case!(all_zero: [0, 0, 0], 0 => 3);
    impl_case!(all_zero_from_middle: [0, 0, 0], 2 => 3);
    impl_case!(leading_value: [7, 0, 0], 0 => 0);
    impl_case!(middle_value: [0, 0, 5, 0], 0 => 2);
    impl_case!(middle_value_skipped: [0, 0, 5, 0], 3 => 4);
    impl_case!(last_value: [0, 0, 1], 0 => 2);
    impl_case!(empty: [], 0 => 0);
}
