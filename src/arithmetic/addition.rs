//!
//! Addition algorithms for fixed-point digit slices
//!

use crate::digit::{Digit, DoubleDigit, split_double};


/// Add `rhs` into `lhs` in place, propagating carries
///
/// Digits are most significant first, so the loop walks backwards
/// from the least significant position. `rhs_zeros` is the index of
/// the first nonzero digit of `rhs`: once the loop has climbed past
/// it with no carry pending, the remaining digits of `lhs` cannot
/// change and the loop stops.
///
/// Returns the carry that escaped the most significant digit, which
/// is nonzero only when the sum reached 1.0.
#[inline]
pub(crate) fn add_assign_digit_slices(lhs: &mut [Digit], rhs: &[Digit], rhs_zeros: usize) -> Digit {
    debug_assert_eq!(lhs.len(), rhs.len());
    debug_assert!(rhs[..rhs_zeros].iter().all(|&d| d == 0));

    let mut carry: Digit = 0;
    for i in (0..lhs.len()).rev() {
        if carry == 0 && i < rhs_zeros {
            return 0;
        }
        let sum = lhs[i] as DoubleDigit + rhs[i] as DoubleDigit + carry as DoubleDigit;
        let (high, low) = split_double(sum);
        lhs[i] = low;
        carry = high;
    }
    carry
}


#[cfg(test)]
mod test_add_assign_digit_slices {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $lhs:expr, $rhs:expr, $rhs_zeros:literal => $expected:expr, carry=$carry:literal ) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let mut lhs = $lhs;
                    let rhs: &[Digit] = &$rhs;
                    let carry = add_assign_digit_slices(&mut lhs, rhs, $rhs_zeros);
                    assert_eq!(lhs, $expected);
                    assert_eq!(carry, $carry);
                }
            }
        };
    }

    impl_case!(no_carry: [1, 2], [3, 4], 0 => [4, 6], carry=0);
    impl_case!(carry_chain: [0, Digit::MAX], [0, 1], 1 => [1, 0], carry=0);
    impl_case!(carry_escapes: [Digit::MAX, Digit::MAX], [0, 1], 1 => [0, 0], carry=1);
    impl_case!(zero_rhs: [5, 6, 7], [0, 0, 0], 3 => [5, 6, 7], carry=0);
    impl_case!(early_exit_keeps_prefix: [5, 0, 0, 1], [0, 0, 0, 3], 3 => [5, 0, 0, 4], carry=0);

    // a pending carry must keep climbing past rhs' leading zeros
    impl_case!(carry_crosses_zero_prefix:
        [0, Digit::MAX, Digit::MAX], [0, 0, 1], 2 => [1, 0, 0], carry=0);
}
