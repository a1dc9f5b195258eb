//! reciprocal expansion

use crate::digit::{Digit, DoubleDigit, DIGIT_BITS};

use num_integer::div_rem;


/// Fill `digits` with the base-2^64 fraction digits of 1/x
///
/// Long division of 1.000... by x: the running remainder starts at 1
/// and each produced digit is the quotient of `remainder * 2^64` by
/// x. Requires `x >= 2` so every quotient digit fits; the first digit
/// is then always nonzero, since `2^64 / x > 1`.
pub(crate) fn reciprocal_into(x: Digit, digits: &mut [Digit]) {
    debug_assert!(x >= 2);

    let mut rem: Digit = 1;
    for digit in digits.iter_mut() {
        let acc = (rem as DoubleDigit) << DIGIT_BITS;
        let (q, r) = div_rem(acc, x as DoubleDigit);
        *digit = q as Digit;
        rem = r as Digit;
    }
}
