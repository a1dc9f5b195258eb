//! Digit types
//!
//! Constants and type aliases defining the 64-bit digit used by FixedPoint.
//!

/// The "base type" of the fixed-point digit
///
/// One digit stores 64 bits of the fraction, most significant
/// digit first.
pub type Digit = u64;

/// Integer double the size of Digit
///
/// Must be able to hold the product of a Digit and a scalar,
/// plus a carry.
pub(crate) type DoubleDigit = u128;

/// Number of bits in one Digit
pub(crate) const DIGIT_BITS: u32 = Digit::BITS;

/// Number of hexadecimal characters needed to print one Digit
pub(crate) const DIGIT_HEX_CHARS: usize = (DIGIT_BITS / 4) as usize;

/// Split a double-width value into (high, low) digits
#[inline]
pub(crate) fn split_double(value: DoubleDigit) -> (Digit, Digit) {
    ((value >> DIGIT_BITS) as Digit, value as Digit)
}
