// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Digits of pi via Machin's formula
//!
//! `FixedPoint` stores a number in the interval `[0, 1)` as a vector
//! of 64-bit digits in base 2<sup>64</sup>, most significant digit
//! first. The number of digits is fixed when the value is created,
//! so arithmetic never reallocates; results are truncated toward
//! zero at the last digit.
//!
//! The [machin] module evaluates the arctangent series of Machin's
//! identity `pi/4 = 4*arctan(1/5) - arctan(1/239)` on top of this
//! type, yielding the fraction of pi to any requested precision.
//!
//! # Example
//!
//! ```
//! use machin_pi::pi_with_precision;
//!
//! let p = pi_with_precision(4);
//! println!("pi = 3.{:x}", p);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(clippy::redundant_field_names)]


extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::cmp;
use self::stdlib::hash::{Hash, Hasher};
use self::stdlib::num::ParseIntError;
use self::stdlib::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use self::stdlib::str::FromStr;
use self::stdlib::string::String;
use self::stdlib::vec::Vec;
use self::stdlib::fmt;


// const DEFAULT_PRECISION: usize = ${MACHIN_PI_DEFAULT_PRECISION} or 10000;
include!(concat!(env!("OUT_DIR"), "/default_precision.rs"));

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

mod digit;
pub use digit::Digit;

// carry-propagating kernels over digit slices
mod arithmetic;

// Add<T>, Sub<T>, etc...
mod impl_ops;

// PartialEq, PartialOrd, Ord
mod impl_cmp;

// Display, LowerHex, Debug
mod impl_fmt;

mod parsing;

#[cfg(feature = "serde")]
mod impl_serde;

// The arctangent series and pi itself
pub mod machin;
pub use machin::{arctan_recip, pi, pi_with_precision};


/// A fixed-precision fraction in the interval `[0, 1)`
///
/// The value is the sum of `digits[i] / 2^(64*(i+1))`: digit zero is
/// the most significant. All digits are allocated up front and every
/// operation works in place, truncating toward zero at the final
/// digit.
#[derive(Clone, Eq)]
pub struct FixedPoint {
    digits: Vec<Digit>,
    // index of the first nonzero digit; digits.len() when the value
    // is zero. Kept exact by every operation.
    zeros: usize,
}

impl FixedPoint {
    /// Creates a zero value with the given number of 64-bit digits.
    ///
    /// # Panics
    ///
    /// Panics if `precision` is zero.
    #[inline]
    pub fn zero(precision: usize) -> FixedPoint {
        assert!(precision > 0, "precision must be at least one digit");
        FixedPoint {
            digits: vec![0; precision],
            zeros: precision,
        }
    }

    /// Creates the value `1/x` with the given number of 64-bit digits.
    ///
    /// # Panics
    ///
    /// Panics if `x` is zero, if `x` is one (the reciprocal would not
    /// lie below one), or if `precision` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use machin_pi::FixedPoint;
    ///
    /// let half = FixedPoint::reciprocal(2, 4);
    /// assert_eq!(half.digits(), [0x8000000000000000, 0, 0, 0]);
    /// ```
    pub fn reciprocal(x: u64, precision: usize) -> FixedPoint {
        let mut result = FixedPoint::zero(precision);
        result.set_reciprocal(x);
        result
    }

    /// Wraps a digit vector as a value, most significant digit first.
    ///
    /// # Panics
    ///
    /// Panics if `digits` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use machin_pi::FixedPoint;
    ///
    /// // 1/2 + 1/2^128
    /// let x = FixedPoint::from_digits(vec![0x8000000000000000, 1]);
    /// assert_eq!(x.precision(), 2);
    /// assert_eq!(x.leading_zero_digits(), 0);
    /// ```
    pub fn from_digits(digits: Vec<Digit>) -> FixedPoint {
        assert!(!digits.is_empty(), "precision must be at least one digit");
        let zeros = arithmetic::first_nonzero_digit(&digits, 0);
        FixedPoint { digits, zeros }
    }

    /// Number of 64-bit digits held
    #[inline]
    pub fn precision(&self) -> usize {
        self.digits.len()
    }

    /// The digits, most significant first
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Consumes the value, returning its digit vector
    #[inline]
    pub fn into_digits(self) -> Vec<Digit> {
        self.digits
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.zeros == self.digits.len()
    }

    /// Resets every digit to zero, keeping the precision
    pub fn set_zero(&mut self) {
        self.digits.fill(0);
        self.zeros = self.digits.len();
    }

    /// Number of zero digits before the first nonzero digit
    ///
    /// Equals [`precision`](Self::precision) when the value is zero.
    #[inline]
    pub fn leading_zero_digits(&self) -> usize {
        debug_assert_eq!(
            self.zeros,
            arithmetic::first_nonzero_digit(&self.digits, 0),
            "stale zero-digit cache",
        );
        self.zeros
    }

    /// Overwrites this value with `1/x`, reusing the digit buffer.
    ///
    /// # Panics
    ///
    /// Panics if `x` is zero or one.
    pub fn set_reciprocal(&mut self, x: u64) {
        if x == 0 {
            panic!("Division by zero");
        }
        assert!(x > 1, "the reciprocal of one does not lie below one");
        arithmetic::inverse::reciprocal_into(x, &mut self.digits);
        // 1/x of any u64 is at least 2^-64, so the first digit is set
        self.zeros = 0;
    }

    /// Multiplies in place by a small factor, returning the carry
    /// that escaped the most significant digit.
    ///
    /// The carry is the integer part of the product; the digits keep
    /// only its fraction. A zero carry means the product still lies
    /// below one. Scaling by zero clears the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use machin_pi::FixedPoint;
    ///
    /// let mut x = FixedPoint::reciprocal(2, 4);
    /// assert_eq!(x.scale(7), 3);        // 7/2 = 3 + 1/2
    /// assert_eq!(x, FixedPoint::reciprocal(2, 4));
    /// ```
    pub fn scale(&mut self, factor: u64) -> Digit {
        // a carry out of the leading nonzero digit always fits in the
        // zero digit above it, if there is one
        let hi = self.zeros.saturating_sub(1);
        let carry = arithmetic::multiplication::mul_assign_digit_slice(&mut self.digits, factor, hi);
        self.zeros = arithmetic::first_nonzero_digit(&self.digits, hi);
        carry
    }

    /// Overwrites this value with `numerator / divisor`, reusing the
    /// digit buffer.
    ///
    /// Both values must have the same precision. The quotient is
    /// truncated toward zero at the last digit.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero or the precisions differ.
    pub fn set_quotient(&mut self, numerator: &FixedPoint, divisor: u64) {
        assert_eq!(
            self.digits.len(),
            numerator.digits.len(),
            "mismatched fixed-point precision",
        );
        if divisor == 0 {
            panic!("Division by zero");
        }
        // quotient digits above the numerator's first nonzero digit
        // are zero; stale digits of this buffer up to there must be
        // cleared by hand since the kernel never touches them
        let start = numerator.zeros;
        if self.zeros < start {
            self.digits[self.zeros..start].fill(0);
        }
        arithmetic::division::div_digit_slice_into(
            &numerator.digits,
            divisor,
            start,
            &mut self.digits,
        );
        self.zeros = arithmetic::first_nonzero_digit(&self.digits, start);
    }
}


#[derive(Debug, PartialEq)]
pub enum ParseFixedPointError {
    ParseInt(ParseIntError),
    InvalidChar(char),
    Empty,
}

impl fmt::Display for ParseFixedPointError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseFixedPointError::*;

        match *self {
            ParseInt(ref e) => e.fmt(f),
            InvalidChar(c) => write!(f, "Invalid character {:?}", c),
            Empty => "Failed to parse empty string".fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseFixedPointError {
    fn description(&self) -> &str {
        "failed to parse hexadecimal digits"
    }
}

impl From<ParseIntError> for ParseFixedPointError {
    fn from(err: ParseIntError) -> ParseFixedPointError {
        ParseFixedPointError::ParseInt(err)
    }
}

impl FromStr for FixedPoint {
    type Err = ParseFixedPointError;

    #[inline]
    fn from_str(s: &str) -> Result<FixedPoint, ParseFixedPointError> {
        parsing::parse_fixed_point(s)
    }
}

impl Hash for FixedPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // trailing zero digits do not change the value, so they must
        // not change the hash either
        let end = self.digits.iter().rposition(|&d| d != 0).map_or(0, |p| p + 1);
        self.digits[..end].hash(state);
    }
}



#[cfg(all(test, property_tests))]
extern crate proptest;
