//! Implementation of comparison operations
//!
//! Comparisons are between values, not digit vectors: two values of
//! different precision are compared as if the shorter vector were
//! padded with zero digits, so `[1]` and `[1, 0]` are equal.

use crate::*;

use stdlib::cmp::Ordering;

impl PartialEq for FixedPoint {
    #[inline]
    fn eq(&self, rhs: &FixedPoint) -> bool {
        self.cmp(rhs) == Ordering::Equal
    }
}

impl PartialOrd for FixedPoint {
    #[inline]
    fn partial_cmp(&self, other: &FixedPoint) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixedPoint {
    /// Complete ordering of fixed-point values
    ///
    /// # Example
    ///
    /// ```
    /// use machin_pi::FixedPoint;
    ///
    /// let a = FixedPoint::from_digits(vec![1, 0]);
    /// let b = FixedPoint::from_digits(vec![2, 0]);
    /// assert!(a < b);
    /// assert!(b > a);
    /// let c = FixedPoint::from_digits(vec![1]);
    /// assert!(a >= c);
    /// assert!(c >= a);
    /// ```
    #[inline]
    fn cmp(&self, other: &FixedPoint) -> Ordering {
        let common = cmp::min(self.digits.len(), other.digits.len());
        let prefix_ord = self.digits[..common].cmp(&other.digits[..common]);
        if prefix_ord != Ordering::Equal {
            return prefix_ord;
        }
        // equal prefixes: whichever side has a nonzero digit past the
        // common precision holds the larger value
        if arithmetic::first_nonzero_digit(&self.digits, common) < self.digits.len() {
            Ordering::Greater
        } else if arithmetic::first_nonzero_digit(&other.digits, common) < other.digits.len() {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}
