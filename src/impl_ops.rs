//! Implement math operations: Add, Sub, Mul, Div
//!
//! Addition and subtraction take another fixed-point value of the
//! same precision; multiplication and division take a `u64`. The
//! assign forms work in place, the value forms reuse the storage of
//! an owned operand.

use crate::*;


impl AddAssign<&FixedPoint> for FixedPoint {
    /// Add another value of the same precision, in place.
    ///
    /// The sum must stay below one; a carry out of the top digit is
    /// a debug assertion failure.
    fn add_assign(&mut self, rhs: &FixedPoint) {
        assert_eq!(
            self.digits.len(),
            rhs.digits.len(),
            "mismatched fixed-point precision",
        );
        let carry =
            arithmetic::addition::add_assign_digit_slices(&mut self.digits, &rhs.digits, rhs.zeros);
        debug_assert_eq!(carry, 0, "fixed-point sum overflowed above one");
        // a carry can reach at most one digit above either operand's
        // leading nonzero digit
        let scan_from = cmp::min(self.zeros, rhs.zeros).saturating_sub(1);
        self.zeros = arithmetic::first_nonzero_digit(&self.digits, scan_from);
    }
}

impl AddAssign<FixedPoint> for FixedPoint {
    #[inline]
    fn add_assign(&mut self, rhs: FixedPoint) {
        *self += &rhs;
    }
}

impl Add<&FixedPoint> for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn add(mut self, rhs: &FixedPoint) -> FixedPoint {
        self += rhs;
        self
    }
}

impl Add<&FixedPoint> for &FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn add(self, rhs: &FixedPoint) -> FixedPoint {
        self.clone() + rhs
    }
}

forward_val_val_binop!(impl Add for FixedPoint, add);
forward_ref_val_binop!(impl Add for FixedPoint, add);


impl SubAssign<&FixedPoint> for FixedPoint {
    /// Subtract another value of the same precision, in place.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is greater than `self`; the difference cannot
    /// be represented.
    fn sub_assign(&mut self, rhs: &FixedPoint) {
        assert_eq!(
            self.digits.len(),
            rhs.digits.len(),
            "mismatched fixed-point precision",
        );
        let no_borrow =
            arithmetic::subtraction::sub_assign_digit_slices(&mut self.digits, &rhs.digits, rhs.zeros);
        if !no_borrow {
            panic!("attempt to subtract a larger fixed-point value");
        }
        // the difference can only gain leading zeros
        self.zeros = arithmetic::first_nonzero_digit(&self.digits, self.zeros);
    }
}

impl SubAssign<FixedPoint> for FixedPoint {
    #[inline]
    fn sub_assign(&mut self, rhs: FixedPoint) {
        *self -= &rhs;
    }
}

impl Sub<&FixedPoint> for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn sub(mut self, rhs: &FixedPoint) -> FixedPoint {
        self -= rhs;
        self
    }
}

impl Sub<&FixedPoint> for &FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn sub(self, rhs: &FixedPoint) -> FixedPoint {
        self.clone() - rhs
    }
}

forward_val_val_binop!(impl Sub for FixedPoint, sub);
forward_ref_val_binop!(impl Sub for FixedPoint, sub);


impl MulAssign<u64> for FixedPoint {
    /// Multiply by a scalar, in place.
    ///
    /// The product must stay below one; use [`FixedPoint::scale`] to
    /// capture the integer part instead.
    fn mul_assign(&mut self, rhs: u64) {
        let carry = self.scale(rhs);
        debug_assert_eq!(carry, 0, "fixed-point product overflowed above one");
    }
}

impl MulAssign<&u64> for FixedPoint {
    #[inline]
    fn mul_assign(&mut self, rhs: &u64) {
        *self *= *rhs;
    }
}

impl Mul<u64> for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn mul(mut self, rhs: u64) -> FixedPoint {
        self *= rhs;
        self
    }
}

impl Mul<u64> for &FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn mul(self, rhs: u64) -> FixedPoint {
        self.clone() * rhs
    }
}

impl Mul<&u64> for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn mul(self, rhs: &u64) -> FixedPoint {
        self * *rhs
    }
}

forward_communative_binop!(impl Mul<FixedPoint>::mul for u64);
forward_communative_binop!(impl Mul<&FixedPoint>::mul for u64);


impl DivAssign<u64> for FixedPoint {
    /// Divide by a scalar, in place, truncating toward zero.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div_assign(&mut self, rhs: u64) {
        if rhs == 0 {
            panic!("Division by zero");
        }
        let start = self.zeros;
        arithmetic::division::div_assign_digit_slice(&mut self.digits, rhs, start);
        self.zeros = arithmetic::first_nonzero_digit(&self.digits, start);
    }
}

impl DivAssign<&u64> for FixedPoint {
    #[inline]
    fn div_assign(&mut self, rhs: &u64) {
        *self /= *rhs;
    }
}

impl Div<u64> for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn div(mut self, rhs: u64) -> FixedPoint {
        self /= rhs;
        self
    }
}

impl Div<u64> for &FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn div(self, rhs: u64) -> FixedPoint {
        self.clone() / rhs
    }
}

impl Div<&u64> for FixedPoint {
    type Output = FixedPoint;

    #[inline]
    fn div(self, rhs: &u64) -> FixedPoint {
        self / *rhs
    }
}


#[cfg(test)]
mod test_add {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $a:expr, $b:expr => $c:expr ) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a = FixedPoint::from_digits($a.to_vec());
                    let b = FixedPoint::from_digits($b.to_vec());
                    let c = FixedPoint::from_digits($c.to_vec());

                    assert_eq!(c, a.clone() + b.clone());
                    assert_eq!(c, a.clone() + &b);
                    assert_eq!(c, &a + b.clone());
                    assert_eq!(c, &a + &b);

                    // Reversed
                    assert_eq!(c, b.clone() + a.clone());
                    assert_eq!(c, &b + &a);

                    let mut n = a.clone();
                    n += b.clone();
                    assert_eq!(c, n);
                    assert_eq!(c.leading_zero_digits(), n.leading_zero_digits());

                    let mut n = a.clone();
                    n += &b;
                    assert_eq!(c, n);
                }
            }
        };
    }

    impl_case!(quarter_plus_half: [0x4000000000000000u64, 0], [0x8000000000000000, 0] => [0xc000000000000000u64, 0]);
    impl_case!(carry_propagates: [0u64, u64::MAX], [0, 1] => [1u64, 0]);
    impl_case!(carry_chain: [0u64, u64::MAX, u64::MAX], [0, 0, 1] => [1u64, 0, 0]);
    impl_case!(zero_identity: [0u64, 0], [5, 7] => [5u64, 7]);
    impl_case!(single_digit: [3u64], [5] => [8u64]);

    #[test]
    #[should_panic(expected = "mismatched fixed-point precision")]
    fn case_mismatched_precision_panics() {
        let mut a = FixedPoint::from_digits(vec![1]);
        a += &FixedPoint::from_digits(vec![1, 2]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflowed above one")]
    fn case_overflow_panics_in_debug() {
        let mut a = FixedPoint::from_digits(vec![0x8000000000000000]);
        a += &FixedPoint::from_digits(vec![0x8000000000000000]);
    }
}

#[cfg(test)]
mod test_sub {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $a:expr, $b:expr => $c:expr ) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let a = FixedPoint::from_digits($a.to_vec());
                    let b = FixedPoint::from_digits($b.to_vec());
                    let c = FixedPoint::from_digits($c.to_vec());

                    assert_eq!(c, a.clone() - b.clone());
                    assert_eq!(c, a.clone() - &b);
                    assert_eq!(c, &a - b.clone());
                    assert_eq!(c, &a - &b);

                    let mut n = a.clone();
                    n -= b.clone();
                    assert_eq!(c, n);
                    assert_eq!(c.leading_zero_digits(), n.leading_zero_digits());

                    let mut n = a.clone();
                    n -= &b;
                    assert_eq!(c, n);
                }
            }
        };
    }

    impl_case!(half_minus_quarter: [0x8000000000000000u64, 0], [0x4000000000000000, 0] => [0x4000000000000000u64, 0]);
    impl_case!(borrow_propagates: [1u64, 0], [0, 1] => [0u64, u64::MAX]);
    impl_case!(equal_is_zero: [7u64, 7], [7, 7] => [0u64, 0]);
    impl_case!(zero_rhs: [9u64, 4], [0, 0] => [9u64, 4]);

    #[test]
    #[should_panic(expected = "attempt to subtract a larger fixed-point value")]
    fn case_underflow_panics() {
        let mut a = FixedPoint::from_digits(vec![0, 1]);
        a -= &FixedPoint::from_digits(vec![1, 0]);
    }

    #[test]
    #[should_panic(expected = "mismatched fixed-point precision")]
    fn case_mismatched_precision_panics() {
        let mut a = FixedPoint::from_digits(vec![1, 2]);
        a -= &FixedPoint::from_digits(vec![1]);
    }
}
