//! Implementation of std::fmt traits
//!
//! `Display` writes each 64-bit digit as sixteen zero-padded hex
//! characters, four digits to a line, the layout used for published
//! tables of pi's hexadecimal expansion. `LowerHex` writes the same
//! digits as one contiguous string. Both honor `{:.N}` as a limit on
//! the number of digits written.

use crate::*;
use stdlib::fmt::Write;

const DIGITS_PER_LINE: usize = 4;


impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digit_limit = match f.precision() {
            Some(prec) => cmp::min(prec, self.digits.len()),
            None => self.digits.len(),
        };

        for (i, digit) in self.digits[..digit_limit].iter().enumerate() {
            if i > 0 {
                if i % DIGITS_PER_LINE == 0 {
                    f.write_str("\n")?;
                } else {
                    f.write_str(" ")?;
                }
            }
            write!(f, "{:0width$x}", digit, width = digit::DIGIT_HEX_CHARS)?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digit_limit = match f.precision() {
            Some(prec) => cmp::min(prec, self.digits.len()),
            None => self.digits.len(),
        };

        // build the digit string first so the formatter can pad it;
        // pad_integral honors width but not precision, which already
        // chose the digit count above
        let mut buf = String::with_capacity(digit_limit * digit::DIGIT_HEX_CHARS);
        for digit in &self.digits[..digit_limit] {
            write!(buf, "{:0width$x}", digit, width = digit::DIGIT_HEX_CHARS)?;
        }
        f.pad_integral(true, "", &buf)
    }
}

impl fmt::Debug for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.digits.len() <= DIGITS_PER_LINE {
            write!(f, "FixedPoint(\"{:x}\")", self)
        } else {
            // keep debug output readable for values with thousands of digits
            write!(
                f,
                "FixedPoint(\"{:.limit$x}...\", {} digits)",
                self,
                self.digits.len(),
                limit = DIGITS_PER_LINE,
            )
        }
    }
}




#[cfg(all(test, property_tests))]
mod proptests {
    use super::*;
    use proptest::*;

    proptest! {
        #[test]
        fn roundtrip_to_str_and_back(digits: Vec<u64>) {
            prop_assume!(!digits.is_empty());

            let original = FixedPoint::from_digits(digits);
            let display = format!("{}", original);
            let parsed = display.parse::<FixedPoint>().unwrap();

            prop_assert_eq!(&original, &parsed);
        }
    }
}
