//! Routines for parsing values into FixedPoints

use super::{FixedPoint, ParseFixedPointError};

use crate::digit::{Digit, DIGIT_HEX_CHARS};
use crate::stdlib::string::String;
use crate::stdlib::vec::Vec;


/// Parse a hexadecimal fraction, ignoring all whitespace
///
/// Accepts the output of the `Display` and `LowerHex` impls: hex
/// characters in sixteen-character groups, optionally separated by
/// spaces or newlines. The precision of the result is the number of
/// sixteen-character groups; a trailing partial group reads as if
/// padded with zeros on the right. Characters other than hex digits
/// and whitespace are rejected.
pub(crate) fn parse_fixed_point(s: &str) -> Result<FixedPoint, ParseFixedPointError> {
    let mut hex_chars: Vec<char> = Vec::with_capacity(s.len());
    for c in s.chars() {
        if c.is_whitespace() {
            continue;
        }
        // from_str_radix would tolerate a leading '+' here, silently
        // shifting the group a nibble to the right
        if !c.is_ascii_hexdigit() {
            return Err(ParseFixedPointError::InvalidChar(c));
        }
        hex_chars.push(c);
    }
    if hex_chars.is_empty() {
        return Err(ParseFixedPointError::Empty);
    }

    let digit_count = (hex_chars.len() + DIGIT_HEX_CHARS - 1) / DIGIT_HEX_CHARS;
    let mut digits = Vec::with_capacity(digit_count);

    let mut buf = String::with_capacity(DIGIT_HEX_CHARS);
    for chunk in hex_chars.chunks(DIGIT_HEX_CHARS) {
        buf.clear();
        buf.extend(chunk);
        // the digits are a fraction: "8" means 0x8000... = 1/2
        while buf.len() < DIGIT_HEX_CHARS {
            buf.push('0');
        }

        digits.push(Digit::from_str_radix(&buf, 16)?);
    }

    Ok(FixedPoint::from_digits(digits))
}


#[cfg(test)]
mod test_parse_fixed_point {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $input:literal => $digits:expr ) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let parsed = parse_fixed_point($input).unwrap();
                    let digits: &[Digit] = &$digits;
                    assert_eq!(parsed.digits(), digits);
                }
            }
        };
    }

    impl_case!(one_digit: "243f6a8885a308d3" => [0x243f6a8885a308d3]);
    impl_case!(two_digits: "243f6a8885a308d313198a2e03707344"
        => [0x243f6a8885a308d3, 0x13198a2e03707344]);
    impl_case!(space_separated: "243f6a8885a308d3 13198a2e03707344"
        => [0x243f6a8885a308d3, 0x13198a2e03707344]);
    impl_case!(newlines_and_spaces: "0000000000000001 0000000000000002\n0000000000000003"
        => [1, 2, 3]);
    impl_case!(uppercase: "243F6A8885A308D3" => [0x243f6a8885a308d3]);
    impl_case!(half_pads_right: "8" => [0x8000000000000000]);
    impl_case!(partial_last_group: "0000000000000001 ff" => [1, 0xff00000000000000]);
    impl_case!(zero: "0000000000000000" => [0]);

    #[test]
    fn case_empty_string() {
        assert_eq!(parse_fixed_point(""), Err(ParseFixedPointError::Empty));
    }

    #[test]
    fn case_whitespace_only() {
        assert_eq!(parse_fixed_point(" \n\t "), Err(ParseFixedPointError::Empty));
    }

    #[test]
    fn case_invalid_hex() {
        let result = parse_fixed_point("xyz");
        assert_eq!(result, Err(ParseFixedPointError::InvalidChar('x')));
    }

    #[test]
    fn case_sign_rejected() {
        // a sign would occupy a character slot and shift the group
        let result = parse_fixed_point("+8000000000000000");
        assert_eq!(result, Err(ParseFixedPointError::InvalidChar('+')));

        let result = parse_fixed_point("-8000000000000000");
        assert_eq!(result, Err(ParseFixedPointError::InvalidChar('-')));
    }

    #[test]
    fn case_embedded_garbage_rejected() {
        let result = parse_fixed_point("0000000000000001 g");
        assert_eq!(result, Err(ParseFixedPointError::InvalidChar('g')));
    }

    #[test]
    fn case_via_from_str() {
        let parsed: FixedPoint = "8000000000000000".parse().unwrap();
        assert_eq!(parsed, FixedPoint::reciprocal(2, 1));
    }
}
