
use num_bigint::BigUint;
use num_traits::Zero;

fn digits_to_biguint(digits: &[Digit]) -> BigUint {
    digits.iter().fold(BigUint::zero(), |acc, &d| (acc << 64u32) + d)
}

// leading 64-bit digits of pi's hexadecimal fraction
const PI_DIGITS: [Digit; 16] = [
    0x243f6a8885a308d3, 0x13198a2e03707344, 0xa4093822299f31d0, 0x082efa98ec4e6c89,
    0x452821e638d01377, 0xbe5466cf34e90c6c, 0xc0ac29b7c97c50dd, 0x3f84d5b5b5470917,
    0x9216d5d98979fb1b, 0xd1310ba698dfb5ac, 0x2ffd72dbd01adfb7, 0xb8e1afed6a267e96,
    0xba7c9045f12c7f99, 0x24a19947b3916cf7, 0x0801f2e2858efc16, 0x636920d871574e69,
];


mod constructors {
    use super::*;

    #[test]
    fn zero_has_no_set_digits() {
        let z = FixedPoint::zero(5);
        assert_eq!(z.precision(), 5);
        assert!(z.is_zero());
        assert_eq!(z.digits(), [0, 0, 0, 0, 0]);
        assert_eq!(z.leading_zero_digits(), 5);
    }

    #[test]
    #[should_panic(expected = "precision must be at least one digit")]
    fn zero_precision_panics() {
        FixedPoint::zero(0);
    }

    #[test]
    fn from_digits_keeps_digits() {
        let x = FixedPoint::from_digits(vec![0, 0, 3, 0]);
        assert_eq!(x.digits(), [0, 0, 3, 0]);
        assert_eq!(x.precision(), 4);
        assert_eq!(x.leading_zero_digits(), 2);
        assert!(!x.is_zero());
    }

    #[test]
    #[should_panic(expected = "precision must be at least one digit")]
    fn from_digits_empty_panics() {
        FixedPoint::from_digits(vec![]);
    }

    #[test]
    fn into_digits_round_trips() {
        let digits = vec![4, 5, 6];
        let x = FixedPoint::from_digits(digits.clone());
        assert_eq!(x.into_digits(), digits);
    }

    #[test]
    fn reciprocal_of_three_repeats() {
        let third = FixedPoint::reciprocal(3, 4);
        assert_eq!(third.digits(), [0x5555555555555555; 4]);
        assert_eq!(third.leading_zero_digits(), 0);
    }

    #[test]
    fn reciprocal_matches_biguint() {
        for x in [3u64, 7, 239, 0xdeadbeef] {
            let value = FixedPoint::reciprocal(x, 4);
            let expected = (BigUint::from(1u8) << 256u32) / x;
            assert_eq!(digits_to_biguint(value.digits()), expected, "1/{}", x);
        }
    }
}

mod leading_zero_digits {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $digits:expr => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $name >]() {
                    let x = FixedPoint::from_digits($digits.to_vec());
                    assert_eq!(x.leading_zero_digits(), $expected);
                }
            }
        };
    }

    impl_case!(first_digit_set: [1u64, 2] => 0);
    impl_case!(one_zero: [0u64, 1] => 1);
    impl_case!(all_zero: [0u64, 0, 0] => 3);
    impl_case!(gap_after_first: [5u64, 0, 0, 1] => 0);

    #[test]
    fn tracked_through_subtraction() {
        // equal leading digits cancel, the cache must follow
        let mut x = FixedPoint::from_digits(vec![7, 7, 7]);
        x -= &FixedPoint::from_digits(vec![7, 7, 2]);
        assert_eq!(x.digits(), [0, 0, 5]);
        assert_eq!(x.leading_zero_digits(), 2);
    }
}

mod set_zero {
    use super::*;

    #[test]
    fn clears_all_digits() {
        let mut x = FixedPoint::from_digits(vec![1, 2, 3]);
        x.set_zero();
        assert!(x.is_zero());
        assert_eq!(x.precision(), 3);
        assert_eq!(x.digits(), [0, 0, 0]);
        assert_eq!(x.leading_zero_digits(), 3);
    }
}

mod set_reciprocal {
    use super::*;

    #[test]
    fn overwrites_previous_value() {
        let mut x = FixedPoint::from_digits(vec![7, 7, 7]);
        x.set_reciprocal(4);
        assert_eq!(x.digits(), [0x4000000000000000, 0, 0]);
        assert_eq!(x.leading_zero_digits(), 0);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn zero_panics() {
        let mut x = FixedPoint::zero(2);
        x.set_reciprocal(0);
    }

    #[test]
    #[should_panic(expected = "does not lie below one")]
    fn one_panics() {
        let mut x = FixedPoint::zero(2);
        x.set_reciprocal(1);
    }
}

mod scale {
    use super::*;

    #[test]
    fn returns_integer_part() {
        let mut x = FixedPoint::reciprocal(2, 3);
        let carry = x.scale(7);
        // 7/2 = 3 + 1/2
        assert_eq!(carry, 3);
        assert_eq!(x, FixedPoint::reciprocal(2, 3));
    }

    #[test]
    fn by_zero_clears() {
        let mut x = FixedPoint::from_digits(vec![5, 5]);
        assert_eq!(x.scale(0), 0);
        assert!(x.is_zero());
        assert_eq!(x.leading_zero_digits(), 2);
    }

    #[test]
    fn matches_biguint_products() {
        let digits = vec![0x0123456789abcdef, 0xfedcba9876543210, 0xdeadbeefcafebabe];
        let value = FixedPoint::from_digits(digits.clone());
        let whole = digits_to_biguint(&digits);

        for factor in [2u64, 3, 10, 0x100000000, u64::MAX] {
            let mut scaled = value.clone();
            let carry = scaled.scale(factor);

            let expected = &whole * factor;
            let got = (BigUint::from(carry) << (64 * digits.len() as u32))
                + digits_to_biguint(scaled.digits());
            assert_eq!(got, expected, "factor {}", factor);
            assert_eq!(scaled.leading_zero_digits(), 0);
        }
    }
}

mod set_quotient {
    use super::*;

    #[test]
    fn divides_into_buffer() {
        let src = FixedPoint::from_digits(vec![1, 0]);
        let mut dst = FixedPoint::zero(2);
        dst.set_quotient(&src, 2);
        assert_eq!(dst.digits(), [0, 0x8000000000000000]);
        assert_eq!(dst.leading_zero_digits(), 1);
    }

    #[test]
    fn clears_stale_digits() {
        // the quotient's zero prefix must overwrite whatever the
        // buffer held before
        let src = FixedPoint::from_digits(vec![0, 0, 8]);
        let mut dst = FixedPoint::from_digits(vec![7, 7, 7]);
        dst.set_quotient(&src, 2);
        assert_eq!(dst.digits(), [0, 0, 4]);
        assert_eq!(dst.leading_zero_digits(), 2);
    }

    #[test]
    fn zero_numerator_gives_zero() {
        let src = FixedPoint::zero(3);
        let mut dst = FixedPoint::from_digits(vec![9, 9, 9]);
        dst.set_quotient(&src, 17);
        assert!(dst.is_zero());
    }

    #[test]
    fn matches_biguint_quotients() {
        let digits = vec![0x243f6a8885a308d3, 0x13198a2e03707344, 0xa4093822299f31d0];
        let src = FixedPoint::from_digits(digits.clone());
        let whole = digits_to_biguint(&digits);
        let mut dst = FixedPoint::zero(3);

        for divisor in [2u64, 3, 7, 239, 0xfffffffffffffffe] {
            dst.set_quotient(&src, divisor);
            assert_eq!(
                digits_to_biguint(dst.digits()),
                &whole / divisor,
                "divisor {}",
                divisor,
            );
        }
    }

    #[test]
    #[should_panic(expected = "mismatched fixed-point precision")]
    fn mismatched_precision_panics() {
        let src = FixedPoint::zero(3);
        let mut dst = FixedPoint::zero(2);
        dst.set_quotient(&src, 2);
    }

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn zero_divisor_panics() {
        let src = FixedPoint::zero(2);
        let mut dst = FixedPoint::zero(2);
        dst.set_quotient(&src, 0);
    }
}

mod pi_digits {
    use super::*;

    #[test]
    fn sixteen_digits_match_reference() {
        let p = pi_with_precision(PI_DIGITS.len());
        assert_eq!(&p.digits()[..15], &PI_DIGITS[..15]);

        // every digit above the last is exact; the last one absorbs
        // the truncation of the arctangent series
        let last_digit_error = PI_DIGITS[15].abs_diff(p.digits()[15]);
        assert!(last_digit_error < (1 << 20), "error {:#x}", last_digit_error);
    }

    #[test]
    fn truncation_error_stays_in_last_digit() {
        let short = pi_with_precision(4);
        let long = pi_with_precision(8);
        assert_eq!(&short.digits()[..3], &long.digits()[..3]);
    }
}

mod hashing {
    use super::*;

    fn hash_of(value: &FixedPoint) -> u64 {
        let mut hasher = stdlib::DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_values_hash_equal() {
        let a = FixedPoint::from_digits(vec![1]);
        let b = FixedPoint::from_digits(vec![1, 0]);
        let c = FixedPoint::from_digits(vec![1, 0, 0, 0]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&a), hash_of(&c));
    }

    #[test]
    fn zero_hashes_equal_across_precision() {
        let a = FixedPoint::zero(1);
        let b = FixedPoint::zero(100);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn different_values_hash_differently() {
        let a = FixedPoint::from_digits(vec![1, 2]);
        let b = FixedPoint::from_digits(vec![1, 3]);
        assert_ne!(hash_of(&a), hash_of(&b));
    }
}

mod cloning {
    use super::*;

    #[test]
    fn clones_do_not_share_digits() {
        let original = FixedPoint::from_digits(vec![4, 5]);
        let mut copy = original.clone();
        copy.set_zero();
        assert_eq!(original.digits(), [4, 5]);
        assert!(copy.is_zero());
    }
}

mod string_round_trip {
    use super::*;

    #[test]
    fn display_then_parse() {
        let p = pi_with_precision(6);
        let parsed: FixedPoint = p.to_string().parse().unwrap();
        assert_eq!(p, parsed);
        assert_eq!(p.precision(), parsed.precision());
    }
}

mod add_sub_round_trip {
    use super::*;

    #[test]
    fn subtracting_addend_restores_value() {
        let a = FixedPoint::from_digits(vec![0x0123456789abcdef, 0xfedcba9876543210]);
        let b = FixedPoint::from_digits(vec![0x1111111111111111, 0x2222222222222222]);
        let mut sum = a.clone() + &b;
        sum -= &b;
        assert_eq!(sum, a);
        assert_eq!(sum.leading_zero_digits(), a.leading_zero_digits());
    }
}
