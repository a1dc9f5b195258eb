// Property tests to be included by lib.rs (if enabled)


mod arithmetic {
    use super::*;

    macro_rules! impl_test {
        ($x:literal) => {
            paste! { proptest! {
                #[test]
                fn [< divide_by_ $x _then_scale_back >](digits: Vec<u64>) {
                    prop_assume!(!digits.is_empty());

                    let value = FixedPoint::from_digits(digits);
                    let mut quotient = value.clone();
                    quotient /= $x;

                    let carry = quotient.scale($x);
                    prop_assert_eq!(carry, 0);
                    prop_assert!(&quotient <= &value);

                    // division truncates, so scaling back recovers the
                    // value short of at most x-1 ulps
                    let mut lost = value;
                    lost -= &quotient;
                    let mut lost_digits = lost.into_digits();
                    let last = lost_digits.pop().unwrap();
                    prop_assert!(last < $x);
                    prop_assert!(lost_digits.iter().all(|&d| d == 0));
                }
            } }
        };
    }

    impl_test!(2);
    impl_test!(5);
    impl_test!(239);
    impl_test!(1000);

    proptest! {
        #[test]
        fn subtracting_addend_restores_value(pairs: Vec<(u64, u64)>) {
            prop_assume!(!pairs.is_empty());

            let (mut a_digits, mut b_digits): (Vec<u64>, Vec<u64>) = pairs.into_iter().unzip();
            // keep the sum below one
            a_digits[0] >>= 1;
            b_digits[0] >>= 1;

            let a = FixedPoint::from_digits(a_digits);
            let b = FixedPoint::from_digits(b_digits);

            let mut sum = a.clone();
            sum += &b;
            sum -= &b;
            prop_assert_eq!(sum, a);
        }
    }
}

mod zero_digit_cache {
    use super::*;

    proptest! {
        #[test]
        fn survives_mixed_operations(
            pairs: Vec<(u64, u64)>,
            factor in 1u64..1000,
            divisor in 1u64..1000,
        ) {
            prop_assume!(!pairs.is_empty());

            let (mut a_digits, mut b_digits): (Vec<u64>, Vec<u64>) = pairs.into_iter().unzip();
            a_digits[0] >>= 1;
            b_digits[0] >>= 1;

            let a = FixedPoint::from_digits(a_digits);
            let b = FixedPoint::from_digits(b_digits);

            // leading_zero_digits checks the cache against a fresh
            // scan on every call
            let mut x = a.clone();
            x += &b;
            x.leading_zero_digits();
            x -= &b;
            x.leading_zero_digits();
            prop_assert_eq!(&x, &a);

            x.scale(factor);
            x.leading_zero_digits();
            x /= divisor;
            x.leading_zero_digits();

            let numerator = x.clone();
            x.set_quotient(&numerator, divisor);
            x.leading_zero_digits();
        }
    }
}

mod comparisons {
    use super::*;

    proptest! {
        #[test]
        fn trailing_zeros_do_not_change_order(digits: Vec<u64>, extra in 1usize..4) {
            prop_assume!(!digits.is_empty());

            let a = FixedPoint::from_digits(digits.clone());
            let mut padded = digits;
            let new_len = padded.len() + extra;
            padded.resize(new_len, 0);
            let b = FixedPoint::from_digits(padded);

            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.cmp(&b), cmp::Ordering::Equal);
            prop_assert_eq!(b.cmp(&a), cmp::Ordering::Equal);
        }
    }
}
