use jazon::primitives::numbers_equal;
use proptest::prelude::*;
use serde_json::Number;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn integers_compare_like_std(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(numbers_equal(&Number::from(a), &Number::from(b)), a == b);
    }

    #[test]
    fn unsigned_compare_like_std(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(numbers_equal(&Number::from(a), &Number::from(b)), a == b);
    }

    // Integral floats equal their integer counterpart.
    #[test]
    fn integral_floats_equal_integers(n in -1_000_000i64..1_000_000) {
        let float = Number::from_f64(n as f64).unwrap();
        prop_assert!(numbers_equal(&Number::from(n), &float));
        prop_assert!(numbers_equal(&float, &Number::from(n)));
    }

    // Integers beyond 2^53 only equal the float that represents them exactly.
    #[test]
    fn large_integers_do_not_equal_rounded_floats(n in (1i64 << 53)..i64::MAX) {
        let float = n as f64;
        let expected = float < i64::MAX as f64 && float as i64 == n;
        prop_assert_eq!(
            numbers_equal(&Number::from(n), &Number::from_f64(float).unwrap()),
            expected
        );
    }

    #[test]
    fn equality_is_symmetric(a in any::<i64>(), b in -1.0e3f64..1.0e3) {
        let x = Number::from(a);
        let y = Number::from_f64(b).unwrap();
        prop_assert_eq!(numbers_equal(&x, &y), numbers_equal(&y, &x));
    }

    #[test]
    fn negative_never_equals_huge_unsigned(a in i64::MIN..0, b in (i64::MAX as u64 + 1)..=u64::MAX) {
        prop_assert!(!numbers_equal(&Number::from(a), &Number::from(b)));
    }
}
