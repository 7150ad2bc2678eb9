// Property-based tests for major-to-minor unit conversion
//
// Amounts are sent to iPay88 as integer sen with no fractional part.
// Conversion is exact decimal arithmetic, rounding half away from zero.

use ipay88_bridge::core::Currency;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn minor(amount: Decimal) -> Option<String> {
    Currency::MYR.to_minor_units(amount).map(|m| m.to_string())
}

#[test]
fn test_documented_examples() {
    assert_eq!(minor(dec!(100.00)).as_deref(), Some("10000"));
    assert_eq!(minor(dec!(1)).as_deref(), Some("100"));
    assert_eq!(minor(dec!(12.34)).as_deref(), Some("1234"));
    assert_eq!(minor(dec!(0.005)).as_deref(), Some("1"));
}

#[test]
fn test_no_fractional_part_is_ever_rendered() {
    for amount in [dec!(0.015), dec!(2.675), dec!(99.999), dec!(10.5000)] {
        let rendered = minor(amount).unwrap();
        assert!(rendered.chars().all(|c| c.is_ascii_digit()), "{}", rendered);
    }
}

proptest! {
    #[test]
    fn test_two_decimal_amounts_convert_exactly(cents in 0i64..1_000_000_000_000i64) {
        let amount = Decimal::new(cents, 2);

        prop_assert_eq!(minor(amount), Some(cents.to_string()));
    }

    #[test]
    fn test_whole_amounts_gain_two_zeros(ringgit in 0u64..1_000_000_000u64) {
        let amount = Decimal::from(ringgit);

        prop_assert_eq!(minor(amount), Some((ringgit * 100).to_string()));
    }

    #[test]
    fn test_third_decimal_rounds_half_up(mills in 0i64..1_000_000_000i64) {
        // mills of a ringgit = tenths of a sen
        let amount = Decimal::new(mills, 3);
        let expected = (mills + 5) / 10;

        prop_assert_eq!(minor(amount), Some(expected.to_string()));
    }

    #[test]
    fn test_negative_amounts_are_refused(cents in 1i64..1_000_000_000i64) {
        prop_assert_eq!(minor(Decimal::new(-cents, 2)), None);
    }
}
