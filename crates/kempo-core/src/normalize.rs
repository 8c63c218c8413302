//! Numeric normalization of premium figures.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use kempo_ingest::starts_with_nonzero_digit;

/// Rounds a decimal string to one fractional digit.
///
/// Strings containing a `.` are parsed as decimals (surrounding whitespace
/// ignored) and rounded half to even;
/// anything else is returned unchanged, so integer figures and placeholders
/// such as `"-"` pass through.
pub fn fix_decimal(value: &str) -> Result<String, rust_decimal::Error> {
    if !value.contains('.') {
        return Ok(value.to_string());
    }
    let mut rounded = Decimal::from_str(value.trim())?
        .round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(1);
    Ok(rounded.to_string())
}

/// Like [`fix_decimal`], but only for cells holding a positive figure.
pub fn positive_decimal(value: &str) -> Result<Option<String>, rust_decimal::Error> {
    if starts_with_nonzero_digit(value) {
        fix_decimal(value).map(Some)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rounds_to_one_fractional_digit() {
        assert_eq!(fix_decimal("12345.67").unwrap(), "12345.7");
        assert_eq!(fix_decimal("5788.40").unwrap(), "5788.4");
        assert_eq!(fix_decimal("16104.00").unwrap(), "16104.0");
        assert_eq!(fix_decimal("0.04").unwrap(), "0.0");
        assert_eq!(fix_decimal("3.5").unwrap(), "3.5");
        assert_eq!(fix_decimal(" 2894.20 ").unwrap(), "2894.2");
    }

    #[test]
    fn rounds_half_to_even() {
        assert_eq!(fix_decimal("12345.65").unwrap(), "12345.6");
        assert_eq!(fix_decimal("12345.75").unwrap(), "12345.8");
        assert_eq!(fix_decimal("2.25").unwrap(), "2.2");
        assert_eq!(fix_decimal("2.251").unwrap(), "2.3");
    }

    #[test]
    fn passes_through_values_without_point() {
        assert_eq!(fix_decimal("5788").unwrap(), "5788");
        assert_eq!(fix_decimal("-").unwrap(), "-");
        assert_eq!(fix_decimal("0").unwrap(), "0");
    }

    #[test]
    fn rejects_malformed_decimals() {
        assert!(fix_decimal("1.2.3").is_err());
        assert!(fix_decimal("約1.5").is_err());
    }

    #[test]
    fn positive_decimal_nulls_non_positive_cells() {
        assert_eq!(positive_decimal("16104.00").unwrap().as_deref(), Some("16104.0"));
        assert_eq!(positive_decimal("0.5").unwrap(), None);
        assert_eq!(positive_decimal("-").unwrap(), None);
        assert_eq!(positive_decimal("※").unwrap(), None);
    }

    proptest! {
        #[test]
        fn rounded_values_have_one_fractional_digit(whole in 0u32..10_000_000, frac in 0u32..10_000) {
            let input = format!("{whole}.{frac:04}");
            let output = fix_decimal(&input).unwrap();
            let (int_part, frac_part) = output.split_once('.').unwrap();
            prop_assert_eq!(frac_part.len(), 1);
            let diff = (Decimal::from_str(&output).unwrap() - Decimal::from_str(&input).unwrap()).abs();
            prop_assert!(diff <= Decimal::new(5, 2));
            prop_assert!(int_part.parse::<u64>().is_ok());
        }

        #[test]
        fn rounding_is_idempotent(whole in 0u32..10_000_000, frac in 0u32..100) {
            let once = fix_decimal(&format!("{whole}.{frac:02}")).unwrap();
            prop_assert_eq!(fix_decimal(&once).unwrap(), once.clone());
        }
    }
}
