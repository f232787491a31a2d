//! Common helpers shared by the calculation steps and their presentation.
//!
//! Calculations never round; [`round_half_up`] and the formatting functions
//! exist for display only.

use rust_decimal::{Decimal, RoundingStrategy};

/// Applies a percentage rate to an amount: `amount * rate / 100`.
///
/// The rate is scaled down first, so the result only overflows when the
/// true value does not fit in a [`Decimal`]. Returns `None` in that case.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use fiscal_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(400000000), dec!(3)), Some(dec!(12000000)));
/// assert_eq!(percent_of(dec!(1000), dec!(2.5)), Some(dec!(25)));
/// assert_eq!(percent_of(Decimal::MAX, dec!(200)), None);
/// ```
pub fn percent_of(
    amount: Decimal,
    rate: Decimal,
) -> Option<Decimal> {
    rate.checked_div(Decimal::ONE_HUNDRED)
        .and_then(|fraction| amount.checked_mul(fraction))
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fiscal_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as currency with thousands separators and two decimals.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fiscal_core::calculations::common::format_currency;
///
/// assert_eq!(format_currency(dec!(12600000)), "$12,600,000.00");
/// assert_eq!(format_currency(dec!(-1234.565)), "-$1,234.57");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    format!("{sign}${}.{fraction}", group_thousands(whole))
}

/// Formats an amount as whole currency units with thousands separators.
///
/// Fractions are rounded half-up to the nearest unit.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use fiscal_core::calculations::common::format_whole_currency;
///
/// assert_eq!(format_whole_currency(dec!(450000000)), "$450,000,000");
/// ```
pub fn format_whole_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let text = rounded.abs().trunc().to_string();
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };

    format!("{sign}${}", group_thousands(&text))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_applies_percentage() {
        assert_eq!(percent_of(dec!(5000000000), dec!(5)), Some(dec!(250000000)));
    }

    #[test]
    fn percent_of_handles_zero_rate() {
        assert_eq!(percent_of(dec!(123456), dec!(0)), Some(dec!(0)));
    }

    #[test]
    fn percent_of_keeps_fractions() {
        assert_eq!(percent_of(dec!(333), dec!(1)), Some(dec!(3.33)));
    }

    #[test]
    fn percent_of_huge_amount_at_small_rate_fits() {
        // amount * rate alone would overflow; the result itself does not
        assert_eq!(
            percent_of(dec!(20000000000000000000000000000), dec!(5)),
            Some(dec!(1000000000000000000000000000))
        );
    }

    #[test]
    fn percent_of_reports_overflow() {
        assert_eq!(percent_of(Decimal::MAX, dec!(101)), None);
    }

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
    }

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(0.124)), dec!(0.12));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(200000.00)), dec!(200000.00));
    }

    // =========================================================================
    // format tests
    // =========================================================================

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(4600000)), "$4,600,000.00");
    }

    #[test]
    fn format_currency_small_values_have_no_separator() {
        assert_eq!(format_currency(dec!(999.9)), "$999.90");
    }

    #[test]
    fn format_currency_zero() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
    }

    #[test]
    fn format_currency_rounds_half_up() {
        assert_eq!(format_currency(dec!(1000.005)), "$1,000.01");
    }

    #[test]
    fn format_currency_negative_values() {
        assert_eq!(format_currency(dec!(-200000)), "-$200,000.00");
    }

    #[test]
    fn format_whole_currency_groups_thousands() {
        assert_eq!(format_whole_currency(dec!(4500000000)), "$4,500,000,000");
    }

    #[test]
    fn format_whole_currency_rounds_fractions() {
        assert_eq!(format_whole_currency(dec!(999.5)), "$1,000");
    }

    #[test]
    fn format_whole_currency_three_digits() {
        assert_eq!(format_whole_currency(dec!(100)), "$100");
    }
}
