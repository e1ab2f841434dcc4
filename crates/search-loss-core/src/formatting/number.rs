use rust_decimal::{Decimal, RoundingStrategy};

use crate::formatting::locale::Locale;
use crate::types::{Money, Rate};

/// Currency string with zero fractional digits.
///
/// Rounds half away from zero for display only:
/// `270600` → `R$\u{a0}270.600` (domestic) or `$270,600` (international).
pub fn format_currency(amount: Money, locale: Locale) -> String {
    let conv = locale.conventions();
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!(
        "{sign}{}{}{}",
        conv.currency_symbol,
        conv.symbol_separator,
        group_digits(&rounded.abs().trunc().to_string(), conv.group_separator)
    )
}

/// Whole number with the locale's thousands separator and no symbol.
pub fn format_grouped_number(amount: Decimal, locale: Locale) -> String {
    let conv = locale.conventions();
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!(
        "{sign}{}",
        group_digits(&rounded.abs().trunc().to_string(), conv.group_separator)
    )
}

/// Percentage value as stored, trailing zeros dropped: `2,5` / `2.5`.
///
/// Rates are already snapped to their control's step, so no rounding
/// happens here and the text reads back to the same value.
pub fn format_rate(rate: Rate, locale: Locale) -> String {
    let conv = locale.conventions();
    let value = rate.normalize();
    let sign = if value < Decimal::ZERO { "-" } else { "" };
    let text = value.abs().to_string();
    match text.split_once('.') {
        Some((int, frac)) => format!(
            "{sign}{}{}{frac}",
            group_digits(int, conv.group_separator),
            conv.decimal_separator
        ),
        None => format!("{sign}{}", group_digits(&text, conv.group_separator)),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_domestic() {
        assert_eq!(format_currency(dec!(270600), Locale::Domestic), "R$\u{a0}270.600");
        assert_eq!(
            format_currency(dec!(3247200), Locale::Domestic),
            "R$\u{a0}3.247.200"
        );
    }

    #[test]
    fn test_currency_international() {
        assert_eq!(format_currency(dec!(270600), Locale::International), "$270,600");
        assert_eq!(format_currency(dec!(999), Locale::International), "$999");
    }

    #[test]
    fn test_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(1234.5), Locale::International), "$1,235");
        assert_eq!(format_currency(dec!(1234.49), Locale::International), "$1,234");
        assert_eq!(format_currency(dec!(-1234.5), Locale::International), "-$1,235");
    }

    #[test]
    fn test_currency_zero_and_negative_zero() {
        assert_eq!(format_currency(Decimal::ZERO, Locale::Domestic), "R$\u{a0}0");
        assert_eq!(format_currency(dec!(-0.2), Locale::International), "$0");
    }

    #[test]
    fn test_grouped_number() {
        assert_eq!(format_grouped_number(dec!(1100000), Locale::Domestic), "1.100.000");
        assert_eq!(
            format_grouped_number(dec!(1100000), Locale::International),
            "1,100,000"
        );
        assert_eq!(format_grouped_number(dec!(100), Locale::Domestic), "100");
        assert_eq!(format_grouped_number(dec!(1000), Locale::Domestic), "1.000");
        assert_eq!(
            format_grouped_number(Decimal::from(u64::MAX), Locale::International),
            "18,446,744,073,709,551,615"
        );
    }

    #[test]
    fn test_rate() {
        assert_eq!(format_rate(dec!(2.5), Locale::Domestic), "2,5");
        assert_eq!(format_rate(dec!(2.5), Locale::International), "2.5");
        assert_eq!(format_rate(dec!(30), Locale::Domestic), "30");
        assert_eq!(format_rate(dec!(2.0), Locale::International), "2");
        assert_eq!(format_rate(dec!(0.25), Locale::International), "0.25");
        assert_eq!(format_rate(dec!(1.23), Locale::Domestic), "1,23");
    }

    #[test]
    fn test_group_digits_boundaries() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("123456", '.'), "123.456");
    }
}
