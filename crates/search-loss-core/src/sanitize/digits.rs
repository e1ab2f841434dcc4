use rust_decimal::Decimal;

use crate::types::Money;

/// Keep only ASCII digits and read them as a base-10 count.
///
/// Signs, separators and decimal points are dropped rather than honoured,
/// so `"1.234.567"`, `"1,234,567abc"` and `"-1234567"` all give 1234567.
/// An empty result is 0; a digit run too long for `u64` saturates.
pub fn sanitize_count(raw: &str) -> u64 {
    raw.bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, d| {
            acc.saturating_mul(10).saturating_add(u64::from(d - b'0'))
        })
}

/// Digit-only rule for the order-value fields.
pub fn sanitize_money(raw: &str) -> Money {
    Decimal::from(sanitize_count(raw))
}

/// A numeric control value landing on a count field: truncated toward
/// zero, negatives and non-finite values give 0.
pub fn sanitize_count_value(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // `as` saturates at u64::MAX
    value.trunc() as u64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
