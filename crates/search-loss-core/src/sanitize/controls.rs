use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::SearchLossError;
use crate::estimator::Field;
use crate::types::Rate;
use crate::SearchLossResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Range and granularity of a slider or stepper feeding a percentage field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateControl {
    pub min: Rate,
    pub max: Rate,
    pub step: Rate,
}

/// One control per percentage field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateControls {
    pub search_usage: RateControl,
    pub unsuccessful_search_rate: RateControl,
    pub conversion_rate: RateControl,
}

impl Default for RateControls {
    fn default() -> Self {
        Self {
            search_usage: RateControl::new(dec!(0), dec!(50), dec!(1)),
            unsuccessful_search_rate: RateControl::new(dec!(0), dec!(30), dec!(1)),
            conversion_rate: RateControl::new(dec!(0.5), dec!(5), dec!(0.1)),
        }
    }
}

impl RateControls {
    /// Control for a percentage field; count fields have none.
    pub fn for_field(&self, field: Field) -> Option<&RateControl> {
        match field {
            Field::SearchUsage => Some(&self.search_usage),
            Field::UnsuccessfulSearchRate => Some(&self.unsuccessful_search_rate),
            Field::ConversionRate => Some(&self.conversion_rate),
            _ => None,
        }
    }

    pub fn validate(&self) -> SearchLossResult<()> {
        self.search_usage.validate("controls.search_usage")?;
        self.unsuccessful_search_rate
            .validate("controls.unsuccessful_search_rate")?;
        self.conversion_rate.validate("controls.conversion_rate")
    }
}

impl RateControl {
    pub const fn new(min: Rate, max: Rate, step: Rate) -> Self {
        Self { min, max, step }
    }

    /// Accept a numeric value the way the control would: clamp to the
    /// range and snap to the nearest step counted from `min`.
    ///
    /// NaN and infinities degrade to 0 without touching the range.
    pub fn accept(&self, value: f64) -> Rate {
        if !value.is_finite() {
            return Decimal::ZERO;
        }
        match Decimal::from_f64(value) {
            Some(d) => self.accept_decimal(d),
            // finite but beyond Decimal range
            None if value > 0.0 => self.max,
            None => self.min,
        }
    }

    /// A step count beyond the Decimal range leaves the clamped value
    /// unsnapped.
    pub fn accept_decimal(&self, value: Rate) -> Rate {
        let clamped = value.max(self.min).min(self.max);
        if self.step <= Decimal::ZERO {
            return clamped.normalize();
        }
        self.snap(clamped).unwrap_or(clamped).min(self.max).normalize()
    }

    fn snap(&self, clamped: Rate) -> Option<Rate> {
        let steps = clamped
            .checked_sub(self.min)?
            .checked_div(self.step)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        self.min.checked_add(steps.checked_mul(self.step)?)
    }

    pub fn contains(&self, value: Rate) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn validate(&self, field: &str) -> SearchLossResult<()> {
        if self.min > self.max {
            return Err(SearchLossError::InvalidInput {
                field: field.into(),
                reason: format!("min {} exceeds max {}", self.min, self.max),
            });
        }
        if self.step <= Decimal::ZERO {
            return Err(SearchLossError::InvalidInput {
                field: field.into(),
                reason: format!("step must be positive, got {}", self.step),
            });
        }
        if self.min < Decimal::ZERO {
            return Err(SearchLossError::InvalidInput {
                field: field.into(),
                reason: format!("min cannot be negative, got {}", self.min),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Text input
// ---------------------------------------------------------------------------

/// Read the longest leading decimal number in `raw`, ignoring leading
/// whitespace: `"2.5%"` is 2.5, `"-3e2x"` is -300, `"abc"` is `None`.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }

    // exponent only counts when digits follow it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Stepper text for a percentage field, passed through its control.
pub fn sanitize_rate_text(raw: &str, control: &RateControl) -> Rate {
    control.accept(parse_float_prefix(raw).unwrap_or(f64::NAN))
}

/// [`sanitize_rate_text`] that also reads `decimal_separator` as the
/// decimal point, so a displayed `2,5` types back in as 2.5.
pub fn sanitize_localized_rate_text(
    raw: &str,
    control: &RateControl,
    decimal_separator: char,
) -> Rate {
    if decimal_separator == '.' {
        return sanitize_rate_text(raw, control);
    }
    sanitize_rate_text(&raw.replace(decimal_separator, "."), control)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
