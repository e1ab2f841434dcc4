use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::error::SearchLossError;
use crate::estimator::input::InputSet;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::SearchLossResult;

/// Each unsuccessful search session is assumed to cost two conversions.
pub const LOST_SESSION_MULTIPLIER: Decimal = dec!(2);

/// Additional items assumed to ride along with each lost order.
pub const ATTACH_ITEMS_PER_ORDER: Decimal = dec!(3);

pub const MONTHS_PER_YEAR: Decimal = dec!(12);

const PERCENT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Estimated revenue lost to unsuccessful site search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EstimateResult {
    pub monthly_loss: Money,
    /// Always `monthly_loss * 12`.
    pub annual_loss: Money,
}

/// Intermediate quantities of the estimate.
///
/// Intermediates saturate at the Decimal range; `capped` is set when the
/// monthly figure was held at [`max_monthly_loss`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LossBreakdown {
    pub visitors_using_search: Decimal,
    pub lost_conversions: Decimal,
    pub lost_order_revenue: Money,
    pub lost_attach_revenue: Money,
    pub monthly_loss: Money,
    pub annual_loss: Money,
    #[serde(default)]
    pub capped: bool,
}

impl LossBreakdown {
    pub fn result(&self) -> EstimateResult {
        EstimateResult {
            monthly_loss: self.monthly_loss,
            annual_loss: self.annual_loss,
        }
    }
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

/// Estimate monthly and annual revenue lost to unsuccessful searches.
///
/// Pure and total: zero inputs give zero loss, out-of-range percentages
/// are used as given, and a computation that leaves the Decimal range
/// is held at [`max_monthly_loss`] rather than panicking. The result never
/// decreases when an input grows.
pub fn estimate(input: &InputSet) -> EstimateResult {
    estimate_breakdown(input).result()
}

/// Same as [`estimate`], keeping every intermediate step.
///
/// visitors_using_search = visitors * usage / 100
/// lost_conversions      = visitors_using_search * unsuccessful / 100 * conversion / 100 * 2
/// lost_order_revenue    = lost_conversions * avg_order_value
/// lost_attach_revenue   = lost_conversions * avg_additional_item_value * 3
/// monthly_loss          = lost_order_revenue + lost_attach_revenue
/// annual_loss           = monthly_loss * 12
pub fn estimate_breakdown(input: &InputSet) -> LossBreakdown {
    let visitors = Decimal::from(input.monthly_visitors);
    let visitors_using_search = visitors.saturating_mul(input.search_usage_pct / PERCENT);

    let lost_conversions = visitors_using_search
        .saturating_mul(input.unsuccessful_search_rate_pct / PERCENT)
        .saturating_mul(input.conversion_rate_pct / PERCENT)
        .saturating_mul(LOST_SESSION_MULTIPLIER);

    let lost_order_revenue = lost_conversions.saturating_mul(input.avg_order_value);
    let lost_attach_revenue = lost_conversions
        .saturating_mul(input.avg_additional_item_value)
        .saturating_mul(ATTACH_ITEMS_PER_ORDER);

    let cap = max_monthly_loss();
    let uncapped = lost_order_revenue.saturating_add(lost_attach_revenue);
    let monthly_loss = uncapped.max(-cap).min(cap);

    LossBreakdown {
        visitors_using_search,
        lost_conversions,
        lost_order_revenue,
        lost_attach_revenue,
        monthly_loss,
        // |monthly_loss| <= cap, so this cannot leave the range.
        annual_loss: monthly_loss * MONTHS_PER_YEAR,
        capped: uncapped != monthly_loss,
    }
}

/// Largest monthly loss whose annual projection is still representable.
pub fn max_monthly_loss() -> Money {
    (Decimal::MAX / MONTHS_PER_YEAR).trunc()
}

/// Wrap the estimate in the standard computation envelope.
///
/// Negative money or percentage fields are rejected here because a JSON
/// document can carry them; percentages above 100 only produce a warning.
pub fn calculate_search_loss(
    input: &InputSet,
) -> SearchLossResult<ComputationOutput<LossBreakdown>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    for (name, pct) in [
        ("search_usage_pct", input.search_usage_pct),
        ("unsuccessful_search_rate_pct", input.unsuccessful_search_rate_pct),
        ("conversion_rate_pct", input.conversion_rate_pct),
    ] {
        if pct > PERCENT {
            warnings.push(format!(
                "{name} of {pct} exceeds 100%; the estimate scales proportionally"
            ));
        }
    }

    let output = estimate_breakdown(input);
    if output.capped {
        warnings.push(format!(
            "Estimate exceeds the representable range; capped at {}",
            output.monthly_loss
        ));
    }

    if output.monthly_loss.is_zero() && warnings.is_empty() {
        warnings.push("Estimated loss is zero: at least one input is zero".to_string());
    }

    debug!(
        monthly_loss = %output.monthly_loss,
        annual_loss = %output.annual_loss,
        warnings = warnings.len(),
        "search loss estimated"
    );

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Unsuccessful-search revenue loss (2x lost sessions, 3 attach items per order)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &InputSet) -> SearchLossResult<()> {
    let checks = [
        ("search_usage_pct", input.search_usage_pct),
        ("unsuccessful_search_rate_pct", input.unsuccessful_search_rate_pct),
        ("conversion_rate_pct", input.conversion_rate_pct),
        ("avg_order_value", input.avg_order_value),
        ("avg_additional_item_value", input.avg_additional_item_value),
    ];
    for (field, value) in checks {
        if value < Decimal::ZERO {
            return Err(SearchLossError::InvalidInput {
                field: field.into(),
                reason: format!("cannot be negative, got {value}"),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
