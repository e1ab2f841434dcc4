use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchLossError;
use crate::types::{Money, Rate};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The six figures a shop enters about its site search.
///
/// Omitted fields deserialize to the [`Default`] figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSet {
    /// Visitors per month
    pub monthly_visitors: u64,
    /// Share of visitors who use site search, out of 100
    pub search_usage_pct: Rate,
    /// Share of searches that end on an empty results page, out of 100
    pub unsuccessful_search_rate_pct: Rate,
    /// Store-wide conversion rate, out of 100
    pub conversion_rate_pct: Rate,
    /// Average order value
    pub avg_order_value: Money,
    /// Average value of one additional item added to an order
    pub avg_additional_item_value: Money,
}

impl Default for InputSet {
    fn default() -> Self {
        Self {
            monthly_visitors: 1_100_000,
            search_usage_pct: dec!(30),
            unsuccessful_search_rate_pct: dec!(10),
            conversion_rate_pct: dec!(2),
            avg_order_value: dec!(160),
            avg_additional_item_value: dec!(15),
        }
    }
}

/// Logical input fields of the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    MonthlyVisitors,
    SearchUsage,
    UnsuccessfulSearchRate,
    ConversionRate,
    AvgOrderValue,
    AvgAdditionalItemValue,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::MonthlyVisitors,
        Field::SearchUsage,
        Field::UnsuccessfulSearchRate,
        Field::ConversionRate,
        Field::AvgOrderValue,
        Field::AvgAdditionalItemValue,
    ];

    /// Free-text fields that only honour digits.
    pub fn is_count(self) -> bool {
        matches!(
            self,
            Field::MonthlyVisitors | Field::AvgOrderValue | Field::AvgAdditionalItemValue
        )
    }

    /// Fields driven by a bounded slider or stepper.
    pub fn is_rate(self) -> bool {
        !self.is_count()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::MonthlyVisitors => "monthly_visitors",
            Field::SearchUsage => "search_usage",
            Field::UnsuccessfulSearchRate => "unsuccessful_search_rate",
            Field::ConversionRate => "conversion_rate",
            Field::AvgOrderValue => "avg_order_value",
            Field::AvgAdditionalItemValue => "avg_additional_item_value",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = SearchLossError;

    /// Accepts the snake_case name plus the short CLI spellings
    /// (`visitors`, `search-usage`, `order-value`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        match key.as_str() {
            "monthly_visitors" | "visitors" => Ok(Field::MonthlyVisitors),
            "search_usage" | "usage" => Ok(Field::SearchUsage),
            "unsuccessful_search_rate" | "unsuccessful_rate" | "unsuccessful" => {
                Ok(Field::UnsuccessfulSearchRate)
            }
            "conversion_rate" | "conversion" => Ok(Field::ConversionRate),
            "avg_order_value" | "order_value" | "aov" => Ok(Field::AvgOrderValue),
            "avg_additional_item_value" | "item_value" | "additional_item_value" => {
                Ok(Field::AvgAdditionalItemValue)
            }
            _ => Err(SearchLossError::UnknownField(s.to_string())),
        }
    }
}

impl InputSet {
    /// Current value of a field as a Decimal, for display.
    pub fn value(&self, field: Field) -> Decimal {
        match field {
            Field::MonthlyVisitors => Decimal::from(self.monthly_visitors),
            Field::SearchUsage => self.search_usage_pct,
            Field::UnsuccessfulSearchRate => self.unsuccessful_search_rate_pct,
            Field::ConversionRate => self.conversion_rate_pct,
            Field::AvgOrderValue => self.avg_order_value,
            Field::AvgAdditionalItemValue => self.avg_additional_item_value,
        }
    }

    /// Replace a single Decimal-valued field. Visitors are set through
    /// `monthly_visitors` directly.
    pub(crate) fn set_decimal(&mut self, field: Field, value: Decimal) {
        match field {
            Field::MonthlyVisitors => {}
            Field::SearchUsage => self.search_usage_pct = value,
            Field::UnsuccessfulSearchRate => self.unsuccessful_search_rate_pct = value,
            Field::ConversionRate => self.conversion_rate_pct = value,
            Field::AvgOrderValue => self.avg_order_value = value,
            Field::AvgAdditionalItemValue => self.avg_additional_item_value = value,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
