use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchLossError;
use crate::estimator::EstimateResult;
use crate::types::Money;

/// The two supported number and currency conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// pt-BR, Brazilian real
    #[default]
    Domestic,
    /// en-US, US dollar
    International,
}

/// Separators and currency symbol of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConventions {
    pub tag: &'static str,
    pub currency_code: &'static str,
    pub currency_symbol: &'static str,
    /// Placed between symbol and amount (`R$ 10` vs `$10`).
    pub symbol_separator: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
}

const DOMESTIC: LocaleConventions = LocaleConventions {
    tag: "pt-BR",
    currency_code: "BRL",
    currency_symbol: "R$",
    symbol_separator: "\u{a0}",
    group_separator: '.',
    decimal_separator: ',',
};

const INTERNATIONAL: LocaleConventions = LocaleConventions {
    tag: "en-US",
    currency_code: "USD",
    currency_symbol: "$",
    symbol_separator: "",
    group_separator: ',',
    decimal_separator: '.',
};

impl Locale {
    pub fn conventions(self) -> &'static LocaleConventions {
        match self {
            Locale::Domestic => &DOMESTIC,
            Locale::International => &INTERNATIONAL,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::Domestic => Locale::International,
            Locale::International => Locale::Domestic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Domestic => "domestic",
            Locale::International => "international",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = SearchLossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "domestic" | "pt-br" | "pt" | "brl" => Ok(Locale::Domestic),
            "international" | "en-us" | "en" | "usd" => Ok(Locale::International),
            _ => Err(SearchLossError::UnknownLocale(s.to_string())),
        }
    }
}

/// Which side of the estimate the result display shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodMode {
    #[default]
    Monthly,
    Annual,
}

impl PeriodMode {
    pub fn toggled(self) -> Self {
        match self {
            PeriodMode::Monthly => PeriodMode::Annual,
            PeriodMode::Annual => PeriodMode::Monthly,
        }
    }

    /// Pick the precomputed figure for this period; never recomputes.
    pub fn select(self, result: &EstimateResult) -> Money {
        match self {
            PeriodMode::Monthly => result.monthly_loss,
            PeriodMode::Annual => result.annual_loss,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PeriodMode::Monthly => "monthly",
            PeriodMode::Annual => "annual",
        }
    }
}

impl fmt::Display for PeriodMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodMode {
    type Err = SearchLossError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" | "mensal" => Ok(PeriodMode::Monthly),
            "annual" | "yearly" | "year" | "anual" => Ok(PeriodMode::Annual),
            _ => Err(SearchLossError::UnknownPeriod(s.to_string())),
        }
    }
}

/// UI toggles. Independent of the inputs and of the estimate values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    pub period: PeriodMode,
    pub locale: Locale,
}

impl DisplayPreferences {
    pub fn toggle_period(&mut self) {
        self.period = self.period.toggled();
    }

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }
}
