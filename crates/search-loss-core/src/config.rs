use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::SearchLossError;
use crate::estimator::InputSet;
use crate::formatting::DisplayPreferences;
use crate::presentation::CtaUrls;
use crate::sanitize::RateControls;
use crate::SearchLossResult;

/// Starting state of a calculator session. Every section may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub defaults: InputSet,
    pub preferences: DisplayPreferences,
    pub controls: RateControls,
    pub cta_urls: CtaUrls,
}

impl CalculatorConfig {
    pub fn from_json_str(s: &str) -> SearchLossResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(s: &str) -> SearchLossResult<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SearchLossResult<()> {
        self.controls.validate()?;

        let non_negative = [
            ("defaults.avg_order_value", self.defaults.avg_order_value),
            (
                "defaults.avg_additional_item_value",
                self.defaults.avg_additional_item_value,
            ),
            ("defaults.search_usage_pct", self.defaults.search_usage_pct),
            (
                "defaults.unsuccessful_search_rate_pct",
                self.defaults.unsuccessful_search_rate_pct,
            ),
            ("defaults.conversion_rate_pct", self.defaults.conversion_rate_pct),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(SearchLossError::InvalidInput {
                    field: field.into(),
                    reason: format!("cannot be negative, got {value}"),
                });
            }
        }

        for (field, url) in [
            ("cta_urls.domestic", &self.cta_urls.domestic),
            ("cta_urls.international", &self.cta_urls.international),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(SearchLossError::InvalidInput {
                    field: field.into(),
                    reason: format!("expected an http(s) URL, got '{url}'"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::{Locale, PeriodMode};
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = CalculatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = r#"
preferences:
  locale: international
  period: annual
controls:
  conversion_rate:
    min: "1"
    max: "10"
    step: "0.5"
"#;
        let config = CalculatorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.preferences.locale, Locale::International);
        assert_eq!(config.preferences.period, PeriodMode::Annual);
        assert_eq!(config.controls.conversion_rate.max, dec!(10));
        assert_eq!(config.controls.search_usage.max, dec!(50));
        assert_eq!(config.defaults, InputSet::default());
    }

    #[test]
    fn test_partial_defaults_keep_builtin_figures() {
        let config = CalculatorConfig::from_json_str(r#"{"defaults": {"monthly_visitors": 5000}}"#)
            .unwrap();
        assert_eq!(
            config.defaults,
            InputSet {
                monthly_visitors: 5000,
                ..InputSet::default()
            }
        );

        let config = CalculatorConfig::from_yaml_str("defaults:\n  avg_order_value: \"90\"\n").unwrap();
        assert_eq!(config.defaults.avg_order_value, dec!(90));
        assert_eq!(config.defaults.monthly_visitors, 1_100_000);
    }

    #[test]
    fn test_invalid_control_is_rejected() {
        let json = r#"{"controls": {"search_usage": {"min": "10", "max": "5", "step": "1"}}}"#;
        match CalculatorConfig::from_json_str(json) {
            Err(SearchLossError::InvalidInput { field, .. }) => {
                assert_eq!(field, "controls.search_usage")
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_url_is_rejected() {
        let json = r#"{"cta_urls": {"international": "mailto:sales@example.com"}}"#;
        assert!(CalculatorConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_malformed_document_is_serialization_error() {
        match CalculatorConfig::from_json_str("{not json") {
            Err(SearchLossError::SerializationError(_)) => {}
            other => panic!("Expected SerializationError, got {other:?}"),
        }
    }
}
