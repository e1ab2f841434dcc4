//! A single interactive calculator session.
//!
//! The session owns the current [`InputSet`] and [`DisplayPreferences`].
//! Every [`SessionEvent`] mutates at most one of them and is followed by a
//! full re-render; the estimate is recomputed from scratch each time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::estimator::{estimate, EstimateResult, Field, InputSet};
use crate::formatting::{DisplayPreferences, Locale, PeriodMode};
use crate::presentation::{render_view, RenderedView};
use crate::sanitize::{
    sanitize_count, sanitize_count_value, sanitize_localized_rate_text, sanitize_money,
};

/// One user interaction with the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Text typed into a field.
    Edit { field: Field, raw: String },
    /// Numeric value from a slider or stepper.
    Slide { field: Field, value: f64 },
    TogglePeriod,
    ToggleLocale,
    SetPeriod { period: PeriodMode },
    SetLocale { locale: Locale },
}

#[derive(Debug, Clone)]
pub struct Session {
    config: CalculatorConfig,
    input: InputSet,
    prefs: DisplayPreferences,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl Session {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            input: config.defaults.clone(),
            prefs: config.preferences,
            config,
        }
    }

    pub fn input(&self) -> &InputSet {
        &self.input
    }

    pub fn preferences(&self) -> DisplayPreferences {
        self.prefs
    }

    /// Fresh estimate of the current inputs.
    pub fn estimate(&self) -> EstimateResult {
        estimate(&self.input)
    }

    pub fn render(&self) -> RenderedView {
        render_view(&self.input, self.prefs, &self.config.cta_urls)
    }

    /// Update, then render.
    pub fn apply(&mut self, event: SessionEvent) -> RenderedView {
        debug!(?event, "applying session event");
        match event {
            SessionEvent::Edit { field, raw } => self.edit(field, &raw),
            SessionEvent::Slide { field, value } => self.slide(field, value),
            SessionEvent::TogglePeriod => self.prefs.toggle_period(),
            SessionEvent::ToggleLocale => self.prefs.toggle_locale(),
            SessionEvent::SetPeriod { period } => self.prefs.period = period,
            SessionEvent::SetLocale { locale } => self.prefs.locale = locale,
        }
        self.render()
    }

    /// Replace one field from raw text. Never fails; bad text becomes 0.
    pub fn edit(&mut self, field: Field, raw: &str) {
        match field {
            Field::MonthlyVisitors => self.input.monthly_visitors = sanitize_count(raw),
            Field::AvgOrderValue | Field::AvgAdditionalItemValue => {
                self.input.set_decimal(field, sanitize_money(raw))
            }
            _ => {
                let value = self
                    .config
                    .controls
                    .for_field(field)
                    .map(|control| {
                        let separator = self.prefs.locale.conventions().decimal_separator;
                        sanitize_localized_rate_text(raw, control, separator)
                    })
                    .unwrap_or(Decimal::ZERO);
                self.input.set_decimal(field, value);
            }
        }
        debug!(%field, value = %self.input.value(field), "field updated");
    }

    /// Replace one field from a control's numeric value.
    pub fn slide(&mut self, field: Field, value: f64) {
        match field {
            Field::MonthlyVisitors => self.input.monthly_visitors = sanitize_count_value(value),
            Field::AvgOrderValue | Field::AvgAdditionalItemValue => self
                .input
                .set_decimal(field, Decimal::from(sanitize_count_value(value))),
            _ => {
                let value = self
                    .config
                    .controls
                    .for_field(field)
                    .map(|control| control.accept(value))
                    .unwrap_or(Decimal::ZERO);
                self.input.set_decimal(field, value);
            }
        }
        debug!(%field, value = %self.input.value(field), "field updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_edit_replaces_exactly_one_field() {
        let mut session = Session::default();
        session.edit(Field::MonthlyVisitors, "2.000.000");
        assert_eq!(
            session.input(),
            &InputSet {
                monthly_visitors: 2_000_000,
                ..InputSet::default()
            }
        );
    }

    #[test]
    fn test_invalid_text_degrades_to_zero() {
        let mut session = Session::default();
        session.edit(Field::AvgOrderValue, "abc");
        assert_eq!(session.input().avg_order_value, Decimal::ZERO);
        session.edit(Field::SearchUsage, "");
        assert_eq!(session.input().search_usage_pct, Decimal::ZERO);
    }

    #[test]
    fn test_slide_goes_through_control() {
        let mut session = Session::default();
        session.slide(Field::ConversionRate, 7.3);
        assert_eq!(session.input().conversion_rate_pct, dec!(5));
        session.slide(Field::SearchUsage, f64::NAN);
        assert_eq!(session.input().search_usage_pct, Decimal::ZERO);
    }

    #[test]
    fn test_slide_on_count_field_truncates() {
        let mut session = Session::default();
        session.slide(Field::AvgAdditionalItemValue, 19.99);
        assert_eq!(session.input().avg_additional_item_value, dec!(19));
        session.slide(Field::MonthlyVisitors, -10.0);
        assert_eq!(session.input().monthly_visitors, 0);
    }

    #[test]
    fn test_apply_rerenders_after_edit() {
        let mut session = Session::default();
        let view = session.apply(SessionEvent::Edit {
            field: Field::AvgOrderValue,
            raw: "0".into(),
        });
        // only attach revenue remains: 1320 * 15 * 3
        assert_eq!(view.loss, "R$\u{a0}59.400");
        assert_eq!(session.estimate().monthly_loss, dec!(59400));
    }

    #[test]
    fn test_toggles_never_change_estimate() {
        let mut session = Session::default();
        let before = session.estimate();
        session.apply(SessionEvent::TogglePeriod);
        session.apply(SessionEvent::ToggleLocale);
        assert_eq!(session.estimate(), before);
        assert_eq!(
            session.preferences(),
            DisplayPreferences {
                period: PeriodMode::Annual,
                locale: Locale::International,
            }
        );
    }

    #[test]
    fn test_event_json_shape() {
        let event: SessionEvent =
            serde_json::from_str(r#"{"type": "edit", "field": "monthly_visitors", "raw": "12"}"#)
                .unwrap();
        assert_eq!(
            event,
            SessionEvent::Edit {
                field: Field::MonthlyVisitors,
                raw: "12".into(),
            }
        );
        let toggle: SessionEvent = serde_json::from_str(r#"{"type": "toggle_locale"}"#).unwrap();
        assert_eq!(toggle, SessionEvent::ToggleLocale);
    }
}
