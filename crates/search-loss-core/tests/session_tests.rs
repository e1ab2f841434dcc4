use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use search_loss_core::config::CalculatorConfig;
use search_loss_core::estimator::Field;
use search_loss_core::formatting::{Locale, PeriodMode};
use search_loss_core::session::{Session, SessionEvent};

fn edit(field: Field, raw: &str) -> SessionEvent {
    SessionEvent::Edit {
        field,
        raw: raw.to_string(),
    }
}

#[test]
fn test_typing_into_grouped_visitor_field() {
    let mut session = Session::default();
    let view = session.render();
    let shown = view.field(Field::MonthlyVisitors).unwrap().value.clone();
    assert_eq!(shown, "1.100.000");

    // user appends a digit to the displayed text
    let view = session.apply(edit(Field::MonthlyVisitors, &format!("{shown}0")));
    assert_eq!(session.input().monthly_visitors, 11_000_000);
    assert_eq!(view.field(Field::MonthlyVisitors).unwrap().value, "11.000.000");
    assert_eq!(view.loss, "R$\u{a0}2.706.000");
}

#[test]
fn test_locale_toggle_rerenders_everything() {
    let mut session = Session::default();
    let domestic = session.render();
    let international = session.apply(SessionEvent::ToggleLocale);

    assert_eq!(international.locale, Locale::International);
    assert_eq!(international.loss, "$270,600");
    assert_eq!(
        international.field(Field::MonthlyVisitors).unwrap().value,
        "1,100,000"
    );
    assert_ne!(domestic.cta_url, international.cta_url);
    assert_ne!(domestic.cta_text, international.cta_text);
    assert_ne!(domestic.title, international.title);
}

#[test]
fn test_period_toggle_twice_restores_view() {
    let mut session = Session::default();
    let before = session.render();
    let annual = session.apply(SessionEvent::TogglePeriod);
    assert_eq!(annual.period, PeriodMode::Annual);
    assert_eq!(annual.loss, before.annual_loss);
    let after = session.apply(SessionEvent::TogglePeriod);
    assert_eq!(after, before);
}

#[test]
fn test_full_edit_sequence() {
    let mut session = Session::default();
    session.apply(edit(Field::MonthlyVisitors, "500,000 visits"));
    session.apply(SessionEvent::Slide {
        field: Field::SearchUsage,
        value: 40.0,
    });
    session.apply(edit(Field::UnsuccessfulSearchRate, "12%"));
    session.apply(SessionEvent::Slide {
        field: Field::ConversionRate,
        value: 1.5,
    });
    session.apply(edit(Field::AvgOrderValue, "R$ 250"));
    let view = session.apply(edit(Field::AvgAdditionalItemValue, "20"));

    // 500_000 * 0.40 = 200_000; * 0.12 * 0.015 * 2 = 720
    // 720 * 250 + 720 * 20 * 3 = 180_000 + 43_200 = 223_200
    assert_eq!(session.estimate().monthly_loss, dec!(223200));
    assert_eq!(view.loss, "R$\u{a0}223.200");
    assert_eq!(view.field(Field::ConversionRate).unwrap().value, "1,5");

    let view = session.apply(SessionEvent::SetPeriod {
        period: PeriodMode::Annual,
    });
    assert_eq!(view.loss, "R$\u{a0}2.678.400");
}

#[test]
fn test_cleared_field_shows_zero_loss_not_nan() {
    let mut session = Session::default();
    let view = session.apply(edit(Field::MonthlyVisitors, ""));
    assert_eq!(session.input().monthly_visitors, 0);
    assert_eq!(view.loss, "R$\u{a0}0");
    assert_eq!(view.field(Field::MonthlyVisitors).unwrap().value, "0");
}

#[test]
fn test_session_starts_from_config() {
    let config = CalculatorConfig::from_json_str(
        r#"{
            "defaults": {
                "monthly_visitors": 10000,
                "search_usage_pct": "50",
                "unsuccessful_search_rate_pct": "20",
                "conversion_rate_pct": "5",
                "avg_order_value": "100",
                "avg_additional_item_value": "0"
            },
            "preferences": { "locale": "international", "period": "annual" },
            "cta_urls": { "international": "https://example.com/book" }
        }"#,
    )
    .unwrap();
    let session = Session::new(config);
    let view = session.render();

    // 10_000 * 0.5 * 0.2 * 0.05 * 2 = 100 lost conversions; * 100 = 10_000
    assert_eq!(session.estimate().monthly_loss, dec!(10000));
    assert_eq!(view.loss, "$120,000");
    assert_eq!(view.cta_url, "https://example.com/book");
}

#[test]
fn test_config_controls_bound_slides() {
    let config = CalculatorConfig::from_yaml_str(
        "controls:\n  search_usage:\n    min: \"10\"\n    max: \"20\"\n    step: \"5\"\n",
    )
    .unwrap();
    let mut session = Session::new(config);
    session.apply(SessionEvent::Slide {
        field: Field::SearchUsage,
        value: 3.0,
    });
    assert_eq!(session.input().search_usage_pct, dec!(10));
    session.apply(SessionEvent::Slide {
        field: Field::SearchUsage,
        value: 17.0,
    });
    assert_eq!(session.input().search_usage_pct, dec!(15));
    session.apply(edit(Field::SearchUsage, "not a number"));
    assert_eq!(session.input().search_usage_pct, Decimal::ZERO);
}

#[test]
fn test_fine_step_rate_display_types_back_unchanged() {
    let config = CalculatorConfig::from_yaml_str(
        "controls:\n  conversion_rate:\n    min: \"0.5\"\n    max: \"5\"\n    step: \"0.01\"\n",
    )
    .unwrap();
    let mut session = Session::new(config);
    let view = session.apply(SessionEvent::Slide {
        field: Field::ConversionRate,
        value: 1.23,
    });
    assert_eq!(session.input().conversion_rate_pct, dec!(1.23));
    let shown = view.field(Field::ConversionRate).unwrap().value.clone();
    assert_eq!(shown, "1,23");

    let view = session.apply(edit(Field::ConversionRate, &shown));
    assert_eq!(session.input().conversion_rate_pct, dec!(1.23));
    assert_eq!(view.field(Field::ConversionRate).unwrap().value, shown);

    let view = session.apply(SessionEvent::ToggleLocale);
    let shown = view.field(Field::ConversionRate).unwrap().value.clone();
    assert_eq!(shown, "1.23");
    session.apply(edit(Field::ConversionRate, &shown));
    assert_eq!(session.input().conversion_rate_pct, dec!(1.23));
}

#[test]
fn test_edit_on_wide_fine_control_keeps_value() {
    let config = CalculatorConfig::from_json_str(
        r#"{ "controls": { "search_usage": {
            "min": "0", "max": "100000000000000000000", "step": "0.0000000001"
        } } }"#,
    )
    .unwrap();
    assert!(config.validate().is_ok());
    let mut session = Session::new(config);
    session.apply(edit(Field::SearchUsage, "1e20"));
    assert_eq!(
        session.input().search_usage_pct,
        dec!(100000000000000000000)
    );
    session.apply(edit(Field::SearchUsage, "30"));
    assert_eq!(session.input().search_usage_pct, dec!(30));
}
