use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use std::str::FromStr;

use search_loss_core::config::CalculatorConfig;
use search_loss_core::estimator::InputSet;
use search_loss_core::formatting::Locale;
use search_loss_core::session::{Session, SessionEvent};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_amount(amount: &str) -> NapiResult<Decimal> {
    Decimal::from_str(amount.trim()).map_err(to_napi_error)
}

fn parse_locale(locale: &str) -> NapiResult<Locale> {
    locale.parse().map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_search_loss(input_json: String) -> NapiResult<String> {
    let input: InputSet = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        search_loss_core::estimator::calculate_search_loss(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Start from `config_json` (may be `{}`), replay the JSON array of session
/// events in order and return the resulting view.
#[napi]
pub fn render_calculator(config_json: String, events_json: Option<String>) -> NapiResult<String> {
    let config = CalculatorConfig::from_json_str(&config_json).map_err(to_napi_error)?;
    let events: Vec<SessionEvent> = match events_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error)?,
        None => Vec::new(),
    };

    let mut session = Session::new(config);
    for event in events {
        session.apply(event);
    }
    serde_json::to_string(&session.render()).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Formatting and sanitizing
// ---------------------------------------------------------------------------

#[napi]
pub fn format_currency(amount: String, locale: String) -> NapiResult<String> {
    Ok(search_loss_core::formatting::format_currency(
        parse_amount(&amount)?,
        parse_locale(&locale)?,
    ))
}

#[napi]
pub fn format_grouped_number(amount: String, locale: String) -> NapiResult<String> {
    Ok(search_loss_core::formatting::format_grouped_number(
        parse_amount(&amount)?,
        parse_locale(&locale)?,
    ))
}

/// Digits-only count as a string; counts can exceed JavaScript's safe range.
#[napi]
pub fn sanitize_count(raw: String) -> String {
    search_loss_core::sanitize::sanitize_count(&raw).to_string()
}
