use clap::Args;
use serde_json::{json, Value};

use search_loss_core::config::CalculatorConfig;
use search_loss_core::estimator::calculate_search_loss;
use search_loss_core::formatting::{format_currency, Locale};

use crate::commands::fields::{build_session, FieldArgs};

/// Arguments for the loss estimate
#[derive(Args)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Locale for the formatted figures (domestic or international)
    #[arg(long)]
    pub locale: Option<Locale>,
}

pub fn run_estimate(
    args: EstimateArgs,
    config: CalculatorConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let locale = args.locale.unwrap_or(config.preferences.locale);
    let session = build_session(&args.fields, config)?;

    let result = calculate_search_loss(session.input())?;
    let display = json!({
        "locale": locale.conventions().tag,
        "monthly_loss": format_currency(result.result.monthly_loss, locale),
        "annual_loss": format_currency(result.result.annual_loss, locale),
    });

    let mut value = serde_json::to_value(result)?;
    if let Value::Object(ref mut map) = value {
        map.insert("display".to_string(), display);
    }
    Ok(value)
}
