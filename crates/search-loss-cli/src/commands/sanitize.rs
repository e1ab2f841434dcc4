use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use search_loss_core::config::CalculatorConfig;
use search_loss_core::estimator::Field;
use search_loss_core::sanitize::{sanitize_count, sanitize_rate_text};

/// Arguments for sanitizing raw field text
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct SanitizeArgs {
    /// Raw text as typed into the field
    #[arg(long)]
    pub raw: String,

    /// Target field (visitors, search-usage, unsuccessful-rate, conversion-rate,
    /// order-value, item-value)
    #[arg(long, default_value = "visitors")]
    pub field: Field,
}

pub fn run_sanitize(
    args: SanitizeArgs,
    config: CalculatorConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let value = match config.controls.for_field(args.field) {
        Some(control) => sanitize_rate_text(&args.raw, control),
        None => Decimal::from(sanitize_count(&args.raw)),
    };
    Ok(json!({
        "field": args.field.as_str(),
        "raw": args.raw,
        "value": value.to_string(),
    }))
}
