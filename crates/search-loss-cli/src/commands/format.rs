use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use search_loss_core::formatting::{format_currency, format_grouped_number, format_rate, Locale};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatStyle {
    /// Currency symbol, no fractional digits
    Currency,
    /// Grouped whole number
    Number,
    /// Percentage value as stored, in locale notation
    Rate,
}

/// Arguments for locale formatting
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FormatArgs {
    /// Amount to format
    #[arg(long)]
    pub amount: Decimal,

    /// Locale (domestic or international)
    #[arg(long, default_value = "domestic")]
    pub locale: Locale,

    /// What kind of figure the amount is
    #[arg(long, value_enum, default_value = "currency")]
    pub style: FormatStyle,
}

pub fn run_format(args: FormatArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let formatted = match args.style {
        FormatStyle::Currency => format_currency(args.amount, args.locale),
        FormatStyle::Number => format_grouped_number(args.amount, args.locale),
        FormatStyle::Rate => format_rate(args.amount, args.locale),
    };
    Ok(json!({
        "amount": args.amount.to_string(),
        "locale": args.locale.conventions().tag,
        "formatted": formatted,
    }))
}
