use clap::Args;
use serde_json::Value;

use search_loss_core::config::CalculatorConfig;
use search_loss_core::formatting::{Locale, PeriodMode};
use search_loss_core::session::SessionEvent;

use crate::commands::fields::{build_session, FieldArgs};

/// Arguments for rendering the calculator form
#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    /// Period shown in the result (monthly or annual)
    #[arg(long)]
    pub period: Option<PeriodMode>,

    /// Display locale (domestic or international)
    #[arg(long)]
    pub locale: Option<Locale>,
}

pub fn run_render(
    args: RenderArgs,
    config: CalculatorConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let mut session = build_session(&args.fields, config)?;
    if let Some(period) = args.period {
        session.apply(SessionEvent::SetPeriod { period });
    }
    if let Some(locale) = args.locale {
        session.apply(SessionEvent::SetLocale { locale });
    }
    Ok(serde_json::to_value(session.render())?)
}
