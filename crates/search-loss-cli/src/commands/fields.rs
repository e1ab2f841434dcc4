use clap::Args;

use search_loss_core::config::CalculatorConfig;
use search_loss_core::estimator::{Field, InputSet};
use search_loss_core::session::{Session, SessionEvent};

use crate::input;

/// The six form fields as flags. Count fields take raw text, exactly as
/// typed into the form; rate fields take the control's numeric value.
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct FieldArgs {
    /// Monthly visitors; non-digits are ignored (e.g. "1.100.000")
    #[arg(long)]
    pub visitors: Option<String>,

    /// Share of visitors using site search, in percent
    #[arg(long)]
    pub search_usage: Option<f64>,

    /// Share of searches with no results, in percent
    #[arg(long, alias = "unsuccessful-search-rate")]
    pub unsuccessful_rate: Option<f64>,

    /// Store conversion rate, in percent
    #[arg(long)]
    pub conversion_rate: Option<f64>,

    /// Average order value; non-digits are ignored
    #[arg(long, alias = "aov")]
    pub order_value: Option<String>,

    /// Average value of one additional item; non-digits are ignored
    #[arg(long)]
    pub item_value: Option<String>,

    /// Path to JSON InputSet file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl FieldArgs {
    fn has_field_flags(&self) -> bool {
        self.visitors.is_some()
            || self.search_usage.is_some()
            || self.unsuccessful_rate.is_some()
            || self.conversion_rate.is_some()
            || self.order_value.is_some()
            || self.item_value.is_some()
    }

    fn events(&self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        let text = [
            (Field::MonthlyVisitors, &self.visitors),
            (Field::AvgOrderValue, &self.order_value),
            (Field::AvgAdditionalItemValue, &self.item_value),
        ];
        for (field, raw) in text {
            if let Some(raw) = raw {
                events.push(SessionEvent::Edit {
                    field,
                    raw: raw.clone(),
                });
            }
        }
        let numeric = [
            (Field::SearchUsage, self.search_usage),
            (Field::UnsuccessfulSearchRate, self.unsuccessful_rate),
            (Field::ConversionRate, self.conversion_rate),
        ];
        for (field, value) in numeric {
            if let Some(value) = value {
                events.push(SessionEvent::Slide { field, value });
            }
        }
        events
    }
}

/// Build a session from `--input`, piped JSON or the individual flags,
/// in that order of precedence. Flags are applied as form edits on top of
/// the configured defaults.
pub fn build_session(
    args: &FieldArgs,
    mut config: CalculatorConfig,
) -> Result<Session, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        let input: InputSet = input::file::read_json(path)?;
        config.defaults = input;
        return Ok(Session::new(config));
    }

    if !args.has_field_flags() {
        if let Some(data) = input::stdin::read_stdin()? {
            let input: InputSet = serde_json::from_value(data)?;
            config.defaults = input;
            return Ok(Session::new(config));
        }
    }

    let mut session = Session::new(config);
    for event in args.events() {
        session.apply(event);
    }
    Ok(session)
}
