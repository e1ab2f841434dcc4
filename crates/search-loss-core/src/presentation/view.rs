use serde::{Deserialize, Serialize};

use crate::estimator::{estimate, Field, InputSet};
use crate::formatting::{
    format_currency, format_grouped_number, format_rate, DisplayPreferences, Locale, PeriodMode,
};
use crate::presentation::copy::{CtaUrls, LocaleStrings};

/// One input control, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedField {
    pub field: Field,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub value: String,
}

/// Every string the form needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedView {
    pub locale: Locale,
    pub locale_tag: String,
    pub currency_code: String,
    pub period: PeriodMode,
    pub title: String,
    pub intro: String,
    pub fields: Vec<RenderedField>,
    pub result_heading: String,
    pub period_label: String,
    /// Loss for the selected period
    pub loss: String,
    pub monthly_loss: String,
    pub annual_loss: String,
    pub result_blurb: String,
    pub cta_text: String,
    pub cta_url: String,
}

impl RenderedView {
    pub fn field(&self, field: Field) -> Option<&RenderedField> {
        self.fields.iter().find(|f| f.field == field)
    }
}

/// Render the whole form from the current inputs and toggles.
///
/// The estimate is computed here on every call; nothing is cached.
pub fn render_view(input: &InputSet, prefs: DisplayPreferences, cta_urls: &CtaUrls) -> RenderedView {
    let locale = prefs.locale;
    let strings = LocaleStrings::for_locale(locale);
    let conv = locale.conventions();
    let result = estimate(input);

    let fields = Field::ALL
        .iter()
        .map(|&field| RenderedField {
            field,
            label: strings.label(field).to_string(),
            tooltip: strings.tooltip(field).map(str::to_string),
            value: display_value(input, field, locale),
        })
        .collect();

    RenderedView {
        locale,
        locale_tag: conv.tag.to_string(),
        currency_code: conv.currency_code.to_string(),
        period: prefs.period,
        title: strings.title.to_string(),
        intro: strings.intro.to_string(),
        fields,
        result_heading: strings.result_heading.to_string(),
        period_label: strings.period(prefs.period).to_string(),
        loss: format_currency(prefs.period.select(&result), locale),
        monthly_loss: format_currency(result.monthly_loss, locale),
        annual_loss: format_currency(result.annual_loss, locale),
        result_blurb: strings.result_blurb.to_string(),
        cta_text: strings.cta.to_string(),
        cta_url: cta_urls.for_locale(locale).to_string(),
    }
}

fn display_value(input: &InputSet, field: Field, locale: Locale) -> String {
    let value = input.value(field);
    if field.is_count() {
        format_grouped_number(value, locale)
    } else {
        format_rate(value, locale)
    }
}
