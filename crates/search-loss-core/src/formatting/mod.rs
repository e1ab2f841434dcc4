pub mod locale;
pub mod number;

pub use locale::{DisplayPreferences, Locale, LocaleConventions, PeriodMode};
pub use number::{format_currency, format_grouped_number, format_rate};
