//! Normalisation of raw form input into typed [`InputSet`](crate::estimator::InputSet)
//! values. Nothing here fails: malformed input degrades to zero.

pub mod controls;
pub mod digits;

pub use controls::{
    parse_float_prefix, sanitize_localized_rate_text, sanitize_rate_text, RateControl,
    RateControls,
};
pub use digits::{sanitize_count, sanitize_count_value, sanitize_money};
