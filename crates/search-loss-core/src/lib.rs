pub mod config;
pub mod error;
pub mod estimator;
pub mod formatting;
pub mod presentation;
pub mod sanitize;
pub mod types;

#[cfg(feature = "session")]
pub mod session;

pub use error::SearchLossError;
pub use types::*;

/// Standard result type for all search-loss operations
pub type SearchLossResult<T> = Result<T, SearchLossError>;
