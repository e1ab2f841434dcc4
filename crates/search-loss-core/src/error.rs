use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchLossError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown locale: {0} (expected domestic or international)")]
    UnknownLocale(String),

    #[error("Unknown period: {0} (expected monthly or annual)")]
    UnknownPeriod(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SearchLossError {
    fn from(e: serde_json::Error) -> Self {
        SearchLossError::SerializationError(e.to_string())
    }
}

impl From<serde_yaml::Error> for SearchLossError {
    fn from(e: serde_yaml::Error) -> Self {
        SearchLossError::SerializationError(e.to_string())
    }
}
