use thiserror::Error;

use crate::config::ConfigError;

/// Main library error type covering every way the pipeline can fail
#[derive(Error, Debug)]
pub enum PersonError {
    /// A required input field was empty or absent
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// The store refused a record that lacks `name` or `cpf`
    #[error("cannot save invalid person: {record}")]
    SaveValidity { record: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PersonError {
    pub fn missing(field: &'static str) -> Self {
        PersonError::MissingField { field }
    }

    /// Errors raised by the pipeline steps themselves, as opposed to
    /// input decoding or configuration problems around them.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            PersonError::MissingField { .. } | PersonError::SaveValidity { .. }
        )
    }
}

impl From<ConfigError> for PersonError {
    fn from(err: ConfigError) -> Self {
        PersonError::Config(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PersonError>;
