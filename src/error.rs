//! Error types shared by the configuration model and both generators.

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, WebAppError>;

#[derive(Error, Debug)]
pub enum WebAppError {
    /// A setter received a value outside its enumeration or format.
    /// The configuration is left unchanged.
    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    /// Malformed JSON, or a recognized manifest key with the wrong shape.
    #[error("manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field a consumer depends on was never set.
    #[error("{0} is required but not set")]
    MissingRequired(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebAppError {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}
