use std::fmt;

use thiserror::Error;

/// Which part of the document a field description belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Channel-level (feed) fields
    Channel,
    /// Item-level (entry) fields
    Item,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Channel => f.write_str("channel"),
            Scope::Item => f.write_str("item"),
        }
    }
}

/// Main error type that encompasses all possible failure modes
#[derive(Error, Debug)]
pub enum RssError {
    #[error("Missing required channel field: {field}")]
    MissingRequiredField { field: String },

    #[error("Unrecognized {scope} field(s): {}", .fields.join(", "))]
    UnrecognizedField { scope: Scope, fields: Vec<String> },

    #[error("Item must contain at least one of title or description")]
    MissingRequiredContent,

    #[error("Invalid date for {field}: {value}")]
    InvalidDate { field: String, value: String },

    #[error("Invalid feed description: {0}")]
    InvalidDescription(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported description file format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RssError {
    /// Whether the error came from schema validation of a description
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            RssError::MissingRequiredField { .. }
                | RssError::UnrecognizedField { .. }
                | RssError::MissingRequiredContent
        )
    }
}

impl From<crate::config::ConfigError> for RssError {
    fn from(err: crate::config::ConfigError) -> Self {
        RssError::Config(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RssError>;
