//! Error types for the apmcc core library
//!
//! This module defines the error handling system for the domain model,
//! using thiserror for error definitions and anyhow for flexible error sources.

use thiserror::Error;

/// Main error type for apmcc core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The parsed tree could not be turned into a typed definition
    #[error("Definition error: {message}")]
    Definition {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON conversion errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Unsupported feature or operation
    #[error("Unsupported operation: {message}")]
    Unsupported {
        message: String,
        feature: Option<String>,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a definition error without an underlying source
    pub fn definition(message: impl Into<String>) -> Self {
        Error::Definition {
            message: message.into(),
            source: None,
        }
    }

    /// Name of the unsupported feature, if this is an `Unsupported` error
    pub fn unsupported_feature(&self) -> Option<&str> {
        match self {
            Error::Unsupported { feature, .. } => feature.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::definition("chapters missing");
        assert_eq!(err.to_string(), "Definition error: chapters missing");
    }

    #[test]
    fn test_unsupported_feature() {
        let err = Error::Unsupported {
            message: "not yet".to_string(),
            feature: Some("generate".to_string()),
        };
        assert_eq!(err.unsupported_feature(), Some("generate"));
        assert_eq!(Error::definition("x").unsupported_feature(), None);
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json { .. }));
    }
}
