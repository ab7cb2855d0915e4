//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use apmcc_schemas::LoaderError;
use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from apmcc-core library
    #[error("Core error: {0}")]
    Core(#[source] apmcc_core::Error),

    /// A file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Definition file could not be parsed
    #[error("Failed to parse {}{}: {}", path.display(), format_location(*location), message)]
    Parse {
        path: PathBuf,
        location: Option<(usize, usize)>,
        message: String,
    },

    /// The definition has validation errors (or warnings, when they are denied)
    #[error("Validation failed with {errors} error(s) and {warnings} warning(s)")]
    ValidationFailed { errors: usize, warnings: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// Requested feature exists only as a placeholder
    #[error("{feature} is not yet implemented")]
    Unsupported { feature: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

fn format_location(location: Option<(usize, usize)>) -> String {
    match location {
        Some((line, column)) => format!(" at line {}, column {}", line, column),
        None => String::new(),
    }
}

/// Parser message without the trailing " at line L column C" that both
/// serde_yaml and serde_json append, since `Parse` prints the location itself
fn parser_message(message: String, location: Option<(usize, usize)>) -> String {
    const MARKER: &str = " at line ";

    if location.is_none() {
        return message;
    }
    match message.rfind(MARKER) {
        Some(index)
            if message[index + MARKER.len()..]
                .split(" column ")
                .all(|part| part.parse::<usize>().is_ok()) =>
        {
            message[..index].to_string()
        }
        _ => message,
    }
}

impl From<LoaderError> for Error {
    fn from(error: LoaderError) -> Self {
        let location = error.location();
        match error {
            LoaderError::NotFound { path } => Self::FileNotFound { path },
            LoaderError::Io { path, source } => Self::ReadFile { path, source },
            LoaderError::YamlParse { path, source } => Self::Parse {
                path,
                location,
                message: parser_message(source.to_string(), location),
            },
            LoaderError::YamlUnrepresentable { path, node, message } => Self::Parse {
                path,
                location,
                message: format!("{} (at {})", message, node),
            },
            LoaderError::JsonParse { path, source } => Self::Parse {
                path,
                location,
                message: parser_message(source.to_string(), location),
            },
        }
    }
}

impl From<apmcc_core::Error> for Error {
    fn from(error: apmcc_core::Error) -> Self {
        match error.unsupported_feature() {
            Some(feature) => Self::Unsupported {
                feature: feature.to_string(),
            },
            None => Self::Core(error),
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) | Self::ReadFile { .. } => 1,
            Self::Core(_) | Self::ValidationFailed { .. } => 2,
            Self::FileNotFound { .. } => 3,
            Self::Parse { .. } => 4,
            Self::Config(_) => 5,
            Self::InvalidArgs(_) => 6,
            Self::Unsupported { .. } => 7,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }
}

/// Extension trait for displaying errors with context
pub trait ErrorContext<T> {
    /// Add context with a closure (only evaluated on error)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other {
                message: format!("{}: {}", f(), inner),
            }
        })
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    // The report has already been printed; only the verdict is left
    if let Error::ValidationFailed { .. } = error {
        return if use_color {
            use colored::Colorize;
            error.to_string().red().bold().to_string()
        } else {
            error.to_string()
        };
    }

    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}
