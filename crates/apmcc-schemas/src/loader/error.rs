//! Error types for definition loading operations
//!
//! Copyright (c) 2025 apmcc contributors
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised while reading and parsing a definition file
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The file does not exist
    #[error("File not found: '{}'", .path.display())]
    NotFound { path: PathBuf },

    /// File I/O errors other than a missing file
    #[error("Failed to read file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML syntax errors
    #[error("Failed to parse YAML file '{}': {source}", .path.display())]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Well-formed YAML with no equivalent in the definition data model
    #[error("Failed to parse YAML file '{}': {message} (at {node})", .path.display())]
    YamlUnrepresentable {
        path: PathBuf,
        /// Document path of the offending node
        node: String,
        message: String,
    },

    /// JSON syntax errors
    #[error("Failed to parse JSON file '{}': {source}", .path.display())]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl From<std::io::Error> for LoaderError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::from("<unknown>"),
            source: error,
        }
    }
}

impl LoaderError {
    /// Create an I/O error with path context, mapping a missing file to `NotFound`
    pub fn io_error(path: PathBuf, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io {
                path,
                source: error,
            }
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: PathBuf, error: serde_yaml::Error) -> Self {
        Self::YamlParse {
            path,
            source: error,
        }
    }

    /// Create an error for a YAML node that cannot be represented
    pub fn unrepresentable(path: PathBuf, node: &str, message: impl Into<String>) -> Self {
        Self::YamlUnrepresentable {
            path,
            node: node.to_string(),
            message: message.into(),
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::JsonParse {
            path,
            source: error,
        }
    }

    /// Get the path associated with this error
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::YamlParse { path, .. }
            | Self::YamlUnrepresentable { path, .. }
            | Self::JsonParse { path, .. } => path,
        }
    }

    /// Line and column (1-based) of a syntax error, when the parser reports one
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::YamlParse { source, .. } => source
                .location()
                .map(|location| (location.line(), location.column())),
            Self::JsonParse { source, .. } if source.line() > 0 => Some((source.line(), source.column())),
            _ => None,
        }
    }

    /// Whether the file could not be read at all, as opposed to being malformed
    pub fn is_file_error(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Io { .. })
    }
}
