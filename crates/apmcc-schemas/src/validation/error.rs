//! Validation error, warning and report types for game definitions
//!
//! Copyright (c) 2025 apmcc contributors
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The document root is not a mapping
    Structural,
    /// A required field is absent
    MissingField,
    /// A field holds a value of the wrong type
    WrongType,
    /// A string or collection that must have content is empty
    Empty,
    /// A weight is zero or negative
    NonPositive,
    /// A key not part of the definition layout (strict mode only)
    UnknownField,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Structural => "structural",
            ErrorKind::MissingField => "missing_field",
            ErrorKind::WrongType => "wrong_type",
            ErrorKind::Empty => "empty",
            ErrorKind::NonPositive => "non_positive",
            ErrorKind::UnknownField => "unknown_field",
        };
        f.write_str(name)
    }
}

/// A validation violation with detailed context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// What was expected
    pub expected: String,
    /// What was actually found
    pub actual: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, but found {}", self.expected, self.actual)
    }
}

/// Validation error with path context
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field path where the error occurred, e.g. `chapters[2].challenges[0].goal`
    pub path: String,
    /// Category of the failure
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Expected/actual detail, when one applies
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub violation: Option<Violation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error at '{}': {}", self.path, self.message)?;

        if let Some(violation) = &self.violation {
            write!(f, " ({})", violation)?;
        }

        Ok(())
    }
}

impl ValidationError {
    /// Create a new validation error
    pub fn new<P, M>(path: P, kind: ErrorKind, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
            violation: None,
        }
    }

    /// Attach expected/actual detail
    pub fn with_violation<E, A>(mut self, expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        self.violation = Some(Violation {
            expected: expected.into(),
            actual: actual.into(),
        });
        self
    }
}

/// Result type for single-check validation helpers
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Advisory notice that never changes the Valid/Invalid classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Field path the warning refers to, if it refers to one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub path: Option<String>,
    pub message: String,
}

impl ValidationWarning {
    /// Warning about the definition as a whole
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            path: None,
            message: message.into(),
        }
    }

    /// Warning about a specific field
    pub fn at(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "Warning at '{}': {}", path, self.message),
            None => write!(f, "Warning: {}", self.message),
        }
    }
}

/// Multiple validation errors, in document order
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// List of validation errors
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s) occurred:", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Convert to result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

/// Classification of a validation report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Valid,
    Invalid,
}

/// Accumulated result of checking one definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Errors in document order
    pub errors: Vec<ValidationError>,
    /// Warnings in the order they were raised
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_valid() {
            Outcome::Valid
        } else {
            Outcome::Invalid
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Ok with the warnings when valid, the collected errors otherwise
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ValidationErrors> {
        ValidationErrors::from(self.errors)
            .into_result()
            .map(|()| self.warnings)
    }
}
