//! Base validation trait and common utilities
//!
//! Copyright (c) 2025 apmcc contributors
//! Licensed under the Apache-2.0 license

use crate::validation::error::{ErrorKind, ValidationError, ValidationReport, ValidationResult};
use serde_json::{Map, Value};

/// Path used for the document root
pub const ROOT_PATH: &str = "$";

/// Validation mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Layout and type checks; unknown keys are tolerated
    #[default]
    Standard,
    /// Standard checks plus rejection of unknown keys
    Strict,
}

/// Validation context carrying the current field path
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Current field path
    pub path: String,
    /// Validation mode
    pub mode: ValidationMode,
    /// Last segment pushed onto the path, unquoted
    field: String,
}

impl ValidationContext {
    /// Create a new validation context rooted at the document
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            path: ROOT_PATH.to_string(),
            mode,
            field: ROOT_PATH.to_string(),
        }
    }

    /// Create a child context for a mapping key
    ///
    /// Keys that would make the path ambiguous (empty, `$`, or containing
    /// `.`, `[`, `]` or `"`) are written in bracket-quoted form, as in
    /// `filler_item_categories["Junk.Coin"].Gem`.
    pub fn child<P: AsRef<str>>(&self, path_segment: P) -> Self {
        let segment = path_segment.as_ref();
        let new_path = match (self.path == ROOT_PATH, needs_quoting(segment)) {
            (_, true) => format!("{}[{}]", self.parent_prefix(), quote_segment(segment)),
            (true, false) => segment.to_string(),
            (false, false) => format!("{}.{}", self.path, segment),
        };

        Self {
            path: new_path,
            mode: self.mode,
            field: segment.to_string(),
        }
    }

    /// Create a child context for a sequence index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
            mode: self.mode,
            field: format!("{}[{}]", self.field, index),
        }
    }

    pub fn is_strict(&self) -> bool {
        self.mode == ValidationMode::Strict
    }

    /// Last path segment, used to name the field in messages
    pub fn field_name(&self) -> &str {
        &self.field
    }

    fn parent_prefix(&self) -> &str {
        if self.path == ROOT_PATH {
            ""
        } else {
            &self.path
        }
    }
}

fn needs_quoting(segment: &str) -> bool {
    segment.is_empty() || segment == ROOT_PATH || segment.contains(['.', '[', ']', '"'])
}

fn quote_segment(segment: &str) -> String {
    // JSON string escaping covers quotes, backslashes and control characters
    serde_json::to_string(segment).unwrap_or_else(|_| format!("\"{}\"", segment))
}

/// Base trait for document validators
pub trait SchemaValidator {
    /// The type being validated
    type Input: ?Sized;

    /// Validate in standard mode
    fn validate(&self, input: &Self::Input) -> ValidationReport {
        let context = ValidationContext::new(ValidationMode::Standard);
        self.validate_with_context(input, &context)
    }

    /// Validate with specific context and mode
    fn validate_with_context(&self, input: &Self::Input, context: &ValidationContext) -> ValidationReport;

    /// Validate in strict mode
    fn validate_strict(&self, input: &Self::Input) -> ValidationReport {
        let context = ValidationContext::new(ValidationMode::Strict);
        self.validate_with_context(input, &context)
    }
}

/// Helper functions for common validation patterns
///
/// Each helper checks one value and returns the typed view on success, so
/// callers can keep descending, or the error to accumulate on failure.
pub struct ValidationHelpers;

impl ValidationHelpers {
    /// Human name of a JSON value's type, for `actual` in violations
    pub fn type_name(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "sequence",
            Value::Object(_) => "mapping",
        }
    }

    fn wrong_type(value: &Value, expected: &str, context: &ValidationContext) -> ValidationError {
        ValidationError::new(
            &context.path,
            ErrorKind::WrongType,
            format!("{} must be a {}", context.field_name(), expected),
        )
        .with_violation(expected, Self::type_name(value))
    }

    /// Look up a required field of a mapping
    pub fn require<'a>(
        object: &'a Map<String, Value>,
        field: &str,
        context: &ValidationContext,
    ) -> ValidationResult<&'a Value> {
        object.get(field).ok_or_else(|| {
            ValidationError::new(
                context.child(field).path,
                ErrorKind::MissingField,
                format!("required field '{}' is missing", field),
            )
        })
    }

    /// Value must be a mapping
    pub fn mapping<'a>(value: &'a Value, context: &ValidationContext) -> ValidationResult<&'a Map<String, Value>> {
        value
            .as_object()
            .ok_or_else(|| Self::wrong_type(value, "mapping", context))
    }

    /// Value must be a sequence
    pub fn sequence<'a>(value: &'a Value, context: &ValidationContext) -> ValidationResult<&'a Vec<Value>> {
        value
            .as_array()
            .ok_or_else(|| Self::wrong_type(value, "sequence", context))
    }

    /// Value must be a sequence with at least one entry
    pub fn non_empty_sequence<'a>(
        value: &'a Value,
        entry_name: &str,
        context: &ValidationContext,
    ) -> ValidationResult<&'a Vec<Value>> {
        let sequence = Self::sequence(value, context)?;
        if sequence.is_empty() {
            return Err(ValidationError::new(
                &context.path,
                ErrorKind::Empty,
                format!("must contain at least one {}", entry_name),
            )
            .with_violation(format!("at least one {}", entry_name), "empty sequence"));
        }
        Ok(sequence)
    }

    /// Value must be a string with non-whitespace content
    pub fn non_empty_string<'a>(value: &'a Value, context: &ValidationContext) -> ValidationResult<&'a str> {
        let text = value
            .as_str()
            .ok_or_else(|| Self::wrong_type(value, "string", context))?;

        if text.trim().is_empty() {
            return Err(ValidationError::new(
                &context.path,
                ErrorKind::Empty,
                format!("{} must be a non-empty string", context.field_name()),
            )
            .with_violation("non-empty string", "empty string"));
        }
        Ok(text)
    }

    /// Value must be an actual boolean, not a string or number standing in for one
    pub fn boolean(value: &Value, context: &ValidationContext) -> ValidationResult<bool> {
        value
            .as_bool()
            .ok_or_else(|| Self::wrong_type(value, "boolean", context))
    }

    /// Value must be a number greater than zero
    pub fn positive_weight(value: &Value, context: &ValidationContext) -> ValidationResult<f64> {
        let weight = value.as_f64().ok_or_else(|| {
            ValidationError::new(&context.path, ErrorKind::WrongType, "weight must be a number")
                .with_violation("positive number", Self::type_name(value))
        })?;

        if weight <= 0.0 {
            return Err(ValidationError::new(
                &context.path,
                ErrorKind::NonPositive,
                "weight must be positive",
            )
            .with_violation("number greater than 0", weight.to_string()));
        }
        Ok(weight)
    }

    /// Report keys of a mapping that are not in `known` (strict mode only)
    pub fn unknown_fields(
        object: &Map<String, Value>,
        known: &[&str],
        context: &ValidationContext,
    ) -> Vec<ValidationError> {
        if !context.is_strict() {
            return Vec::new();
        }

        object
            .keys()
            .filter(|key| !known.contains(&key.as_str()))
            .map(|key| {
                ValidationError::new(
                    context.child(key).path,
                    ErrorKind::UnknownField,
                    format!("unknown field '{}' is not allowed in strict mode", key),
                )
                .with_violation(format!("one of: {}", known.join(", ")), key.clone())
            })
            .collect()
    }
}
