//! Validation module for game definitions
//!
//! The validator walks a parsed document and produces a [`ValidationReport`]
//! holding every error found, in document order, plus advisory warnings.
//! Two modes are supported:
//!
//! - **Standard**: layout and type checks, unknown keys tolerated
//! - **Strict**: standard checks plus rejection of unknown keys
//!
//! Copyright (c) 2025 apmcc contributors
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod definition;
pub mod error;

// Re-export commonly used types
pub use base::{SchemaValidator, ValidationContext, ValidationHelpers, ValidationMode, ROOT_PATH};
pub use definition::{DefinitionValidator, NO_GOAL_WARNING};
pub use error::{
    ErrorKind, Outcome, ValidationError, ValidationErrors, ValidationReport, ValidationResult,
    ValidationWarning, Violation,
};

use serde_json::Value;

/// Validate a parsed definition in the given mode
///
/// # Examples
///
/// ```rust
/// use apmcc_schemas::validation::{validate_definition, Outcome, ValidationMode};
/// use serde_json::json;
///
/// let definition = json!({
///     "name": "Game",
///     "progression_items": ["Key"],
///     "chapters": [{"name": "Ch1", "challenges": [{"name": "Boss", "goal": true}]}]
/// });
///
/// let report = validate_definition(&definition, ValidationMode::Standard);
/// assert_eq!(report.outcome(), Outcome::Valid);
/// assert!(report.warnings.is_empty());
/// ```
pub fn validate_definition(definition: &Value, mode: ValidationMode) -> ValidationReport {
    let context = ValidationContext::new(mode);
    DefinitionValidator::new().validate_with_context(definition, &context)
}
