//! apmcc Schemas - Loading and validation of game definition files
//!
//! This crate turns a definition file into a validation verdict:
//! - **Loader**: reads YAML or JSON from disk into a document tree, reporting
//!   missing files and syntax errors with their location
//! - **Validation**: checks the tree against the definition layout and
//!   collects every violation with its field path
//!
//! ## Quick Start
//!
//! ```rust
//! use apmcc_schemas::{DefinitionValidator, SchemaValidator};
//! use serde_json::json;
//!
//! let validator = DefinitionValidator::new();
//! let definition = json!({
//!     "name": "Game",
//!     "progression_items": ["Key"],
//!     "chapters": [{"name": "Ch1", "challenges": []}]
//! });
//!
//! let report = validator.validate(&definition);
//! for error in &report.errors {
//!     println!("{}: {}", error.path, error.message);
//! }
//! assert_eq!(report.errors[0].path, "chapters[0].challenges");
//! ```
//!
//! ## Validation Modes
//!
//! - **Standard**: layout and type checks; unknown keys are ignored
//! - **Strict**: additionally rejects keys that are not part of the layout
//!
//! Errors never short-circuit the pass. A definition without any goal
//! challenge gets a warning, which does not make it invalid.
//!
//! Copyright (c) 2025 apmcc contributors
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod validation;

// Re-export commonly used types for convenience
pub use loader::{parse_str, DefinitionLoader, Format, LoadedDocument, LoaderError, LoaderResult};
pub use validation::{
    validate_definition, DefinitionValidator, ErrorKind, Outcome, SchemaValidator,
    ValidationContext, ValidationError, ValidationErrors, ValidationHelpers, ValidationMode,
    ValidationReport, ValidationResult, ValidationWarning, NO_GOAL_WARNING,
};
