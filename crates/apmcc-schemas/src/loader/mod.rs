//! Definition loading and parsing
//!
//! Reads a definition file, detects its format from the extension and parses
//! it into a `serde_json::Value` tree for validation.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use apmcc_schemas::loader::DefinitionLoader;
//! use std::path::Path;
//!
//! let document = DefinitionLoader::new().load(Path::new("game.yaml"))?;
//! println!("Loaded: {}", serde_json::to_string_pretty(&document.value)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 apmcc contributors
//! Licensed under the Apache-2.0 license

pub mod definition_loader;
pub mod error;
pub mod parser;

pub use definition_loader::{DefinitionLoader, LoadedDocument};
pub use error::{LoaderError, LoaderResult};
pub use parser::{parse_str, Format};
