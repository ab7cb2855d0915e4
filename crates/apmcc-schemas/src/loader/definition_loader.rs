//! File-backed definition loader
//!
//! Copyright (c) 2025 apmcc contributors
//! Licensed under the Apache-2.0 license

use crate::loader::{
    error::{LoaderError, LoaderResult},
    parser::{self, Format},
};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A parsed definition file
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    /// Path the document was read from
    pub path: PathBuf,
    /// Format detected from the extension; `None` means it was read as YAML
    pub format: Option<Format>,
    /// Parsed document tree
    pub value: Value,
}

impl LoadedDocument {
    /// Whether the extension was one of the recognised definition extensions
    pub fn has_known_extension(&self) -> bool {
        self.format.is_some()
    }

    /// Format the content was actually parsed as
    pub fn parsed_as(&self) -> Format {
        self.format.unwrap_or(Format::Yaml)
    }
}

/// Reads definition files from disk
#[derive(Debug, Default)]
pub struct DefinitionLoader;

impl DefinitionLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and parse a definition file
    ///
    /// Files without a `.yaml`, `.yml` or `.json` extension are parsed as
    /// YAML, which also accepts JSON content.
    pub fn load(&self, path: &Path) -> LoaderResult<LoadedDocument> {
        let content =
            std::fs::read_to_string(path).map_err(|e| LoaderError::io_error(path.to_path_buf(), e))?;

        let format = Format::from_path(path);
        let value = parser::parse_str(&content, format.unwrap_or(Format::Yaml), path)?;

        Ok(LoadedDocument {
            path: path.to_path_buf(),
            format,
            value,
        })
    }
}
