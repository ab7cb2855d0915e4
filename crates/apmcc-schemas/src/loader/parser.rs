//! Definition parsing for YAML and JSON formats
//!
//! Copyright (c) 2025 apmcc contributors
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use crate::validation::{ValidationContext, ValidationMode};
use serde_json::{Map, Number, Value};
use serde_yaml::Value as YamlValue;
use std::path::Path;

/// Supported file formats for definition parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension, `None` when the extension is not recognised
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|ext| ext.to_str())?;
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Parse definition content with an explicit format
///
/// Both formats produce the same `serde_json::Value` tree, with mapping keys
/// in document order. Empty content parses to `null`.
pub fn parse_str(content: &str, format: Format, path: &Path) -> LoaderResult<Value> {
    match format {
        Format::Yaml => parse_yaml(content, path),
        Format::Json => parse_json(content, path),
    }
}

/// Parse YAML content
pub fn parse_yaml(content: &str, path: &Path) -> LoaderResult<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }

    // Parse as YAML first so syntax errors keep their YAML location
    let yaml_value: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| LoaderError::yaml_parse_error(path.to_path_buf(), e))?;

    convert_yaml(yaml_value, &ValidationContext::new(ValidationMode::Standard), path)
}

/// Convert a YAML tree into the JSON data model
///
/// Scalar keys (numbers, booleans) become their string form. Keys with no
/// string form (`null`, sequences, mappings) and non-finite numbers (`.inf`,
/// `.nan`) are rejected, naming the node they were found at.
fn convert_yaml(value: YamlValue, node: &ValidationContext, path: &Path) -> LoaderResult<Value> {
    match value {
        YamlValue::Null => Ok(Value::Null),
        YamlValue::Bool(flag) => Ok(Value::Bool(flag)),
        YamlValue::String(text) => Ok(Value::String(text)),
        YamlValue::Number(number) => convert_number(&number).ok_or_else(|| {
            LoaderError::unrepresentable(
                path.to_path_buf(),
                &node.path,
                format!("number {} is not finite", number),
            )
        }),
        YamlValue::Sequence(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| convert_yaml(item, &node.child_index(index), path))
            .collect::<LoaderResult<Vec<_>>>()
            .map(Value::Array),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = mapping_key(&key).ok_or_else(|| {
                    LoaderError::unrepresentable(
                        path.to_path_buf(),
                        &node.path,
                        format!("mapping key {} is not a string", describe_key(&key)),
                    )
                })?;
                let value = convert_yaml(value, &node.child(&key), path)?;
                object.insert(key, value);
            }
            Ok(Value::Object(object))
        }
        // Tags carry no meaning in a definition; keep the tagged value
        YamlValue::Tagged(tagged) => convert_yaml(tagged.value, node, path),
    }
}

fn convert_number(number: &serde_yaml::Number) -> Option<Value> {
    if let Some(int) = number.as_i64() {
        Some(Value::Number(int.into()))
    } else if let Some(uint) = number.as_u64() {
        Some(Value::Number(uint.into()))
    } else {
        number.as_f64().and_then(Number::from_f64).map(Value::Number)
    }
}

fn mapping_key(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(text) => Some(text.clone()),
        YamlValue::Number(number) => Some(number.to_string()),
        YamlValue::Bool(flag) => Some(flag.to_string()),
        YamlValue::Tagged(tagged) => mapping_key(&tagged.value),
        YamlValue::Null | YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
    }
}

fn describe_key(key: &YamlValue) -> &'static str {
    match key {
        YamlValue::Null => "null",
        YamlValue::Sequence(_) => "of sequence type",
        YamlValue::Mapping(_) => "of mapping type",
        _ => "of unsupported type",
    }
}

/// Parse JSON content
pub fn parse_json(content: &str, path: &Path) -> LoaderResult<Value> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(content).map_err(|e| LoaderError::json_parse_error(path.to_path_buf(), e))
}
