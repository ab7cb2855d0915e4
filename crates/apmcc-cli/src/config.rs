//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//!
//! Command-line arguments and environment variables take precedence over
//! whatever is loaded here; that merge happens at the call sites.

use crate::cli::{ConfigFormat, OutputFormat};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File stem used for project configuration files
const PROJECT_CONFIG_STEM: &str = ".apmcc";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Validation settings
    pub validation: ValidationConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (human, json, json-pretty, yaml)
    pub format: String,

    /// Use colored output when writing to a terminal
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no -v flag is given (trace, debug, info, warn, error)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Log format (compact, full, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Log file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Validation defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject unknown keys
    pub strict: bool,

    /// Treat warnings as failures
    pub deny_warnings: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a file, choosing the format by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config(format!("config file not found: {}", path.display()))
            } else {
                Error::config(format!("failed to read {}: {}", path.display(), e))
            }
        })?;

        let invalid = |e: &dyn std::fmt::Display| Error::config(format!("invalid config file {}: {}", path.display(), e));

        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(|e| invalid(&e)),
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| invalid(&e)),
            Some("json") => serde_json::from_str(&content).map_err(|e| invalid(&e)),
            _ => Err(Error::config(format!(
                "unsupported config format for {}; expected .toml, .yaml, .yml or .json",
                path.display()
            ))),
        }
    }

    /// Load configuration from the first default location that exists
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading configuration file");
                Self::from_file(&path)
            }
            None => {
                tracing::debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// First existing file among the default locations
    pub fn find_config_file() -> Option<PathBuf> {
        Self::default_config_paths().into_iter().find(|p| p.is_file())
    }

    /// Get default configuration file paths to check, in priority order
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // Current directory
        for extension in ["toml", "yaml", "json"] {
            paths.push(PathBuf::from(format!("{}.{}", PROJECT_CONFIG_STEM, extension)));
        }

        // User config directory
        if let Some(config_dir) = dirs::config_dir() {
            let apmcc_dir = config_dir.join("apmcc");
            for extension in ["toml", "yaml", "json"] {
                paths.push(apmcc_dir.join(format!("config.{}", extension)));
            }
        }

        paths
    }

    /// Output format from the command line, falling back to the configured one
    pub fn effective_output_format(&self, cli_format: Option<OutputFormat>) -> Result<OutputFormat> {
        match cli_format {
            Some(format) => Ok(format),
            None => OutputFormat::from_config_name(&self.output.format).ok_or_else(|| {
                Error::config(format!(
                    "unknown output format '{}' (expected human, json, json-pretty or yaml)",
                    self.output.format
                ))
            }),
        }
    }

    /// Serialize the configuration in the requested format
    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| Error::config(format!("failed to serialize config: {}", e)))
            }
            ConfigFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            ConfigFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }
}
