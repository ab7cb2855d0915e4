//! Shared utilities for command handlers

use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use apmcc_schemas::{
    validate_definition, DefinitionLoader, LoadedDocument, ValidationMode, ValidationReport,
};
use std::path::Path;
use tracing::debug;

/// Validation mode from the command flag, falling back to the configured default
pub fn validation_mode(strict_flag: bool, strict_config: bool) -> ValidationMode {
    if strict_flag || strict_config {
        ValidationMode::Strict
    } else {
        ValidationMode::Standard
    }
}

/// Load a definition file, warning when its extension is not a YAML one
pub fn load_definition(path: &Path, output: &mut OutputWriter) -> Result<LoadedDocument> {
    let _timer = Timer::with_details("load_definition", &path.display().to_string());

    let document = DefinitionLoader::new().load(path)?;
    debug!(format = ?document.parsed_as(), "Definition parsed");

    if !document.has_known_extension() {
        debug!(file = %path.display(), "Unrecognised extension, parsing as YAML");
        output.warning(&format!(
            "{} does not have a .yaml or .yml extension; parsing it as YAML",
            path.display()
        ))?;
    }

    Ok(document)
}

/// Load and validate a definition file
pub fn check_definition(
    path: &Path,
    mode: ValidationMode,
    output: &mut OutputWriter,
) -> Result<(LoadedDocument, ValidationReport)> {
    let document = load_definition(path, output)?;

    let report = {
        let _timer = Timer::new("definition_validation");
        validate_definition(&document.value, mode)
    };

    debug!(
        mode = ?mode,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validation finished"
    );

    Ok((document, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_mode() {
        assert_eq!(validation_mode(false, false), ValidationMode::Standard);
        assert_eq!(validation_mode(true, false), ValidationMode::Strict);
        assert_eq!(validation_mode(false, true), ValidationMode::Strict);
    }
}
