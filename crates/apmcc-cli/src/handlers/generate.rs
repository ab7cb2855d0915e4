//! Generate command handler

use super::utils::{check_definition, validation_mode};
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{OutputWriter, ReportDocument};
use apmcc_core::GameDefinition;
use tracing::{info, instrument};

/// Handle the generate command
///
/// The definition is validated first so that problems in the file are
/// reported before the unsupported generation step.
#[instrument(skip(config, output), fields(file = %args.file.display()))]
pub fn handle_generate(args: GenerateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let mode = validation_mode(args.strict, config.validation.strict);
    let (document, report) = check_definition(&args.file, mode, output)?;

    if !report.is_valid() {
        output.report(&ReportDocument::new(args.file.display().to_string(), &report))?;
        return Err(Error::ValidationFailed {
            errors: report.errors.len(),
            warnings: report.warnings.len(),
        });
    }

    let definition = GameDefinition::from_value(&document.value)?;
    info!(definition = %definition.name, "Definition validated, starting generation");
    output.info(&format!("Generating game from '{}'", definition.name))?;

    apmcc_core::generate(&definition)?;
    Ok(())
}
