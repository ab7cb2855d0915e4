//! Validation command handler

use super::utils::{check_definition, validation_mode};
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{OutputWriter, ReportDocument};
use apmcc_core::GameDefinition;
use tracing::{info, instrument};

/// Handle the validate command
#[instrument(skip(config, output), fields(file = %args.file.display(), strict = args.strict))]
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &format!("file: {}", args.file.display()));
    info!("Starting validation");

    let mode = validation_mode(args.strict, config.validation.strict);
    let deny_warnings = args.deny_warnings || config.validation.deny_warnings;

    let (document, report) = check_definition(&args.file, mode, output)?;

    let summary = if report.is_valid() && (args.summary || output.is_verbose()) {
        Some(GameDefinition::from_value(&document.value)?.summary())
    } else {
        None
    };

    output.report(
        &ReportDocument::new(args.file.display().to_string(), &report).with_summary(summary),
    )?;

    if !report.is_valid() || (deny_warnings && report.has_warnings()) {
        info!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            deny_warnings,
            "Definition rejected"
        );
        return Err(Error::ValidationFailed {
            errors: report.errors.len(),
            warnings: report.warnings.len(),
        });
    }

    info!("Definition is valid");
    Ok(())
}
