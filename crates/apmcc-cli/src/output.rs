//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with specialized
//! support for validation reports and definition summaries.

use crate::cli::OutputFormat;
use crate::error::Result;
use apmcc_core::DefinitionSummary;
use apmcc_schemas::{Outcome, ValidationError, ValidationReport, ValidationWarning};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Everything reported about one definition file
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument<'a> {
    /// File that was checked
    pub file: String,
    /// Classification from the validator
    pub outcome: Outcome,
    /// Errors in document order
    pub errors: &'a [ValidationError],
    /// Advisory warnings
    pub warnings: &'a [ValidationWarning],
    /// Definition summary, present when requested and the definition is valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DefinitionSummary>,
}

impl<'a> ReportDocument<'a> {
    pub fn new(file: impl Into<String>, report: &'a ValidationReport) -> Self {
        Self {
            file: file.into(),
            outcome: report.outcome(),
            errors: &report.errors,
            warnings: &report.warnings,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: Option<DefinitionSummary>) -> Self {
        self.summary = summary;
        self
    }
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a validation report
    fn format_report(&self, document: &ReportDocument<'_>, use_color: bool) -> Result<String>;

    /// Format a definition summary
    fn format_summary(&self, summary: &DefinitionSummary) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_report(&self, document: &ReportDocument<'_>, use_color: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_report_human(document, use_color)),
            _ => self.format(document),
        }
    }

    fn format_summary(&self, summary: &DefinitionSummary) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_summary_human(summary)),
            _ => self.format(summary),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self::with_writer(format, use_color, quiet, verbose, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            verbose,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Check if verbose output should be shown
    pub fn is_verbose(&self) -> bool {
        self.verbose > 0
    }

    fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "WARNING:".yellow().bold(), message))
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");

        if self.is_human() || !formatted.ends_with('\n') {
            self.writeln(&formatted)
        } else {
            // serde_yaml output already ends with a newline
            self.write(&formatted)
        }
    }

    /// Write a validation report
    ///
    /// In quiet human mode only the individual errors and warnings are
    /// printed; the header and verdict line are dropped.
    pub fn report(&mut self, document: &ReportDocument<'_>) -> Result<()> {
        if !self.is_human() {
            return self.data(document);
        }

        if self.quiet {
            for line in issue_lines(document, self.use_color) {
                self.writeln(&line)?;
            }
            return Ok(());
        }

        let formatted = self.format.format_report(document, self.use_color)?;
        self.write(&formatted)?;

        if let Some(summary) = &document.summary {
            self.summary(summary)?;
        }
        Ok(())
    }

    /// Write a definition summary
    pub fn summary(&mut self, summary: &DefinitionSummary) -> Result<()> {
        if !self.is_human() {
            return self.data(summary);
        }
        if self.quiet {
            return Ok(());
        }

        self.section("Definition Summary")?;
        let formatted = self.format.format_summary(summary)?;
        self.write(&formatted)
    }
}

/// Render one `ERROR:`/`WARNING:` line per issue
fn issue_lines(document: &ReportDocument<'_>, use_color: bool) -> Vec<String> {
    let (error_label, warning_label) = if use_color {
        ("ERROR:".red().bold().to_string(), "WARNING:".yellow().bold().to_string())
    } else {
        ("ERROR:".to_string(), "WARNING:".to_string())
    };

    let errors = document
        .errors
        .iter()
        .map(|error| format!("{} {}: {}", error_label, error.path, error.message));

    let warnings = document.warnings.iter().map(|warning| match &warning.path {
        Some(path) => format!("{} {}: {}", warning_label, path, warning.message),
        None => format!("{} {}", warning_label, warning.message),
    });

    errors.chain(warnings).collect()
}

/// Format a validation report for human reading
fn format_report_human(document: &ReportDocument<'_>, use_color: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Validating {}\n", document.file));

    for line in issue_lines(document, use_color) {
        output.push_str(&line);
        output.push('\n');
    }

    let verdict = match document.outcome {
        Outcome::Valid if document.warnings.is_empty() => format!("✓ {} is valid", document.file),
        Outcome::Valid => format!(
            "✓ {} is valid with {} warning(s)",
            document.file,
            document.warnings.len()
        ),
        Outcome::Invalid => format!(
            "✗ {} is invalid: {} error(s), {} warning(s)",
            document.file,
            document.errors.len(),
            document.warnings.len()
        ),
    };

    let verdict = match (use_color, document.outcome) {
        (true, Outcome::Valid) => verdict.green().to_string(),
        (true, Outcome::Invalid) => verdict.red().to_string(),
        (false, _) => verdict,
    };
    output.push_str(&verdict);
    output.push('\n');

    output
}

/// Format a definition summary for human reading
fn format_summary_human(summary: &DefinitionSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Name: {}\n", summary.name));
    output.push_str(&format!("Chapters: {}\n", summary.chapter_count));
    output.push_str(&format!(
        "Challenges: {} ({} goal)\n",
        summary.challenge_count, summary.goal_count
    ));
    output.push_str(&format!("Progression items: {}\n", join_or_none(&summary.progression_items)));
    output.push_str(&format!("Filler categories: {}\n", join_or_none(&summary.filler_categories)));

    output
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
