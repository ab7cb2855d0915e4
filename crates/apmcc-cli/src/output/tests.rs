// Tests for report and summary formatting
//
// These tests drive the formatters directly and through an OutputWriter
// backed by an in-memory buffer.

use super::*;
use apmcc_schemas::ErrorKind;
use std::cell::RefCell;
use std::rc::Rc;

/// Writer that keeps everything written to it for inspection
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, quiet, 0, Box::new(buffer.clone()));
    (writer, buffer)
}

fn invalid_report() -> ValidationReport {
    ValidationReport {
        errors: vec![ValidationError::new(
            "chapters[0].challenges",
            ErrorKind::Empty,
            "must contain at least one challenge",
        )],
        warnings: vec![ValidationWarning::general("no goal challenge found")],
    }
}

fn summary() -> DefinitionSummary {
    DefinitionSummary {
        name: "Tower Climb".to_string(),
        chapter_count: 2,
        challenge_count: 4,
        goal_count: 1,
        progression_items: vec!["Floor Key".to_string(), "Lantern".to_string()],
        filler_categories: vec![],
    }
}

#[test]
fn test_report_formatting_human() {
    let report = invalid_report();
    let document = ReportDocument::new("game.yaml", &report);

    let formatted = format_report_human(&document, false);
    assert_eq!(
        formatted,
        "Validating game.yaml\n\
         ERROR: chapters[0].challenges: must contain at least one challenge\n\
         WARNING: no goal challenge found\n\
         ✗ game.yaml is invalid: 1 error(s), 1 warning(s)\n"
    );
}

#[test]
fn test_report_formatting_valid() {
    let report = ValidationReport::default();
    let document = ReportDocument::new("game.yaml", &report);
    assert!(format_report_human(&document, false).ends_with("✓ game.yaml is valid\n"));

    let report = ValidationReport {
        errors: vec![],
        warnings: vec![ValidationWarning::at("chapters", "odd")],
    };
    let document = ReportDocument::new("game.yaml", &report);
    let formatted = format_report_human(&document, false);
    assert!(formatted.contains("WARNING: chapters: odd\n"));
    assert!(formatted.contains("is valid with 1 warning(s)"));
}

#[test]
fn test_summary_formatting_human() {
    let formatted = format_summary_human(&summary());
    assert!(formatted.contains("Name: Tower Climb\n"));
    assert!(formatted.contains("Chapters: 2\n"));
    assert!(formatted.contains("Challenges: 4 (1 goal)\n"));
    assert!(formatted.contains("Progression items: Floor Key, Lantern\n"));
    assert!(formatted.contains("Filler categories: (none)\n"));
}

#[test]
fn test_writer_json_report() {
    let report = invalid_report();
    let (mut output, buffer) = writer(OutputFormat::Json, false);
    output.report(&ReportDocument::new("game.yaml", &report)).unwrap();

    let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
    assert_eq!(value["file"], "game.yaml");
    assert_eq!(value["outcome"], "invalid");
    assert_eq!(value["errors"][0]["path"], "chapters[0].challenges");
    assert_eq!(value["errors"][0]["kind"], "empty");
    assert_eq!(value["warnings"][0]["message"], "no goal challenge found");
    assert!(value.get("summary").is_none());
}

#[test]
fn test_writer_yaml_report_with_summary() {
    let report = ValidationReport::default();
    let (mut output, buffer) = writer(OutputFormat::Yaml, false);
    output
        .report(&ReportDocument::new("game.yaml", &report).with_summary(Some(summary())))
        .unwrap();

    let value: serde_yaml::Value = serde_yaml::from_str(&buffer.contents()).unwrap();
    assert_eq!(value["outcome"].as_str(), Some("valid"));
    assert_eq!(value["summary"]["chapter_count"].as_u64(), Some(2));
}

#[test]
fn test_quiet_human_report_keeps_issues_only() {
    let report = invalid_report();
    let (mut output, buffer) = writer(OutputFormat::Human, true);
    output.report(&ReportDocument::new("game.yaml", &report)).unwrap();
    output.info("hidden").unwrap();

    assert_eq!(
        buffer.contents(),
        "ERROR: chapters[0].challenges: must contain at least one challenge\n\
         WARNING: no goal challenge found\n"
    );
}

#[test]
fn test_human_messages_without_color() {
    let (mut output, buffer) = writer(OutputFormat::Human, false);
    output.info("Loading").unwrap();
    output.warning("careful").unwrap();
    output.section("Definition Summary").unwrap();

    assert_eq!(
        buffer.contents(),
        "INFO: Loading\nWARNING: careful\n\n=== Definition Summary ===\n"
    );
}

#[test]
fn test_machine_formats_skip_messages() {
    let (mut output, buffer) = writer(OutputFormat::JsonPretty, false);
    output.info("Loading").unwrap();
    output.warning("careful").unwrap();
    assert_eq!(buffer.contents(), "");
}

#[test]
fn test_output_writer_creation() {
    let writer = OutputWriter::new(OutputFormat::Human, true, false, 1);
    assert_eq!(writer.format(), OutputFormat::Human);
    assert!(writer.is_verbose());
    assert!(!OutputWriter::new(OutputFormat::Human, true, false, 0).is_verbose());
}

#[test]
fn test_output_formatter_trait() {
    let formatter = OutputFormat::Json;
    let formatted = formatter.format_summary(&summary()).unwrap();
    assert!(formatted.starts_with("{\"name\":\"Tower Climb\""));

    let formatted = OutputFormat::Human.format(&serde_json::json!({"test": "value"})).unwrap();
    assert!(formatted.contains("\"test\": \"value\""));
}
