use a11yscan::analyzer::parse_findings;
use a11yscan::cli::ReportFormatter;
use a11yscan::models::{FileReport, OutputFormat, Severity};
use a11yscan::ScanError;
use std::path::PathBuf;

const SAMPLE_RESPONSE: &str = r#"[{"title":"Missing Alt Text","issue_type":"Alt Text","severity":"High","line_numbers":[15],"description":"Image lacks alternative text","suggestion":"Add an alt attribute"}]"#;

#[test]
fn response_to_list_output_scenario() {
    let findings = parse_findings(SAMPLE_RESPONSE).unwrap();
    let report = FileReport::new(PathBuf::from("index.html"), findings);

    let formatter = ReportFormatter::new(OutputFormat::List, true);
    let output = formatter.format_file_report(&report);

    assert!(output.contains("\x1b[1mMissing Alt Text\x1b[0m"));
    assert!(output.contains("[Alt Text]"));
    assert!(output.contains("(Severity: High)"));
    assert!(output.contains("Lines: 15"));
}

#[test]
fn response_to_table_output_keeps_all_fields() {
    let findings = parse_findings(SAMPLE_RESPONSE).unwrap();
    let report = FileReport::new(PathBuf::from("index.html"), findings);

    let formatter = ReportFormatter::new(OutputFormat::Table, false);
    let output = formatter.format_file_report(&report);

    for expected in [
        "Missing Alt Text",
        "Alt Text",
        "High",
        "15",
        "Image lacks",
        "Add an alt",
    ] {
        assert!(output.contains(expected), "missing '{}' in:\n{}", expected, output);
    }
}

#[test]
fn invalid_json_yields_recoverable_error_not_panic() {
    let err = parse_findings("The file looks mostly fine to me!").unwrap_err();
    assert!(matches!(err, ScanError::ParseFailure(_)));
    assert!(!err.is_fatal());
}

#[test]
fn fenced_response_with_missing_fields_renders_with_placeholders() {
    let raw = "```json\n[{\"title\":\"Low contrast text\"}]\n```";
    let findings = parse_findings(raw).unwrap();

    assert_eq!(findings[0].severity, Severity::Unknown);

    let report = FileReport::new(PathBuf::from("style.css"), findings);
    let output = ReportFormatter::new(OutputFormat::List, false).format_file_report(&report);

    assert!(output.contains("Low contrast text"));
    assert!(output.contains("(Severity: Unknown)"));
}

#[test]
fn empty_findings_render_no_issues_message() {
    let findings = parse_findings("[]").unwrap();
    let report = FileReport::new(PathBuf::from("clean.html"), findings);

    for format in [OutputFormat::Table, OutputFormat::List] {
        let output = ReportFormatter::new(format, false).format_file_report(&report);
        assert!(output.contains("✅ No accessibility issues found."));
        assert!(!output.contains("Issue Title"));
    }
}
