use crate::error::ScanError;
use crate::models::{FileReport, Finding, OutputFormat, Severity};
use tabled::settings::object::Columns;
use tabled::settings::{Style, Width};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Issue Title")]
    title: String,
    #[tabled(rename = "Issue Type")]
    issue_type: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Line(s)")]
    lines: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Suggestion")]
    suggestion: String,
}

/// Renders findings as a table or list. Pure with respect to the findings
/// collection: all output is returned as a string, no I/O here.
pub struct ReportFormatter {
    format: OutputFormat,
    use_colors: bool,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat, use_colors: bool) -> Self {
        Self { format, use_colors }
    }

    pub fn format_file_report(&self, report: &FileReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_file_header(report));
        output.push('\n');

        if !report.has_issues() {
            output.push_str("✅ No accessibility issues found.\n");
            return output;
        }

        match self.format {
            OutputFormat::Table => output.push_str(&self.format_table(&report.findings)),
            OutputFormat::List => output.push_str(&self.format_list(&report.findings)),
        }

        output
    }

    fn format_file_header(&self, report: &FileReport) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[36m📄 {}\x1b[0m", report.path.display())
        } else {
            format!("📄 {}", report.path.display())
        }
    }

    fn format_table(&self, findings: &[Finding]) -> String {
        let rows: Vec<FindingRow> = findings
            .iter()
            .enumerate()
            .map(|(i, finding)| FindingRow {
                index: i + 1,
                title: finding.title.clone(),
                issue_type: finding.issue_type.clone(),
                severity: finding.severity.as_str().to_string(),
                lines: finding.lines_display(),
                description: finding.description.clone(),
                suggestion: finding.suggestion.clone(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        // Wide columns wrap instead of truncating so no content is lost.
        table.modify(Columns::single(1), Width::wrap(25));
        table.modify(Columns::single(5), Width::wrap(40));
        table.modify(Columns::single(6), Width::wrap(40));

        let mut output = table.to_string();
        output.push('\n');
        output.push_str(&"-".repeat(100));
        output.push('\n');
        output
    }

    fn format_list(&self, findings: &[Finding]) -> String {
        let mut output = String::new();

        for (i, finding) in findings.iter().enumerate() {
            let title = if self.use_colors {
                format!("\x1b[1m{}\x1b[0m", finding.title)
            } else {
                finding.title.clone()
            };

            output.push_str(&format!(
                "\n{}. {} [{}] (Severity: {})\n",
                i + 1,
                title,
                finding.issue_type,
                finding.severity.as_str()
            ));
            output.push_str(&format!("   Lines: {}\n", finding.lines_display()));
            output.push_str(&format!("   Description: {}\n", finding.description));
            output.push_str(&format!("   Suggestion: {}\n", finding.suggestion));
            output.push_str(&"-".repeat(80));
            output.push('\n');
        }

        output
    }

    /// One-line totals after all files have rendered.
    pub fn format_scan_summary(&self, reports: &[FileReport]) -> String {
        let total_findings: usize = reports.iter().map(|r| r.findings.len()).sum();
        let failed_files = reports
            .iter()
            .filter(|r| r.findings.iter().any(|f| f.is_scan_error()))
            .count();

        let mut by_severity = [0usize; 3];
        for finding in reports.iter().flat_map(|r| r.findings.iter()) {
            match finding.severity {
                Severity::High => by_severity[0] += 1,
                Severity::Medium => by_severity[1] += 1,
                Severity::Low => by_severity[2] += 1,
                Severity::Unknown => {}
            }
        }

        let mut summary = format!(
            "📊 Scanned {} file(s), {} finding(s)",
            reports.len(),
            total_findings
        );
        if total_findings > 0 {
            summary.push_str(&format!(
                " ({} high, {} medium, {} low)",
                by_severity[0], by_severity[1], by_severity[2]
            ));
        }
        if failed_files > 0 {
            summary.push_str(&format!(", {} file(s) could not be scanned", failed_files));
        }
        summary
    }

    pub fn format_error(&self, error: &ScanError) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[31m❌ {}\x1b[0m", error)
        } else {
            format!("❌ {}", error)
        }
    }

    pub fn format_progress(&self, message: &str) -> String {
        if self.use_colors {
            format!("\x1b[36m🔍 {}\x1b[0m", message)
        } else {
            format!("🔍 {}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_finding() -> Finding {
        Finding::new("Missing Alt Text", "Alt Text", Severity::High)
            .with_lines(vec![15])
            .with_description("Image has no alt attribute")
            .with_suggestion("Add a descriptive alt attribute")
    }

    #[test]
    fn table_mode_surfaces_every_field() {
        let report = FileReport::new(PathBuf::from("index.html"), vec![sample_finding()]);
        let formatter = ReportFormatter::new(OutputFormat::Table, false);

        let output = formatter.format_file_report(&report);

        assert!(output.contains("index.html"));
        assert!(output.contains("Issue Title"));
        assert!(output.contains("Missing Alt Text"));
        assert!(output.contains("Alt Text"));
        assert!(output.contains("High"));
        assert!(output.contains("15"));
        assert!(output.contains("Image has no alt"));
        assert!(output.contains("Add a descriptive"));
    }

    #[test]
    fn list_mode_matches_expected_shape() {
        let report = FileReport::new(PathBuf::from("index.html"), vec![sample_finding()]);
        let formatter = ReportFormatter::new(OutputFormat::List, true);

        let output = formatter.format_file_report(&report);

        assert!(output.contains("\x1b[1mMissing Alt Text\x1b[0m"));
        assert!(output.contains("[Alt Text]"));
        assert!(output.contains("(Severity: High)"));
        assert!(output.contains("Lines: 15"));
        assert!(output.contains("Description: Image has no alt attribute"));
        assert!(output.contains("Suggestion: Add a descriptive alt attribute"));
    }

    #[test]
    fn list_mode_without_colors_has_no_ansi() {
        let report = FileReport::new(PathBuf::from("a.html"), vec![sample_finding()]);
        let formatter = ReportFormatter::new(OutputFormat::List, false);

        let output = formatter.format_file_report(&report);
        assert!(!output.contains("\x1b["));
        assert!(output.contains("1. Missing Alt Text [Alt Text] (Severity: High)"));
    }

    #[test]
    fn no_findings_renders_no_issues_message() {
        let report = FileReport::clean(PathBuf::from("clean.html"));

        for format in [OutputFormat::Table, OutputFormat::List] {
            let output = ReportFormatter::new(format, false).format_file_report(&report);
            assert!(output.contains("No accessibility issues found"));
            assert!(!output.contains("Issue Title"));
        }
    }

    #[test]
    fn no_finding_is_silently_dropped() {
        let findings = vec![
            Finding::new("First", "Contrast", Severity::Low).with_lines(vec![1]),
            Finding::new("Second", "Forms", Severity::Medium).with_lines(vec![2]),
            Finding::new("Third", "ARIA", Severity::High).with_lines(vec![3]),
        ];
        let report = FileReport::new(PathBuf::from("a.html"), findings);

        for format in [OutputFormat::Table, OutputFormat::List] {
            let output = ReportFormatter::new(format, false).format_file_report(&report);
            for title in ["First", "Second", "Third"] {
                assert!(output.contains(title), "{} missing in {:?}", title, format);
            }
        }
    }

    #[test]
    fn lines_render_sorted_ascending() {
        let finding = sample_finding().with_lines(vec![30, 2, 14]);
        let report = FileReport::new(PathBuf::from("a.html"), vec![finding]);

        let output = ReportFormatter::new(OutputFormat::List, false).format_file_report(&report);
        assert!(output.contains("Lines: 2, 14, 30"));
    }

    #[test]
    fn summary_counts_by_severity() {
        let reports = vec![
            FileReport::new(
                PathBuf::from("a.html"),
                vec![
                    Finding::new("x", "Contrast", Severity::High),
                    Finding::new("y", "Forms", Severity::Low),
                ],
            ),
            FileReport::clean(PathBuf::from("b.html")),
            FileReport::failed(PathBuf::from("c.html"), "boom"),
        ];

        let summary =
            ReportFormatter::new(OutputFormat::Table, false).format_scan_summary(&reports);

        assert!(summary.contains("3 file(s)"));
        assert!(summary.contains("1 high"));
        assert!(summary.contains("1 low"));
        assert!(summary.contains("1 file(s) could not be scanned"));
    }

    #[test]
    fn error_formatting_includes_message() {
        let formatter = ReportFormatter::new(OutputFormat::Table, false);
        let output = formatter.format_error(&ScanError::EmptyResponse);
        assert!(output.contains("Empty response"));
        assert!(!output.contains("\x1b["));
    }
}
