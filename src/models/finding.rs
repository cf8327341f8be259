use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Qualitative impact ranking of a finding. The remote service gives no
/// schema guarantee, so anything unrecognized maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Unknown,
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Unknown => "Unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Unknown,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Unknown
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Tolerate non-string severities as well; the model occasionally
        // emits numbers or null here.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => Severity::from_str(&s),
            _ => Severity::Unknown,
        })
    }
}

/// A single detected accessibility issue. Created by parsing the model
/// response; immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub issue_type: String,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub line_numbers: Vec<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code_snippet: Option<String>,
    #[serde(default)]
    pub suggestion: String,
}

impl Finding {
    pub fn new(title: impl Into<String>, issue_type: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            issue_type: issue_type.into(),
            severity,
            line_numbers: Vec::new(),
            description: String::new(),
            code_snippet: None,
            suggestion: String::new(),
        }
    }

    pub fn with_lines(mut self, lines: Vec<u32>) -> Self {
        self.line_numbers = lines;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = suggestion.into();
        self
    }

    /// Synthetic finding recording a per-file failure so one bad file stays
    /// visible in the output without aborting the scan.
    pub fn scan_error(message: impl Into<String>) -> Self {
        Self::new("Scan failed for this file", "Scan Error", Severity::Unknown)
            .with_description(message)
            .with_suggestion("Re-run the scan for this file or check connectivity")
    }

    pub fn is_scan_error(&self) -> bool {
        self.issue_type == "Scan Error"
    }

    /// Line numbers as a comma-joined, ascending string for display.
    pub fn lines_display(&self) -> String {
        let mut lines = self.line_numbers.clone();
        lines.sort_unstable();
        lines
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Findings for one scanned file, in the order the model reported them.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
}

impl FileReport {
    pub fn new(path: PathBuf, findings: Vec<Finding>) -> Self {
        Self { path, findings }
    }

    pub fn clean(path: PathBuf) -> Self {
        Self {
            path,
            findings: Vec::new(),
        }
    }

    pub fn failed(path: PathBuf, message: impl Into<String>) -> Self {
        Self {
            path,
            findings: vec![Finding::scan_error(message)],
        }
    }

    pub fn has_issues(&self) -> bool {
        !self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parsing_defaults_to_unknown() {
        assert_eq!(Severity::from_str("High"), Severity::High);
        assert_eq!(Severity::from_str("MEDIUM"), Severity::Medium);
        assert_eq!(Severity::from_str("low"), Severity::Low);
        assert_eq!(Severity::from_str("catastrophic"), Severity::Unknown);
        assert_eq!(Severity::from_str(""), Severity::Unknown);
    }

    #[test]
    fn severity_deserializes_from_non_string() {
        let finding: Finding = serde_json::from_str(r#"{"title":"x","severity":3}"#).unwrap();
        assert_eq!(finding.severity, Severity::Unknown);

        let finding: Finding = serde_json::from_str(r#"{"title":"x","severity":null}"#).unwrap();
        assert_eq!(finding.severity, Severity::Unknown);
    }

    #[test]
    fn missing_fields_default_to_placeholders() {
        let finding: Finding = serde_json::from_str(r#"{"title":"Missing label"}"#).unwrap();

        assert_eq!(finding.title, "Missing label");
        assert_eq!(finding.issue_type, "");
        assert_eq!(finding.severity, Severity::Unknown);
        assert!(finding.line_numbers.is_empty());
        assert_eq!(finding.description, "");
        assert_eq!(finding.suggestion, "");
        assert!(finding.code_snippet.is_none());
    }

    #[test]
    fn lines_display_sorts_ascending() {
        let finding =
            Finding::new("t", "Contrast", Severity::Low).with_lines(vec![42, 3, 17, 3]);
        assert_eq!(finding.lines_display(), "3, 3, 17, 42");
    }

    #[test]
    fn scan_error_finding_is_recognizable() {
        let finding = Finding::scan_error("connection reset");
        assert!(finding.is_scan_error());
        assert_eq!(finding.severity, Severity::Unknown);
        assert!(finding.description.contains("connection reset"));
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert!(Severity::Low > Severity::Unknown);
    }
}
