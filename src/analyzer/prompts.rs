use crate::models::{WcagLevel, WcagVersion};

pub struct PromptTemplate;

impl PromptTemplate {
    /// Builds the per-file scan prompt. Pure: the same inputs always produce
    /// the same prompt text.
    pub fn build_scan_prompt(
        annotated_content: &str,
        file_name: &str,
        level: WcagLevel,
        version: WcagVersion,
    ) -> String {
        format!(
            r#"You are an expert in web accessibility and WCAG compliance.

The following code includes line numbers.

Identify WCAG {version} Level {level} violations in the code and return **only valid JSON** with this structure:
[
  {{
    "title": "Short title of the issue",
    "issue_type": "Type/category of the issue (e.g., Contrast, Alt Text, Keyboard Navigation)",
    "description": "Detailed description of the issue",
    "line_numbers": [list of affected lines],
    "code_snippet": "Relevant code snippet",
    "suggestion": "Suggestion to fix it",
    "severity": "High | Medium | Low"
  }}
]

Rules:
- Do not include any extra text outside JSON.
- Severity should be based on WCAG impact.
- If no issues found, return [].

WCAG Version: {version}
Accessibility Level: {level}

File: {file_name}
----------------------
{content}"#,
            version = version.as_str(),
            level = level.as_str(),
            file_name = file_name,
            content = annotated_content,
        )
    }

    pub fn build_system_prompt() -> String {
        "You are an expert accessibility auditor.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_wcag_context() {
        let prompt = PromptTemplate::build_scan_prompt(
            "   1: <img src=\"a.png\">",
            "index.html",
            WcagLevel::AA,
            WcagVersion::V2_1,
        );

        assert!(prompt.contains("WCAG 2.1 Level AA violations"));
        assert!(prompt.contains("WCAG Version: 2.1"));
        assert!(prompt.contains("Accessibility Level: AA"));
        assert!(prompt.contains("File: index.html"));
        assert!(prompt.contains("   1: <img src=\"a.png\">"));
    }

    #[test]
    fn prompt_demands_json_only_output() {
        let prompt = PromptTemplate::build_scan_prompt("", "a.html", WcagLevel::A, WcagVersion::V2_0);

        assert!(prompt.contains("only valid JSON"));
        assert!(prompt.contains("\"severity\""));
        assert!(prompt.contains("If no issues found, return []"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let build = || {
            PromptTemplate::build_scan_prompt(
                "   1: <div>",
                "page.twig",
                WcagLevel::AAA,
                WcagVersion::V2_2,
            )
        };
        assert_eq!(build(), build());
    }
}
