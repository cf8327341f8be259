use crate::error::ScanError;
use crate::models::Finding;

/// Parses the raw model response into findings.
///
/// The upstream text-generation service offers no schema guarantee, so this
/// is the sole guarantor of structural validity: markdown code fences are
/// stripped, the outermost JSON array is extracted from surrounding prose,
/// and missing or oddly-typed fields fall back to safe defaults. A payload
/// with no parsable array is a recoverable `ParseFailure`, never a panic.
pub fn parse_findings(raw: &str) -> Result<Vec<Finding>, ScanError> {
    let stripped = strip_code_fences(raw);

    let candidate = match extract_json_array(&stripped) {
        Some(arr) => arr,
        None => {
            // Models sometimes return a single bare object instead of an array.
            if let Some(obj) = extract_json_object(&stripped) {
                let finding: Finding = serde_json::from_str(obj)
                    .map_err(|e| ScanError::ParseFailure(e.to_string()))?;
                return Ok(vec![finding]);
            }
            return Err(ScanError::ParseFailure(
                "no JSON array found in response".to_string(),
            ));
        }
    };

    serde_json::from_str(candidate).map_err(|e| ScanError::ParseFailure(e.to_string()))
}

fn strip_code_fences(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    trimmed
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn extract_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
