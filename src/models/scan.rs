use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// WCAG conformance level to check against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

/// WCAG specification version to check against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagVersion {
    V2_0,
    V2_1,
    V2_2,
}

/// How findings are presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Table,
    List,
}

impl WcagLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WcagLevel::A => "A",
            WcagLevel::AA => "AA",
            WcagLevel::AAA => "AAA",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, ScanError> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(WcagLevel::A),
            "AA" => Ok(WcagLevel::AA),
            "AAA" => Ok(WcagLevel::AAA),
            other => Err(ScanError::InvalidArguments(format!(
                "Invalid WCAG level '{}'. Use A, AA, or AAA",
                other
            ))),
        }
    }
}

impl WcagVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            WcagVersion::V2_0 => "2.0",
            WcagVersion::V2_1 => "2.1",
            WcagVersion::V2_2 => "2.2",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, ScanError> {
        match s.trim() {
            "2.0" => Ok(WcagVersion::V2_0),
            "2.1" => Ok(WcagVersion::V2_1),
            "2.2" => Ok(WcagVersion::V2_2),
            other => Err(ScanError::InvalidArguments(format!(
                "Invalid WCAG version '{}'. Use 2.0, 2.1, or 2.2",
                other
            ))),
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::List => "list",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, ScanError> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "list" => Ok(OutputFormat::List),
            other => Err(ScanError::InvalidArguments(format!(
                "Invalid output format '{}'. Use table or list",
                other
            ))),
        }
    }
}

/// The resolved set of options governing one run. Built once from the config
/// file, CLI flags, and interactive prompts; read-only afterwards.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub level: WcagLevel,
    pub version: WcagVersion,
    pub format: OutputFormat,
    pub root_dir: PathBuf,
    pub supported_extensions: Vec<String>,
    pub excluded_dirs: Vec<String>,
    pub excluded_patterns: Vec<String>,
    pub model: String,
}

impl ScanConfig {
    pub fn is_supported_extension(&self, file_name: &str) -> bool {
        self.supported_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }

    pub fn is_excluded_dir(&self, dir_name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == dir_name)
    }
}
