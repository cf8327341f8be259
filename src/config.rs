use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "checker.config.json";

/// File-level configuration from `checker.config.json`. A missing file means
/// built-in defaults; a present but malformed file is a fatal config error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    #[serde(rename = "SUPPORTED_EXTENSIONS")]
    pub supported_extensions: Vec<String>,

    #[serde(rename = "EXCLUDED_DIRS")]
    pub excluded_dirs: Vec<String>,

    #[serde(rename = "EXCLUDED_PATTERNS")]
    pub excluded_patterns: Vec<String>,

    #[serde(rename = "MODEL")]
    pub model: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            supported_extensions: [".html", ".twig", ".css", ".scss", ".pcss", ".jsx", ".tsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_dirs: ["node_modules", ".git", "__pycache__", "dist", "build"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excluded_patterns: Vec::new(),
            model: "gpt-4o".to_string(),
        }
    }
}

impl CheckerConfig {
    /// Loads `checker.config.json` from the current directory.
    pub fn load() -> Result<Self, ScanError> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self, ScanError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            ScanError::ConfigError(format!("Cannot parse {}: {}", path.display(), e))
        })
    }
}

/// Resolves the OpenAI credential. A `.env` file in the current directory is
/// loaded first (existing process env wins), then `OPENAI_API_KEY` is read.
/// Absence is fatal before any scanning begins.
pub fn resolve_api_key() -> Result<String, ScanError> {
    let _ = dotenvy::dotenv();

    match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ScanError::MissingApiKey),
    }
}

/// Validates the scan root before any work starts: must exist, be a
/// directory, and be readable.
pub fn validate_root_dir(path: &Path) -> Result<PathBuf, ScanError> {
    let metadata = fs::metadata(path).map_err(|e| ScanError::RootDirectory {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    if !metadata.is_dir() {
        return Err(ScanError::RootDirectory {
            path: path.display().to_string(),
            reason: "not a directory".to_string(),
        });
    }

    fs::read_dir(path).map_err(|e| ScanError::RootDirectory {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(path.to_path_buf())
}
