pub mod analyzer;
pub mod annotator;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod models;

pub use error::ScanError;

// Re-export commonly used types
pub use models::{
    FileReport, Finding, OutputFormat, ScanConfig, Severity, WcagLevel, WcagVersion,
};

pub use cli::CliHandler;
pub use config::CheckerConfig;
