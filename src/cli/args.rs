use crate::error::ScanError;
use crate::models::{OutputFormat, WcagLevel, WcagVersion};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "a11yscan")]
#[command(about = "AI-assisted WCAG accessibility scanner for frontend source files")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// WCAG conformance level to check (A, AA, AAA). Prompted if omitted.
    #[arg(short = 'l', long)]
    pub level: Option<String>,

    /// WCAG version to check (2.0, 2.1, 2.2). Prompted if omitted.
    #[arg(short = 'w', long = "wcag-version")]
    pub wcag_version: Option<String>,

    /// Output format (table, list). Prompted if omitted.
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Directory to scan. Prompted if omitted; blank answer means the
    /// current working directory.
    #[arg(short = 'd', long)]
    pub dir: Option<PathBuf>,

    /// Override the model from checker.config.json
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Path to the config file
    #[arg(long, default_value = "checker.config.json")]
    pub config: PathBuf,

    /// Maximum concurrent requests to the model (1 = fully sequential)
    #[arg(long, default_value = "2", value_parser = validate_concurrency)]
    pub concurrency: usize,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including prompt sizes
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, ScanError> {
        let cli = Self::try_parse().map_err(|e| ScanError::InvalidArguments(e.to_string()))?;
        cli.validate()?;
        Ok(cli)
    }

    /// Flags given on the command line must be valid up front; a bad
    /// selection is fatal rather than silently re-prompted.
    pub fn validate(&self) -> Result<(), ScanError> {
        if let Some(ref level) = self.level {
            WcagLevel::from_str(level)?;
        }
        if let Some(ref version) = self.wcag_version {
            WcagVersion::from_str(version)?;
        }
        if let Some(ref format) = self.format {
            OutputFormat::from_str(format)?;
        }
        Ok(())
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn should_use_color(&self) -> bool {
        std::env::var("NO_COLOR").is_err()
    }
}

fn validate_concurrency(s: &str) -> Result<usize, String> {
    let concurrency: usize = s.parse().map_err(|_| "Concurrency must be a number")?;

    if (1..=16).contains(&concurrency) {
        Ok(concurrency)
    } else {
        Err("Concurrency must be between 1 and 16".to_string())
    }
}
