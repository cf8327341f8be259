pub mod args;
pub mod prompt;
pub mod reporter;

pub use args::Cli;
pub use prompt::UserPrompter;
pub use reporter::ReportFormatter;

use crate::analyzer::ScanOrchestrator;
use crate::collector::FileCollector;
use crate::config::{resolve_api_key, validate_root_dir, CheckerConfig};
use crate::error::ScanError;
use crate::models::{OutputFormat, ScanConfig, WcagLevel, WcagVersion};

type StdinPrompter = UserPrompter<std::io::BufReader<std::io::Stdin>>;

/// Lazily constructs the interactive prompter, showing the welcome banner on
/// first use.
fn stdin_prompter(slot: &mut Option<StdinPrompter>, use_colors: bool) -> &mut StdinPrompter {
    slot.get_or_insert_with(|| {
        let prompter = UserPrompter::stdin(use_colors);
        prompter.display_welcome();
        prompter
    })
}

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<i32, ScanError> {
        // Credential check comes first: nothing is scanned without a key.
        let api_key = resolve_api_key()?;

        let checker_config = CheckerConfig::load_from(&self.cli.config)?;
        let scan_config = self.resolve_scan_config(checker_config)?;

        if self.cli.is_verbose() {
            eprintln!(
                "🔧 Model: {}, extensions: {:?}, excluded dirs: {:?}",
                scan_config.model, scan_config.supported_extensions, scan_config.excluded_dirs
            );
        }

        let files = FileCollector::new(&scan_config)
            .verbose(self.cli.is_verbose())
            .collect();

        if files.is_empty() {
            println!("⚠️ No supported files found in the specified directory.");
            return Ok(0);
        }

        println!(
            "\n🔍 Scanning {} file(s) for WCAG {} ({}) issues...\n",
            files.len(),
            scan_config.version.as_str(),
            scan_config.level.as_str()
        );

        let orchestrator =
            ScanOrchestrator::new(&scan_config.model, api_key, self.cli.concurrency)?
                .verbose(self.cli.is_verbose());

        if self.cli.is_debug() {
            eprintln!("🔧 Using model: {}", orchestrator.get_model_name());
        }

        let reports = orchestrator.scan_files(&files, &scan_config).await;

        let formatter =
            ReportFormatter::new(scan_config.format, self.cli.should_use_color());
        for report in &reports {
            println!("{}", formatter.format_file_report(report));
        }
        println!("{}", formatter.format_scan_summary(&reports));

        // Per-file failures and zero findings are both non-errors.
        Ok(0)
    }

    /// Merges config-file values with CLI flags and interactive answers into
    /// the read-only per-run configuration. The welcome banner shows only
    /// when at least one selection actually needs prompting.
    fn resolve_scan_config(&self, checker: CheckerConfig) -> Result<ScanConfig, ScanError> {
        let mut prompter = None;
        let use_colors = self.cli.should_use_color();

        let level = match &self.cli.level {
            Some(value) => WcagLevel::from_str(value)?,
            None => stdin_prompter(&mut prompter, use_colors).prompt_level()?,
        };

        let version = match &self.cli.wcag_version {
            Some(value) => WcagVersion::from_str(value)?,
            None => stdin_prompter(&mut prompter, use_colors).prompt_version()?,
        };

        let format = match &self.cli.format {
            Some(value) => OutputFormat::from_str(value)?,
            None => stdin_prompter(&mut prompter, use_colors).prompt_format()?,
        };

        let root_dir = match &self.cli.dir {
            Some(value) => value.clone(),
            None => stdin_prompter(&mut prompter, use_colors).prompt_directory()?,
        };
        let root_dir = validate_root_dir(&root_dir)?;

        let model = self
            .cli
            .model
            .clone()
            .unwrap_or(checker.model);

        Ok(ScanConfig {
            level,
            version,
            format,
            root_dir,
            supported_extensions: checker.supported_extensions,
            excluded_dirs: checker.excluded_dirs,
            excluded_patterns: checker.excluded_patterns,
            model,
        })
    }
}
