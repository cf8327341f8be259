use crate::analyzer::llm_client::{create_llm_client, LlmProvider};
use crate::analyzer::prompts::PromptTemplate;
use crate::analyzer::response::parse_findings;
use crate::annotator::annotate_lines;
use crate::error::ScanError;
use crate::models::{FileReport, ScanConfig};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Drives the per-file pipeline: read → annotate → prompt → request → parse.
///
/// Files are independent, so batches run concurrently up to the configured
/// limit. `join_all` preserves input order within a batch and batches run in
/// sequence, so results always come back in collection order. Any per-file
/// failure is converted here into a scan-error finding; nothing below this
/// boundary aborts the run.
pub struct ScanOrchestrator {
    llm_client: Arc<dyn LlmProvider + Send + Sync>,
    max_concurrent_requests: usize,
    verbose: bool,
}

impl ScanOrchestrator {
    pub fn new(model: &str, api_key: String, max_concurrent: usize) -> Result<Self, ScanError> {
        let client = create_llm_client(model, api_key)?;

        Ok(Self {
            llm_client: client.into(),
            max_concurrent_requests: max_concurrent.max(1),
            verbose: false,
        })
    }

    pub fn with_client(client: Arc<dyn LlmProvider + Send + Sync>, max_concurrent: usize) -> Self {
        Self {
            llm_client: client,
            max_concurrent_requests: max_concurrent.max(1),
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub async fn scan_files(&self, files: &[PathBuf], config: &ScanConfig) -> Vec<FileReport> {
        let mut reports = Vec::with_capacity(files.len());

        for chunk in files.chunks(self.max_concurrent_requests) {
            let batch_futures: Vec<_> = chunk
                .iter()
                .map(|path| self.scan_single_file(path, config))
                .collect();

            reports.extend(join_all(batch_futures).await);
        }

        reports
    }

    async fn scan_single_file(&self, path: &Path, config: &ScanConfig) -> FileReport {
        if self.verbose {
            eprintln!("📄 Scanning: {}", path.display());
        }

        match self.analyze_file(path, config).await {
            Ok(report) => report,
            Err(e) => {
                if self.verbose {
                    eprintln!("⚠️ {}: {}", path.display(), e);
                }
                FileReport::failed(path.to_path_buf(), e.to_string())
            }
        }
    }

    async fn analyze_file(&self, path: &Path, config: &ScanConfig) -> Result<FileReport, ScanError> {
        let content = tokio::fs::read_to_string(path).await?;
        let annotated = annotate_lines(&content);

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let prompt =
            PromptTemplate::build_scan_prompt(&annotated, &file_name, config.level, config.version);
        let system_prompt = PromptTemplate::build_system_prompt();

        let raw_response = self.llm_client.complete(&system_prompt, &prompt).await?;

        let findings = parse_findings(&raw_response)?;
        Ok(FileReport::new(path.to_path_buf(), findings))
    }

    pub fn get_model_name(&self) -> &str {
        self.llm_client.get_model_name()
    }
}
