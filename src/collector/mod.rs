use crate::models::ScanConfig;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walks the scan root and returns candidate file paths.
///
/// Directories named in the exclude list, and hidden directories, are pruned
/// so their descendants are never visited. Files are kept only when their
/// extension is on the allow-list and their name matches no excluded pattern.
/// Unreadable entries are skipped, not errors. Order is depth-first in
/// whatever order the filesystem yields entries; no sort guarantee.
pub struct FileCollector<'a> {
    config: &'a ScanConfig,
    verbose: bool,
}

impl<'a> FileCollector<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self {
            config,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn collect(&self) -> Vec<PathBuf> {
        let verbose = self.verbose;
        WalkDir::new(&self.config.root_dir)
            .into_iter()
            .filter_entry(|entry| !self.is_pruned_dir(entry.path(), entry.file_type().is_dir()))
            .filter_map(move |entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    if verbose {
                        eprintln!("⚠️ Skipping unreadable entry: {}", err);
                    }
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| self.is_candidate(entry.path()))
            .map(|entry| entry.into_path())
            .collect()
    }

    fn is_pruned_dir(&self, path: &Path, is_dir: bool) -> bool {
        if !is_dir || path == self.config.root_dir.as_path() {
            return false;
        }

        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.starts_with('.') || self.config.is_excluded_dir(name),
            None => false,
        }
    }

    fn is_candidate(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        if !self.config.is_supported_extension(name) {
            return false;
        }

        !self
            .config
            .excluded_patterns
            .iter()
            .any(|pattern| pattern_matches(pattern, name))
    }
}

/// Glob-style matching with `*` as the only wildcard. A pattern without a
/// wildcard matches as a substring of the file name.
fn pattern_matches(pattern: &str, name: &str) -> bool {
    if !pattern.contains('*') {
        return name.contains(pattern);
    }

    let parts: Vec<&str> = pattern.split('*').collect();
    let mut remaining = name;

    if !parts[0].is_empty() {
        if !remaining.starts_with(parts[0]) {
            return false;
        }
        remaining = &remaining[parts[0].len()..];
    }

    let last = parts[parts.len() - 1];
    if !last.is_empty() {
        if !remaining.ends_with(last) {
            return false;
        }
        remaining = &remaining[..remaining.len() - last.len()];
    }

    for part in &parts[1..parts.len() - 1] {
        if part.is_empty() {
            continue;
        }
        match remaining.find(part) {
            Some(pos) => remaining = &remaining[pos + part.len()..],
            None => return false,
        }
    }

    true
}
