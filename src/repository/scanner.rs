// file: src/repository/scanner.rs
// description: Tracked file scanning with binary content detection
// reference: https://docs.rs/gix

use crate::config::ScannerConfig;
use crate::error::Result;
use crate::repository::classifier::classify_file;
use crate::repository::tracked::tracked_files;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct RepoScanner {
    config: ScannerConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub is_binary: bool,
}

impl RepoScanner {
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    pub fn root(&self) -> &Path {
        &self.config.repo_root
    }

    /// Classifies every tracked file of the working copy containing the root,
    /// in index order. Paths are relative to the working tree. Only the index
    /// query can fail; per-file read errors fall back to text.
    pub fn scan(&self) -> Result<Vec<ClassifiedFile>> {
        let root = self.root();
        info!("Scanning tracked files in {}", root.display());

        let tracked = tracked_files(root)?;
        let workdir = tracked.workdir;

        let results: Vec<ClassifiedFile> = tracked
            .paths
            .into_iter()
            .map(|path| {
                let is_binary = classify_file(&workdir.join(&path)).is_binary();
                if is_binary {
                    debug!("Binary-like content: {}", path.display());
                }
                ClassifiedFile { path, is_binary }
            })
            .collect();

        info!(
            "Classified {} files, {} binary-like",
            results.len(),
            results.iter().filter(|r| r.is_binary).count()
        );
        Ok(results)
    }
}

pub fn scan(root: &Path) -> Result<Vec<ClassifiedFile>> {
    RepoScanner::new(ScannerConfig {
        repo_root: root.to_path_buf(),
    })
    .scan()
}
