// file: src/repository/tracked.rs
// description: Tracked file enumeration from the git index
// reference: https://docs.rs/gix

use crate::error::{HygieneError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths recorded in the git index, relative to the working tree root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFiles {
    pub workdir: PathBuf,
    pub paths: Vec<PathBuf>,
}

/// Finds the working copy containing `root` and lists every path in its index.
///
/// `root` may be any directory inside the working tree. Paths come back in
/// index order; entries that appear once per conflict stage are collapsed.
pub fn tracked_files(root: &Path) -> Result<TrackedFiles> {
    let repo = gix::discover(root).map_err(|e| {
        HygieneError::Environment(format!(
            "Failed to find a repository at {}: {}",
            root.display(),
            e
        ))
    })?;

    let workdir = repo.workdir().map(Path::to_path_buf).ok_or_else(|| {
        HygieneError::Environment(format!(
            "Repository at {} has no working tree",
            root.display()
        ))
    })?;

    let index = repo.index_or_empty().map_err(|e| {
        HygieneError::Environment(format!("Failed to read index: {}", e))
    })?;

    let mut paths: Vec<PathBuf> = index
        .entries()
        .iter()
        .map(|entry| gix::path::from_bstr(entry.path(&index)).into_owned())
        .collect();
    paths.dedup();

    debug!("Index holds {} entries", index.entries().len());
    info!("Found {} tracked files in {}", paths.len(), workdir.display());
    Ok(TrackedFiles { workdir, paths })
}
