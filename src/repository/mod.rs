// file: src/repository/mod.rs
// description: Repository scanning module exports
// reference: Internal module structure

pub mod classifier;
pub mod report;
pub mod scanner;
pub mod tracked;

pub use classifier::{FileKind, classify, classify_file};
pub use report::ScanReport;
pub use scanner::{ClassifiedFile, RepoScanner, scan};
pub use tracked::{TrackedFiles, tracked_files};
