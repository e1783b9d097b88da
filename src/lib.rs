// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod repository;
pub mod samples;
pub mod utils;

pub use config::{Config, GeneratorConfig, ScannerConfig};
pub use error::{HygieneError, Result};
pub use repository::{ClassifiedFile, FileKind, RepoScanner, ScanReport, classify, scan};
pub use samples::{Account, SampleCategory, SampleDataGenerator, TransactionRecord};
