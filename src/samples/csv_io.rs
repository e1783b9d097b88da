// file: src/samples/csv_io.rs
// description: csv serialization of sample transaction records
// reference: https://docs.rs/csv

use crate::error::{HygieneError, Result};
use crate::samples::category::find_category;
use crate::samples::generator::TransactionRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const HEADER: [&str; 5] = ["date", "description", "amount", "account", "category"];

/// Writes `records` to `path`, replacing any existing file, and returns the
/// absolute path written. The header is written even for an empty batch.
pub fn write(records: &[TransactionRecord], path: &Path) -> Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| HygieneError::file_operation(parent, e))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .map_err(|e| HygieneError::file_operation(path, e))?;
    drop(writer);

    let written = fs::canonicalize(path).map_err(|e| HygieneError::file_operation(path, e))?;
    info!("Wrote {} records to {}", records.len(), written.display());
    Ok(written)
}

/// Parses a file written by [`write`]. Rows naming a category outside the
/// fixed set are rejected.
pub fn read(path: &Path) -> Result<Vec<TransactionRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize()
        .collect::<std::result::Result<Vec<TransactionRecord>, csv::Error>>()?;

    if let Some(unknown) = records
        .iter()
        .find(|r| find_category(&r.category).is_none())
    {
        return Err(HygieneError::InvalidRecord {
            path: path.to_path_buf(),
            message: format!("unknown category {:?}", unknown.category),
        });
    }

    Ok(records)
}
