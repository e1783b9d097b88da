// file: src/repository/classifier.rs
// description: text versus binary classification of file contents
// reference: NUL-byte shortcut followed by a strict UTF-8 decode

use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Text,
    Binary,
}

impl FileKind {
    pub fn is_binary(self) -> bool {
        self == FileKind::Binary
    }
}

/// Classifies raw bytes. Empty input is always text; a NUL byte marks the
/// content binary before any decoding is attempted.
pub fn classify(data: &[u8]) -> FileKind {
    if data.is_empty() {
        return FileKind::Text;
    }

    if data.contains(&0) {
        return FileKind::Binary;
    }

    match std::str::from_utf8(data) {
        Ok(_) => FileKind::Text,
        Err(_) => FileKind::Binary,
    }
}

/// Reads `path` and classifies it. Unreadable files count as text.
pub fn classify_file(path: &Path) -> FileKind {
    match fs::read(path) {
        Ok(data) => classify(&data),
        Err(err) => {
            debug!("Skipping unreadable file {}: {}", path.display(), err);
            FileKind::Text
        }
    }
}
