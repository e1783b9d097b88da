// file: src/repository/report.rs
// description: human-readable binary scan report and exit status

use crate::repository::scanner::ClassifiedFile;
use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

pub const CLEAN_MESSAGE: &str = "No binary files detected among tracked sources.";
pub const DIRTY_HEADLINE: &str = "Binary-like files detected:";
pub const REMEDIATION_HINT: &str =
    "Remove these files or add them to .gitignore before committing.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    binary_files: Vec<PathBuf>,
}

impl ScanReport {
    pub fn from_results(results: &[ClassifiedFile]) -> Self {
        Self {
            binary_files: results
                .iter()
                .filter(|r| r.is_binary)
                .map(|r| r.path.clone())
                .collect(),
        }
    }

    pub fn binary_files(&self) -> &[PathBuf] {
        &self.binary_files
    }

    pub fn is_clean(&self) -> bool {
        self.binary_files.is_empty()
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_clean() { 0 } else { 1 }
    }

    /// Renders the full report; `colored` only affects the headline.
    pub fn render(&self, colored: bool) -> String {
        if self.is_clean() {
            return paint(CLEAN_MESSAGE, colored, false);
        }

        let mut out = paint(DIRTY_HEADLINE, colored, true);
        out.push_str("\n\n");
        for path in &self.binary_files {
            out.push_str(&format!(" - {}\n", path.display()));
        }
        out.push('\n');
        out.push_str(REMEDIATION_HINT);
        out
    }
}

fn paint(headline: &str, colored: bool, failure: bool) -> String {
    match (colored, failure) {
        (false, _) => headline.to_string(),
        (true, false) => headline.green().to_string(),
        (true, true) => headline.red().bold().to_string(),
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
