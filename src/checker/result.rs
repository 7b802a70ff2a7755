use std::collections::BTreeSet;
use std::path::PathBuf;

/// Missing references found in a single HTML file.
///
/// `missing` holds raw attribute values in order of appearance, duplicates
/// included. Display deduplicates per file, the running total does not; the
/// original checker behaved this way and the asymmetry is preserved.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Source file path, relative to the repository root.
    pub path: PathBuf,
    pub missing: Vec<String>,
}

impl FileRecord {
    #[must_use]
    pub const fn new(path: PathBuf, missing: Vec<String>) -> Self {
        Self { path, missing }
    }

    #[must_use]
    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }

    /// Distinct missing references, sorted lexicographically.
    #[must_use]
    pub fn distinct(&self) -> Vec<&str> {
        self.missing
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Aggregated result of a full scan.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Records for files with at least one missing reference, in scan order.
    pub files: Vec<FileRecord>,
    /// Raw count of missing occurrences across all files, pre-deduplication.
    pub total_missing: usize,
}

impl ScanReport {
    /// Fold a file's record into the report.
    ///
    /// The total counts every occurrence; records without missing references
    /// are dropped.
    pub fn push(&mut self, record: FileRecord) {
        self.total_missing += record.missing.len();
        if record.has_missing() {
            self.files.push(record);
        }
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.total_missing == 0
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
