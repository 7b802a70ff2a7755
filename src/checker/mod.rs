mod result;

pub use result::{FileRecord, ScanReport};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LinkAuditError, Result};
use crate::extract::LinkExtractor;
use crate::resolve;

/// Runs the per-file link pipeline: extract, normalize, resolve, test
/// existence.
pub struct LinkChecker {
    root: PathBuf,
    extractor: LinkExtractor,
}

impl LinkChecker {
    /// `root` must already be canonical; resolved paths are contained
    /// against it verbatim.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extractor: LinkExtractor::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check every reference in one HTML file.
    ///
    /// The file is decoded leniently: undecodable bytes are replaced, never
    /// an error. Raw references are recorded for every in-scope link whose
    /// resolved target does not exist, in order of appearance with
    /// duplicates kept.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn check_file(&self, path: &Path) -> Result<FileRecord> {
        let bytes = fs::read(path).map_err(|e| LinkAuditError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let missing = self
            .extractor
            .extract(&content)
            .into_iter()
            .filter(|raw| {
                let link = resolve::normalize(raw);
                resolve::resolve(&self.root, path, &link).is_some_and(|target| !target.exists())
            })
            .collect();

        let relative = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
        Ok(FileRecord::new(relative, missing))
    }

    /// Check files sequentially and aggregate the report.
    ///
    /// # Errors
    /// Returns an error if any file cannot be read; there is no
    /// partial-failure recovery beyond the decoding leniency.
    pub fn scan(&self, files: &[PathBuf]) -> Result<ScanReport> {
        let mut report = ScanReport::default();
        for file in files {
            report.push(self.check_file(file)?);
        }
        Ok(report)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
