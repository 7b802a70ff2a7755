use serde::Serialize;

use crate::checker::ScanReport;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    files: Vec<FileEntry>,
    total_missing: usize,
}

#[derive(Serialize)]
struct FileEntry {
    path: String,
    missing: Vec<String>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let output = JsonOutput {
            files: report
                .files
                .iter()
                .map(|record| FileEntry {
                    // Forward slashes regardless of platform, like the text view
                    path: record.path.to_string_lossy().replace('\\', "/"),
                    missing: record
                        .distinct()
                        .into_iter()
                        .map(ToString::to_string)
                        .collect(),
                })
                .collect(),
            total_missing: report.total_missing,
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
