use crate::ports::outbound::{ReportReader, ScannerReport};
use crate::shared::error::TreeError;
use crate::shared::Result;
use crate::shared::security::{validate_readable_file, MAX_REPORT_SIZE};
use std::fs;
use std::path::Path;

/// JsonReportReader adapter for reading scanner reports from the file system
///
/// This adapter implements the ReportReader port for JSON report files.
pub struct JsonReportReader {
    max_size: u64,
}

impl JsonReportReader {
    pub fn new() -> Self {
        Self {
            max_size: MAX_REPORT_SIZE,
        }
    }

    /// Overrides the maximum report size in bytes
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }
}

impl Default for JsonReportReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for JsonReportReader {
    fn read_report(&self, report_path: &Path) -> Result<ScannerReport> {
        if !report_path.exists() {
            return Err(TreeError::ReportNotFound {
                path: report_path.to_path_buf(),
                suggestion: "Check the --report argument; the path is resolved from the current directory.".to_string(),
            }
            .into());
        }

        validate_readable_file(report_path, "report", self.max_size).map_err(|e| {
            TreeError::InvalidReportPath {
                path: report_path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let content = fs::read_to_string(report_path).map_err(|e| TreeError::ReportParseError {
            path: report_path.to_path_buf(),
            details: e.to_string(),
        })?;

        let report: ScannerReport =
            serde_json::from_str(&content).map_err(|e| TreeError::ReportParseError {
                path: report_path.to_path_buf(),
                details: e.to_string(),
            })?;

        tracing::debug!(
            components = report.components.len(),
            root_ref = report.root_ref,
            "decoded scanner report"
        );
        Ok(report)
    }
}
