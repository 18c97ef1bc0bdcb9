use crate::shared::Result;
use crate::tree::domain::ComponentType;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

/// Decoded scanner report: a flat list of components linked by refs
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerReport {
    /// Ref of the component at the top of the tree
    pub root_ref: i32,
    /// When the analysis ran; copied into every component's report attributes
    #[serde(default)]
    pub analysis_date: Option<DateTime<Utc>>,
    pub components: Vec<ReportComponent>,
}

/// One component entry of a scanner report
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportComponent {
    #[serde(rename = "ref")]
    pub report_ref: i32,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub lines: Option<u32>,
    #[serde(default)]
    pub is_test: bool,
    /// Refs of the children, in display order
    #[serde(default)]
    pub children: Vec<i32>,
}

/// ReportReader port for loading a scanner report
///
/// This port abstracts where reports come from so that tree assembly
/// can be exercised without touching the file system.
pub trait ReportReader {
    /// Reads and decodes the report stored at `report_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report does not exist or cannot be read
    /// - The content is not a valid report
    fn read_report(&self, report_path: &Path) -> Result<ScannerReport>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_component() {
        let component: ReportComponent = serde_json::from_str(
            r#"{"ref": 3, "type": "DIRECTORY", "key": "proj:src", "name": "src"}"#,
        )
        .unwrap();

        assert_eq!(component.report_ref, 3);
        assert_eq!(component.component_type, ComponentType::Directory);
        assert!(component.uuid.is_none());
        assert!(!component.is_test);
        assert!(component.children.is_empty());
    }

    #[test]
    fn test_deserialize_report_with_date() {
        let report: ScannerReport = serde_json::from_str(
            r#"{
                "rootRef": 1,
                "analysisDate": "2017-03-01T12:00:00Z",
                "components": [
                    {"ref": 1, "type": "PROJECT", "key": "proj", "name": "Project", "children": [2]},
                    {"ref": 2, "type": "FILE", "key": "proj:a.rs", "name": "a.rs",
                     "language": "rust", "lines": 12, "isTest": true}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(report.root_ref, 1);
        assert!(report.analysis_date.is_some());
        assert_eq!(report.components.len(), 2);
        assert_eq!(report.components[0].children, vec![2]);
        assert_eq!(report.components[1].lines, Some(12));
        assert!(report.components[1].is_test);
    }
}
