use crate::tree::domain::ComponentType;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between argument
/// mistakes and failures while building the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the tree was built and rendered
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable report, malformed tree, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while building, indexing or loading a component tree.
///
/// The first two variants are contract violations of the tree itself;
/// the rest belong to the report-driven assembly around it.
#[derive(Debug, Error)]
pub enum TreeError {
    /// A required builder field was never set (or was set to an empty value)
    #[error("Component {field} must be set before building")]
    MissingField { field: &'static str },

    #[error("Only component of type FILE have a FileAttributes object")]
    FileAttributesUnavailable { component_type: ComponentType },

    #[error("Duplicate component uuid in tree: {uuid} (keys: {first_key}, {second_key})")]
    DuplicateUuid {
        uuid: String,
        first_key: String,
        second_key: String,
    },

    #[error("Duplicate component key in tree: {key} (uuids: {first_uuid}, {second_uuid})")]
    DuplicateKey {
        key: String,
        first_uuid: String,
        second_uuid: String,
    },

    #[error("Report file not found: {path}\n\n💡 Hint: {suggestion}")]
    ReportNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse report file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the report is valid JSON in the expected format")]
    ReportParseError { path: PathBuf, details: String },

    #[error("Invalid report: {reason}")]
    InvalidReport { reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid report path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a readable report file")]
    InvalidReportPath { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_missing_field_display() {
        let error = TreeError::MissingField { field: "uuid" };
        assert_eq!(
            format!("{}", error),
            "Component uuid must be set before building"
        );
    }

    #[test]
    fn test_file_attributes_unavailable_display() {
        let error = TreeError::FileAttributesUnavailable {
            component_type: ComponentType::Directory,
        };
        assert_eq!(
            format!("{}", error),
            "Only component of type FILE have a FileAttributes object"
        );
    }

    #[test]
    fn test_duplicate_uuid_display() {
        let error = TreeError::DuplicateUuid {
            uuid: "U1".to_string(),
            first_key: "proj:a".to_string(),
            second_key: "proj:b".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("U1"));
        assert!(display.contains("proj:a"));
        assert!(display.contains("proj:b"));
    }

    #[test]
    fn test_duplicate_key_display() {
        let error = TreeError::DuplicateKey {
            key: "proj:a".to_string(),
            first_uuid: "U1".to_string(),
            second_uuid: "U2".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Duplicate component key in tree: proj:a (uuids: U1, U2)"
        );
    }

    #[test]
    fn test_report_not_found_display() {
        let error = TreeError::ReportNotFound {
            path: PathBuf::from("/test/report.json"),
            suggestion: "Pass --report".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Report file not found"));
        assert!(display.contains("/test/report.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Pass --report"));
    }

    #[test]
    fn test_report_parse_error_display() {
        let error = TreeError::ReportParseError {
            path: PathBuf::from("/test/report.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse report file"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_error_downcast_through_anyhow() {
        let error: anyhow::Error = TreeError::MissingField { field: "key" }.into();
        assert!(matches!(
            error.downcast_ref::<TreeError>(),
            Some(TreeError::MissingField { field: "key" })
        ));
    }
}
