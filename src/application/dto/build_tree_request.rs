use std::path::PathBuf;

/// BuildTreeRequest - request DTO for the tree assembly use case
#[derive(Debug, Clone)]
pub struct BuildTreeRequest {
    /// Path of the scanner report to assemble
    pub report_path: PathBuf,
    /// Whether components without a uuid in the report get a generated one
    pub generate_missing_uuids: bool,
}

impl BuildTreeRequest {
    pub fn new(report_path: PathBuf, generate_missing_uuids: bool) -> Self {
        Self {
            report_path,
            generate_missing_uuids,
        }
    }
}
