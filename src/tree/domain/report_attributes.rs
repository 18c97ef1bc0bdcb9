use chrono::{DateTime, Utc};

/// ReportAttributes value object tracing a component back to the report entry it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportAttributes {
    report_ref: i32,
    version: Option<String>,
    analysis_date: Option<DateTime<Utc>>,
    path: Option<String>,
}

impl ReportAttributes {
    /// Starts a builder for the report entry numbered `report_ref`
    pub fn builder(report_ref: i32) -> ReportAttributesBuilder {
        ReportAttributesBuilder {
            report_ref,
            version: None,
            analysis_date: None,
            path: None,
        }
    }

    pub fn report_ref(&self) -> i32 {
        self.report_ref
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn analysis_date(&self) -> Option<DateTime<Utc>> {
        self.analysis_date
    }

    /// Path of the component relative to its module, when the report gives one
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

pub struct ReportAttributesBuilder {
    report_ref: i32,
    version: Option<String>,
    analysis_date: Option<DateTime<Utc>>,
    path: Option<String>,
}

impl ReportAttributesBuilder {
    pub fn version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn analysis_date(mut self, analysis_date: Option<DateTime<Utc>>) -> Self {
        self.analysis_date = analysis_date;
        self
    }

    pub fn path(mut self, path: Option<String>) -> Self {
        self.path = path;
        self
    }

    pub fn build(self) -> ReportAttributes {
        ReportAttributes {
            report_ref: self.report_ref,
            version: self.version,
            analysis_date: self.analysis_date,
            path: self.path,
        }
    }
}
