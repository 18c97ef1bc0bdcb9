use crate::application::dto::{BuildTreeRequest, BuildTreeResponse};
use crate::ports::outbound::{ReportComponent, ReportReader, ScannerReport, UuidSupplier};
use crate::shared::error::TreeError;
use crate::shared::Result;
use crate::tree::domain::{
    Component, ComponentBuilder, ComponentType, ContainerType, FileAttributes, ReportAttributes,
};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// Deepest parent-to-child chain accepted from a report
///
/// Assembly, traversal and rendering all recurse once per level, so the
/// cap keeps every later stage well inside the main thread's stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// BuildComponentTreeUseCase - turns a scanner report into a component tree
///
/// Components are built bottom-up: every child is fully built before the
/// builder of its parent receives it.
///
/// # Type Parameters
/// * `RR` - ReportReader implementation
/// * `US` - UuidSupplier implementation
pub struct BuildComponentTreeUseCase<RR, US> {
    report_reader: RR,
    uuid_supplier: US,
}

impl<RR, US> BuildComponentTreeUseCase<RR, US>
where
    RR: ReportReader,
    US: UuidSupplier,
{
    /// Creates a new BuildComponentTreeUseCase with injected dependencies
    pub fn new(report_reader: RR, uuid_supplier: US) -> Self {
        Self {
            report_reader,
            uuid_supplier,
        }
    }

    /// Reads the report named by the request and assembles its tree
    pub fn execute(&self, request: BuildTreeRequest) -> Result<BuildTreeResponse> {
        tracing::info!(report = %request.report_path.display(), "loading scanner report");
        let report = self.report_reader.read_report(&request.report_path)?;
        self.assemble(&report, request.generate_missing_uuids)
    }

    /// Assembles the tree of an already decoded report
    ///
    /// # Errors
    /// Returns `TreeError::InvalidReport` when a ref is unknown, duplicated or
    /// reached twice, when components nest deeper than [`MAX_NESTING_DEPTH`],
    /// when a FILE entry has no line count, or when a uuid is
    /// missing and generation is disabled. Builder failures are returned as is.
    pub fn assemble(
        &self,
        report: &ScannerReport,
        generate_missing_uuids: bool,
    ) -> Result<BuildTreeResponse> {
        let mut entries: HashMap<i32, &ReportComponent> = HashMap::new();
        for entry in &report.components {
            if entries.insert(entry.report_ref, entry).is_some() {
                return Err(invalid(format!(
                    "component ref {} is declared more than once",
                    entry.report_ref
                )));
            }
        }

        let mut assembly = Assembly {
            entries,
            visited: HashSet::new(),
            analysis_date: report.analysis_date,
            generate_missing_uuids,
            uuid_supplier: &self.uuid_supplier,
            generated_uuids: 0,
        };
        let root = assembly.build(report.root_ref, 1)?;

        let unreachable = report.components.len() - assembly.visited.len();
        if unreachable > 0 {
            tracing::warn!(
                unreachable,
                "report components not reachable from the root were ignored"
            );
        }
        tracing::info!(
            components = assembly.visited.len(),
            generated_uuids = assembly.generated_uuids,
            "assembled component tree"
        );

        Ok(BuildTreeResponse::new(root, assembly.generated_uuids))
    }
}

/// State of one bottom-up assembly pass
struct Assembly<'r, US> {
    entries: HashMap<i32, &'r ReportComponent>,
    visited: HashSet<i32>,
    analysis_date: Option<DateTime<Utc>>,
    generate_missing_uuids: bool,
    uuid_supplier: &'r US,
    generated_uuids: usize,
}

impl<US: UuidSupplier> Assembly<'_, US> {
    /// `depth` counts the root as 1
    fn build(&mut self, report_ref: i32, depth: usize) -> Result<Component> {
        if depth > MAX_NESTING_DEPTH {
            return Err(invalid(format!(
                "component nesting deeper than {} at ref {}",
                MAX_NESTING_DEPTH, report_ref
            )));
        }

        let entry = *self
            .entries
            .get(&report_ref)
            .ok_or_else(|| invalid(format!("component ref {} is not declared", report_ref)))?;

        // A second visit means a cycle or a child shared by two parents.
        if !self.visited.insert(report_ref) {
            return Err(invalid(format!(
                "component ref {} is reached more than once",
                report_ref
            )));
        }

        let children = entry
            .children
            .iter()
            .map(|child_ref| self.build(*child_ref, depth + 1))
            .collect::<Result<Vec<_>>>()?;

        let uuid = self.uuid_of(entry)?;
        let report_attributes = ReportAttributes::builder(entry.report_ref)
            .version(entry.version.clone())
            .analysis_date(self.analysis_date)
            .path(entry.path.clone())
            .build();

        match entry.component_type {
            ComponentType::File => {
                let lines = entry.lines.ok_or_else(|| {
                    invalid(format!("FILE component {} has no line count", entry.key))
                })?;
                let attributes = FileAttributes::new(entry.is_test, entry.language.clone(), lines);
                ComponentBuilder::file(attributes)
                    .uuid(uuid)
                    .key(entry.key.as_str())
                    .name(entry.name.as_str())
                    .description(entry.description.clone())
                    .report_attributes(report_attributes)
                    .add_children(children)
                    .build()
            }
            other => {
                let container = ContainerType::try_from(other)?;
                ComponentBuilder::new(container)
                    .uuid(uuid)
                    .key(entry.key.as_str())
                    .name(entry.name.as_str())
                    .description(entry.description.clone())
                    .report_attributes(report_attributes)
                    .add_children(children)
                    .build()
            }
        }
    }

    fn uuid_of(&mut self, entry: &ReportComponent) -> Result<String> {
        match &entry.uuid {
            Some(uuid) => Ok(uuid.clone()),
            None if self.generate_missing_uuids => {
                self.generated_uuids += 1;
                Ok(self.uuid_supplier.uuid_for(&entry.key))
            }
            None => Err(invalid(format!(
                "component {} has no uuid and uuid generation is disabled",
                entry.key
            ))),
        }
    }
}

fn invalid(reason: String) -> anyhow::Error {
    TreeError::InvalidReport { reason }.into()
}
