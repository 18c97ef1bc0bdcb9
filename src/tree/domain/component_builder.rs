//! Staged construction of [`Component`]s
//!
//! A builder is parameterized by what it builds: `ComponentBuilder<ContainerType>`
//! for every non-FILE type and `ComponentBuilder<FileAttributes>` for files.
//! Only the latter has a file-attributes setter, so a directory carrying file
//! attributes or a file without them cannot be written down.

use super::{Component, ComponentKind, ContainerType, FileAttributes, ReportAttributes};
use crate::shared::error::TreeError;
use crate::shared::Result;

/// Builder for non-FILE components
pub type ContainerBuilder = ComponentBuilder<ContainerType>;

/// Builder for FILE components
pub type FileBuilder = ComponentBuilder<FileAttributes>;

impl From<ContainerType> for ComponentKind {
    fn from(container: ContainerType) -> Self {
        match container {
            ContainerType::Project => ComponentKind::Project,
            ContainerType::Module => ComponentKind::Module,
            ContainerType::Directory => ComponentKind::Directory,
            ContainerType::View => ComponentKind::View,
            ContainerType::Subview => ComponentKind::Subview,
            ContainerType::ProjectView => ComponentKind::ProjectView,
        }
    }
}

impl From<FileAttributes> for ComponentKind {
    fn from(attributes: FileAttributes) -> Self {
        ComponentKind::File(attributes)
    }
}

/// Accumulates the fields and children of one component
///
/// Scalar setters overwrite earlier values; `add_child` and `add_children`
/// append. Any already built component is accepted as a child whatever
/// its type.
#[derive(Debug)]
pub struct ComponentBuilder<K> {
    kind: K,
    uuid: Option<String>,
    key: Option<String>,
    name: Option<String>,
    description: Option<String>,
    report_attributes: Option<ReportAttributes>,
    children: Vec<Component>,
}

impl ComponentBuilder<ContainerType> {
    pub fn new(container_type: ContainerType) -> Self {
        Self::with_kind(container_type)
    }
}

impl ComponentBuilder<FileAttributes> {
    pub fn file(file_attributes: FileAttributes) -> Self {
        Self::with_kind(file_attributes)
    }

    pub fn file_attributes(mut self, file_attributes: FileAttributes) -> Self {
        self.kind = file_attributes;
        self
    }
}

impl<K> ComponentBuilder<K> {
    fn with_kind(kind: K) -> Self {
        Self {
            kind,
            uuid: None,
            key: None,
            name: None,
            description: None,
            report_attributes: None,
            children: Vec::new(),
        }
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn report_attributes(mut self, report_attributes: ReportAttributes) -> Self {
        self.report_attributes = Some(report_attributes);
        self
    }

    pub fn add_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    pub fn add_children(mut self, children: impl IntoIterator<Item = Component>) -> Self {
        self.children.extend(children);
        self
    }
}

impl<K: Into<ComponentKind>> ComponentBuilder<K> {
    /// Validates the accumulated fields and produces the component
    ///
    /// Checks run in order: uuid, key, name, report attributes.
    ///
    /// # Errors
    /// Returns `TreeError::MissingField` naming the first field that is
    /// unset (or empty, for uuid and key).
    pub fn build(self) -> Result<Component> {
        let uuid = non_empty(self.uuid).ok_or(TreeError::MissingField { field: "uuid" })?;
        let key = non_empty(self.key).ok_or(TreeError::MissingField { field: "key" })?;
        let name = self.name.ok_or(TreeError::MissingField { field: "name" })?;
        let report_attributes = self.report_attributes.ok_or(TreeError::MissingField {
            field: "report attributes",
        })?;

        let kind: ComponentKind = self.kind.into();
        tracing::debug!(
            uuid = %uuid,
            key = %key,
            component_type = %kind.component_type(),
            children = self.children.len(),
            "built component"
        );

        Ok(Component {
            uuid,
            key,
            name,
            description: self.description,
            kind,
            report_attributes,
            children: self.children,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
