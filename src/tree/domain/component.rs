use super::{ComponentType, FileAttributes, ReportAttributes};
use crate::shared::error::TreeError;
use crate::shared::Result;
use std::hash::{Hash, Hasher};

/// What a component is, with the data only that kind may carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentKind {
    Project,
    Module,
    Directory,
    File(FileAttributes),
    View,
    Subview,
    ProjectView,
}

impl ComponentKind {
    pub fn component_type(&self) -> ComponentType {
        match self {
            ComponentKind::Project => ComponentType::Project,
            ComponentKind::Module => ComponentType::Module,
            ComponentKind::Directory => ComponentType::Directory,
            ComponentKind::File(_) => ComponentType::File,
            ComponentKind::View => ComponentType::View,
            ComponentKind::Subview => ComponentType::Subview,
            ComponentKind::ProjectView => ComponentType::ProjectView,
        }
    }
}

/// Component entity - one node of the analyzed project hierarchy
///
/// Instances are only produced by [`ComponentBuilder::build`](super::ComponentBuilder::build)
/// and expose nothing mutable. Identity is the uuid: equality and hashing
/// ignore every other field.
#[derive(Debug, Clone)]
pub struct Component {
    pub(super) uuid: String,
    pub(super) key: String,
    pub(super) name: String,
    pub(super) description: Option<String>,
    pub(super) kind: ComponentKind,
    pub(super) report_attributes: ReportAttributes,
    pub(super) children: Vec<Component>,
}

impl Component {
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    pub fn component_type(&self) -> ComponentType {
        self.kind.component_type()
    }

    pub fn report_attributes(&self) -> &ReportAttributes {
        &self.report_attributes
    }

    /// Children in the order they were added to the builder
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// File attributes of a FILE component
    ///
    /// # Errors
    /// Returns `TreeError::FileAttributesUnavailable` for every other type.
    pub fn file_attributes(&self) -> Result<&FileAttributes> {
        match &self.kind {
            ComponentKind::File(attributes) => Ok(attributes),
            other => Err(TreeError::FileAttributesUnavailable {
                component_type: other.component_type(),
            }
            .into()),
        }
    }

    /// Number of components in this subtree, including `self`
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Component::subtree_size)
            .sum::<usize>()
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for Component {}

impl Hash for Component {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}
