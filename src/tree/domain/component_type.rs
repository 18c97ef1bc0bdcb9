use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a component in the analyzed hierarchy
///
/// The first four types come from a scanner report, the last three
/// from portfolio (views) computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Project,
    Module,
    Directory,
    File,
    View,
    Subview,
    ProjectView,
}

impl ComponentType {
    /// Every type, from the tree root downwards within each family
    pub const ALL: [ComponentType; 7] = [
        ComponentType::Project,
        ComponentType::Module,
        ComponentType::Directory,
        ComponentType::File,
        ComponentType::View,
        ComponentType::Subview,
        ComponentType::ProjectView,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Project => "PROJECT",
            ComponentType::Module => "MODULE",
            ComponentType::Directory => "DIRECTORY",
            ComponentType::File => "FILE",
            ComponentType::View => "VIEW",
            ComponentType::Subview => "SUBVIEW",
            ComponentType::ProjectView => "PROJECT_VIEW",
        }
    }

    /// Types produced from a scanner report
    pub fn is_report_type(&self) -> bool {
        matches!(
            self,
            ComponentType::Project
                | ComponentType::Module
                | ComponentType::Directory
                | ComponentType::File
        )
    }

    /// Types produced by views computation
    pub fn is_views_type(&self) -> bool {
        !self.is_report_type()
    }

    /// Position of the type within its family, 0 being the root
    pub(crate) fn depth(&self) -> u8 {
        match self {
            ComponentType::Project | ComponentType::View => 0,
            ComponentType::Module | ComponentType::Subview => 1,
            ComponentType::Directory | ComponentType::ProjectView => 2,
            ComponentType::File => 3,
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid component type: {}. Expected one of PROJECT, MODULE, DIRECTORY, FILE, VIEW, SUBVIEW, PROJECT_VIEW",
                    s
                )
            })
    }
}

/// Every component type except FILE
///
/// Builders for these types have no way to receive file attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerType {
    Project,
    Module,
    Directory,
    View,
    Subview,
    ProjectView,
}

impl From<ContainerType> for ComponentType {
    fn from(container: ContainerType) -> Self {
        match container {
            ContainerType::Project => ComponentType::Project,
            ContainerType::Module => ComponentType::Module,
            ContainerType::Directory => ComponentType::Directory,
            ContainerType::View => ComponentType::View,
            ContainerType::Subview => ComponentType::Subview,
            ContainerType::ProjectView => ComponentType::ProjectView,
        }
    }
}

impl TryFrom<ComponentType> for ContainerType {
    type Error = anyhow::Error;

    fn try_from(component_type: ComponentType) -> Result<Self, Self::Error> {
        match component_type {
            ComponentType::Project => Ok(ContainerType::Project),
            ComponentType::Module => Ok(ContainerType::Module),
            ComponentType::Directory => Ok(ContainerType::Directory),
            ComponentType::View => Ok(ContainerType::View),
            ComponentType::Subview => Ok(ContainerType::Subview),
            ComponentType::ProjectView => Ok(ContainerType::ProjectView),
            ComponentType::File => {
                anyhow::bail!("FILE components are built with a file builder carrying FileAttributes")
            }
        }
    }
}
