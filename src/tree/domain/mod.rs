pub mod component;
pub mod component_builder;
pub mod component_type;
pub mod file_attributes;
pub mod report_attributes;

pub use component::{Component, ComponentKind};
pub use component_builder::{ComponentBuilder, ContainerBuilder, FileBuilder};
pub use component_type::{ComponentType, ContainerType};
pub use file_attributes::FileAttributes;
pub use report_attributes::{ReportAttributes, ReportAttributesBuilder};
