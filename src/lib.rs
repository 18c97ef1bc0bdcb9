//! component-tree - immutable project component tree for analysis runs
//!
//! This library builds the structural hierarchy of a scanned codebase
//! (project → module → directory → file) once per analysis run, validates it,
//! and exposes it read-only to the computation steps that traverse it. It
//! follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`tree`): the component entity, its builder and read-only services
//! - **Application Layer** (`application`): report-driven tree assembly and read models
//! - **Ports** (`ports`): interfaces for report reading, uuid supply and output
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error types and the result alias
//!
//! # Example
//!
//! ```
//! use component_tree::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let file = ComponentBuilder::file(FileAttributes::new(false, Some("lang".to_string()), 42))
//!     .uuid("F1")
//!     .key("src/Foo")
//!     .name("Foo.lang")
//!     .report_attributes(ReportAttributes::builder(2).build())
//!     .build()?;
//!
//! let directory = ComponentBuilder::new(ContainerType::Directory)
//!     .uuid("D1")
//!     .key("src")
//!     .name("src")
//!     .report_attributes(ReportAttributes::builder(1).build())
//!     .add_child(file)
//!     .build()?;
//!
//! assert_eq!(directory.children()[0].file_attributes()?.lines(), 42);
//! assert!(directory.file_attributes().is_err());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod tree;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonReportReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::identity::RandomUuidSupplier;
    pub use crate::application::dto::{BuildTreeRequest, BuildTreeResponse, OutputFormat};
    pub use crate::application::read_models::{
        ComponentTreeView, ComponentTreeViewBuilder, ComponentView,
    };
    pub use crate::application::use_cases::BuildComponentTreeUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ReportComponent, ReportReader, ScannerReport, TreeFormatter,
        UuidSupplier,
    };
    pub use crate::shared::error::TreeError;
    pub use crate::shared::Result;
    pub use crate::tree::domain::{
        Component, ComponentBuilder, ComponentKind, ComponentType, ContainerBuilder,
        ContainerType, FileAttributes, FileBuilder, ReportAttributes,
    };
    pub use crate::tree::services::{
        DepthTraversalCrawler, Order, TreeIndex, TreeSummary, TypeAwareVisitor,
    };
}
