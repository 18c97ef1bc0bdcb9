/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, uuid generation, output).
pub mod formatter;
pub mod output_presenter;
pub mod report_reader;
pub mod uuid_supplier;

pub use formatter::TreeFormatter;
pub use output_presenter::OutputPresenter;
pub use report_reader::{ReportComponent, ReportReader, ScannerReport};
pub use uuid_supplier::UuidSupplier;
