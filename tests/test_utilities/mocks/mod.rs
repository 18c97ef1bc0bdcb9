/// Mock implementations for testing
mod mock_report_reader;
mod mock_uuid_supplier;

pub use mock_report_reader::MockReportReader;
pub use mock_uuid_supplier::MockUuidSupplier;
