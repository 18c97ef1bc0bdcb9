/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the use case is called directly
/// by the CLI and by library users.
pub mod outbound;
