/// Uuid adapters for components the report leaves without identity
mod random_uuid_supplier;

pub use random_uuid_supplier::RandomUuidSupplier;
