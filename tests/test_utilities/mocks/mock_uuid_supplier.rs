use component_tree::prelude::*;

/// Mock UuidSupplier deriving a predictable uuid from the component key
pub struct MockUuidSupplier;

impl MockUuidSupplier {
    pub fn new() -> Self {
        Self
    }
}

impl UuidSupplier for MockUuidSupplier {
    fn uuid_for(&self, key: &str) -> String {
        format!("mock-uuid-{}", key)
    }
}
