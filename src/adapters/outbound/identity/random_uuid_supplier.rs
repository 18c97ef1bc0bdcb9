use crate::ports::outbound::UuidSupplier;
use uuid::Uuid;

/// RandomUuidSupplier adapter handing out random (v4) uuids
///
/// The key is ignored: two runs over the same report produce different uuids.
pub struct RandomUuidSupplier;

impl RandomUuidSupplier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomUuidSupplier {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidSupplier for RandomUuidSupplier {
    fn uuid_for(&self, _key: &str) -> String {
        Uuid::new_v4().to_string()
    }
}
