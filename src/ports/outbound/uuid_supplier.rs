/// UuidSupplier port for components whose report entry carries no uuid
pub trait UuidSupplier {
    /// Returns a uuid for the component identified by `key`
    fn uuid_for(&self, key: &str) -> String;
}
