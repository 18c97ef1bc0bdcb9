use crate::tree::domain::Component;

/// BuildTreeResponse - the assembled tree handed to downstream steps
#[derive(Debug, Clone)]
pub struct BuildTreeResponse {
    /// Root of the assembled tree
    pub root: Component,
    /// Number of uuids generated for components the report left without one
    pub generated_uuids: usize,
}

impl BuildTreeResponse {
    pub fn new(root: Component, generated_uuids: usize) -> Self {
        Self {
            root,
            generated_uuids,
        }
    }
}
