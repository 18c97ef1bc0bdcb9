use crate::shared::error::TreeError;
use crate::shared::Result;
use crate::tree::domain::Component;
use std::collections::HashMap;

/// Non-owning identity lookup over a built tree
///
/// The tree keeps sole ownership of its components; the index only borrows
/// them. Parent links are stored as uuids, never as a second owner.
#[derive(Debug)]
pub struct TreeIndex<'a> {
    root: &'a Component,
    by_uuid: HashMap<&'a str, &'a Component>,
    uuid_by_key: HashMap<&'a str, &'a str>,
    parent_by_uuid: HashMap<&'a str, &'a str>,
}

impl<'a> TreeIndex<'a> {
    /// Indexes every component reachable from `root`
    ///
    /// # Errors
    /// Returns `TreeError::DuplicateUuid` when two components of the tree share a uuid,
    /// and `TreeError::DuplicateKey` when two share a key.
    pub fn new(root: &'a Component) -> Result<Self> {
        let mut index = Self {
            root,
            by_uuid: HashMap::new(),
            uuid_by_key: HashMap::new(),
            parent_by_uuid: HashMap::new(),
        };

        let mut pending: Vec<(&'a Component, Option<&'a str>)> = vec![(root, None)];
        while let Some((component, parent)) = pending.pop() {
            if let Some(existing) = index.by_uuid.insert(component.uuid(), component) {
                return Err(TreeError::DuplicateUuid {
                    uuid: component.uuid().to_string(),
                    first_key: existing.key().to_string(),
                    second_key: component.key().to_string(),
                }
                .into());
            }
            if let Some(first_uuid) = index.uuid_by_key.insert(component.key(), component.uuid()) {
                return Err(TreeError::DuplicateKey {
                    key: component.key().to_string(),
                    first_uuid: first_uuid.to_string(),
                    second_uuid: component.uuid().to_string(),
                }
                .into());
            }
            if let Some(parent_uuid) = parent {
                index.parent_by_uuid.insert(component.uuid(), parent_uuid);
            }
            pending.extend(
                component
                    .children()
                    .iter()
                    .map(|child| (child, Some(component.uuid()))),
            );
        }

        tracing::debug!(components = index.by_uuid.len(), "indexed component tree");
        Ok(index)
    }

    pub fn root(&self) -> &'a Component {
        self.root
    }

    pub fn len(&self) -> usize {
        self.by_uuid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_uuid.is_empty()
    }

    pub fn get_by_uuid(&self, uuid: &str) -> Option<&'a Component> {
        self.by_uuid.get(uuid).copied()
    }

    pub fn get_by_key(&self, key: &str) -> Option<&'a Component> {
        self.uuid_by_key
            .get(key)
            .and_then(|uuid| self.get_by_uuid(uuid))
    }

    /// Parent of the component with the given uuid; `None` for the root or unknown uuids
    pub fn parent_of(&self, uuid: &str) -> Option<&'a Component> {
        self.parent_by_uuid
            .get(uuid)
            .and_then(|parent| self.get_by_uuid(parent))
    }

    /// Ancestors from the direct parent up to the root
    pub fn ancestors_of(&self, uuid: &str) -> Vec<&'a Component> {
        let mut ancestors = Vec::new();
        let mut current = self.parent_of(uuid);
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.parent_of(parent.uuid());
        }
        ancestors
    }
}
