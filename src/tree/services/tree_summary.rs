use super::crawler::{DepthTraversalCrawler, Order, TypeAwareVisitor};
use crate::tree::domain::{Component, ComponentType, FileAttributes};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate counts over one component tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeSummary {
    /// Number of components per type, keyed by the upper-case type name
    pub components_by_type: BTreeMap<String, usize>,
    pub total_components: usize,
    pub total_lines: u64,
    pub unit_test_files: usize,
}

impl TreeSummary {
    /// Walks the whole tree once and tallies it
    pub fn of(root: &Component) -> Self {
        let mut summary = Self::default();
        DepthTraversalCrawler::new(Order::PreOrder).visit(root, &mut summary);
        summary
    }

    pub fn count_of(&self, component_type: ComponentType) -> usize {
        self.components_by_type
            .get(component_type.as_str())
            .copied()
            .unwrap_or(0)
    }
}

impl TypeAwareVisitor for TreeSummary {
    fn visit_any(&mut self, component: &Component) {
        self.total_components += 1;
        *self
            .components_by_type
            .entry(component.component_type().as_str().to_string())
            .or_insert(0) += 1;
    }

    fn visit_file(&mut self, _file: &Component, attributes: &FileAttributes) {
        self.total_lines += u64::from(attributes.lines());
        if attributes.is_unit_test() {
            self.unit_test_files += 1;
        }
    }
}
