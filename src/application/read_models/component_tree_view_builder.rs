//! Builder for constructing ComponentTreeView from a built tree

use super::component_view::{ComponentTreeView, ComponentView};
use crate::tree::domain::{Component, ComponentKind, ComponentType};
use crate::tree::services::{DepthTraversalCrawler, Order, TreeSummary};

/// Builder for constructing ComponentTreeView from domain objects
///
/// The summary always covers the whole tree; the optional depth limit
/// only prunes the rendered hierarchy. The root is rendered whatever its
/// type, so a limit shallower than the root leaves a single-node view.
pub struct ComponentTreeViewBuilder;

impl ComponentTreeViewBuilder {
    /// Builds the read model of the tree rooted at `root`
    ///
    /// # Arguments
    /// * `root` - Root of a built component tree
    /// * `depth_limit` - Deepest component type to include below the root
    pub fn build(root: &Component, depth_limit: Option<ComponentType>) -> ComponentTreeView {
        let crawler = match depth_limit {
            Some(limit) => DepthTraversalCrawler::new(Order::PreOrder).with_depth_limit(limit),
            None => DepthTraversalCrawler::new(Order::PreOrder),
        };

        ComponentTreeView {
            analysis_date: root
                .report_attributes()
                .analysis_date()
                .map(|date| date.to_rfc3339()),
            root: Self::build_component(root, &crawler),
            summary: TreeSummary::of(root),
        }
    }

    fn build_component(component: &Component, crawler: &DepthTraversalCrawler) -> ComponentView {
        let report = component.report_attributes();
        let (language, lines, unit_test) = match component.kind() {
            ComponentKind::File(attributes) => (
                attributes.language_key().map(str::to_string),
                Some(attributes.lines()),
                Some(attributes.is_unit_test()),
            ),
            _ => (None, None, None),
        };

        ComponentView {
            uuid: component.uuid().to_string(),
            key: component.key().to_string(),
            name: component.name().to_string(),
            component_type: component.component_type(),
            description: component.description().map(str::to_string),
            report_ref: report.report_ref(),
            version: report.version().map(str::to_string),
            path: report.path().map(str::to_string),
            language,
            lines,
            unit_test,
            children: component
                .children()
                .iter()
                .filter(|child| crawler.admits(child.component_type()))
                .map(|child| Self::build_component(child, crawler))
                .collect(),
        }
    }
}
