use crate::tree::domain::{Component, ComponentKind, ComponentType, FileAttributes};

/// Visitor receiving each component through a method specific to its type
///
/// Every method defaults to doing nothing, so implementors only override
/// the types they care about. `visit_any` runs before the type-specific method.
pub trait TypeAwareVisitor {
    fn visit_any(&mut self, _component: &Component) {}

    fn visit_project(&mut self, _project: &Component) {}

    fn visit_module(&mut self, _module: &Component) {}

    fn visit_directory(&mut self, _directory: &Component) {}

    fn visit_file(&mut self, _file: &Component, _attributes: &FileAttributes) {}

    fn visit_view(&mut self, _view: &Component) {}

    fn visit_subview(&mut self, _subview: &Component) {}

    fn visit_project_view(&mut self, _project_view: &Component) {}
}

/// Whether a parent is visited before or after its children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    PreOrder,
    PostOrder,
}

/// Depth-first walk over a built tree, dispatching to a [`TypeAwareVisitor`]
///
/// With a depth limit, components whose type sits deeper than the limit in
/// the same family (report or views) are skipped along with their subtree.
#[derive(Debug, Clone, Copy)]
pub struct DepthTraversalCrawler {
    order: Order,
    depth_limit: Option<ComponentType>,
}

impl DepthTraversalCrawler {
    pub fn new(order: Order) -> Self {
        Self {
            order,
            depth_limit: None,
        }
    }

    pub fn with_depth_limit(mut self, depth_limit: ComponentType) -> Self {
        self.depth_limit = Some(depth_limit);
        self
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn visit<V: TypeAwareVisitor + ?Sized>(&self, root: &Component, visitor: &mut V) {
        if !self.admits(root.component_type()) {
            return;
        }

        if self.order == Order::PreOrder {
            dispatch(root, visitor);
        }

        for child in root.children() {
            self.visit(child, visitor);
        }

        if self.order == Order::PostOrder {
            dispatch(root, visitor);
        }
    }

    /// Whether components of this type are within the depth limit
    pub fn admits(&self, component_type: ComponentType) -> bool {
        match self.depth_limit {
            Some(limit) => {
                limit.is_report_type() != component_type.is_report_type()
                    || component_type.depth() <= limit.depth()
            }
            None => true,
        }
    }
}

fn dispatch<V: TypeAwareVisitor + ?Sized>(component: &Component, visitor: &mut V) {
    visitor.visit_any(component);
    match component.kind() {
        ComponentKind::Project => visitor.visit_project(component),
        ComponentKind::Module => visitor.visit_module(component),
        ComponentKind::Directory => visitor.visit_directory(component),
        ComponentKind::File(attributes) => visitor.visit_file(component, attributes),
        ComponentKind::View => visitor.visit_view(component),
        ComponentKind::Subview => visitor.visit_subview(component),
        ComponentKind::ProjectView => visitor.visit_project_view(component),
    }
}
