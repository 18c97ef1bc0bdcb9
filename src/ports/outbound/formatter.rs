use crate::application::read_models::ComponentTreeView;
use crate::shared::Result;

/// TreeFormatter port for rendering a component tree
///
/// This port abstracts the rendering logic for the different output
/// formats (indented text, JSON).
pub trait TreeFormatter {
    /// Renders the tree read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &ComponentTreeView) -> Result<String>;
}
