pub mod crawler;
pub mod tree_index;
pub mod tree_summary;

pub use crawler::{DepthTraversalCrawler, Order, TypeAwareVisitor};
pub use tree_index::TreeIndex;
pub use tree_summary::TreeSummary;
