//! Graph description parsing and indexing

mod index;
mod line;
mod node;

#[cfg(test)]
mod tests;

pub use index::GraphIndex;
pub use line::{classify, classify_document, classify_edge, normalize, ClassifiedLine, LineKind};
pub use node::NodeId;
