//! Adjacency index built from classified lines

use super::line::{ClassifiedLine, LineKind};
use super::node::NodeId;
use std::collections::{HashMap, HashSet};

/// Forward and reverse adjacency of the edges in a document
///
/// Built once, in file order, and read-only afterwards. Duplicate edges
/// produce duplicate adjacency entries.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    forward: HashMap<NodeId, Vec<NodeId>>,
    reverse: HashMap<NodeId, Vec<NodeId>>,
    names: HashMap<NodeId, String>,
    edge_count: usize,
}

impl GraphIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every edge and label line of a classified document
    pub fn build(lines: &[ClassifiedLine<'_>]) -> Self {
        let mut index = Self::new();
        for line in lines {
            match &line.kind {
                LineKind::Edge { left, right } => index.add_edge(left.clone(), right.clone()),
                LineKind::Label {
                    node,
                    name: Some(name),
                } => index.set_name(node.clone(), name.clone()),
                _ => {}
            }
        }
        tracing::debug!(
            edges = index.edge_count,
            nodes = index.node_count(),
            named = index.names.len(),
            "graph index built"
        );
        index
    }

    /// Record a directed edge `left -> right`
    pub fn add_edge(&mut self, left: NodeId, right: NodeId) {
        self.reverse.entry(right.clone()).or_default().push(left.clone());
        self.forward.entry(left).or_default().push(right);
        self.edge_count += 1;
    }

    /// Record the display name of a node; a later label replaces an earlier one
    pub fn set_name(&mut self, node: NodeId, name: String) {
        self.names.insert(node, name);
    }

    /// Direct successors of a node, in input order
    pub fn successors(&self, node: &NodeId) -> &[NodeId] {
        self.forward.get(node).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Direct predecessors of a node, in input order
    pub fn predecessors(&self, node: &NodeId) -> &[NodeId] {
        self.reverse.get(node).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Display name of a node, if a label line carried one
    pub fn name(&self, node: &NodeId) -> Option<&str> {
        self.names.get(node).map(|s| s.as_str())
    }

    /// Every node that is a key of the forward map, then of the reverse map
    ///
    /// A node with both incoming and outgoing edges is yielded twice.
    pub fn edge_endpoints(&self) -> impl Iterator<Item = &NodeId> {
        self.forward.keys().chain(self.reverse.keys())
    }

    /// Number of distinct nodes appearing in any edge
    pub fn node_count(&self) -> usize {
        self.edge_endpoints().collect::<HashSet<_>>().len()
    }

    /// Number of edge lines indexed, duplicates included
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
