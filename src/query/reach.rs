//! Reachability: which nodes survive the cut
//!
//! Each inclusion root contributes its descendants (descent stops at, but
//! keeps, excluded nodes) and its ancestors up to [`ANCESTOR_DEPTH`] levels.
//! All roots share one [`KeepCounts`] store, and a node already present in the
//! store is never expanded again. That makes the result depend on root order
//! in the same way the ancestor walk depends on visiting order.

use crate::graph::{GraphIndex, NodeId};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// How many reverse-edge hops are followed above each inclusion root
pub const ANCESTOR_DEPTH: usize = 2;

/// Per-node count of why a node is retained
///
/// Presence as a key means "visited"; a positive count means "keep".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepCounts(HashMap<NodeId, u32>);

impl KeepCounts {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self, node: &NodeId) {
        *self.0.entry(node.clone()).or_insert(0) += 1;
    }

    /// Whether the node has been reached by any traversal
    pub fn contains(&self, node: &NodeId) -> bool {
        self.0.contains_key(node)
    }

    /// Keep-count of a node, 0 when never reached
    pub fn count(&self, node: &NodeId) -> u32 {
        self.0.get(node).copied().unwrap_or(0)
    }

    /// Whether lines mentioning this node should be emitted
    pub fn is_kept(&self, node: &NodeId) -> bool {
        self.count(node) > 0
    }

    fn remove(&mut self, node: &NodeId) {
        self.0.remove(node);
    }

    /// Number of nodes reached, kept or not
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no node has been reached yet
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Kept nodes with their counts, ordered by identifier
    pub fn sorted(&self) -> Vec<(&NodeId, u32)> {
        let mut entries: Vec<_> = self
            .0
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(node, &count)| (node, count))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Which selection policy a run used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Traversal from explicit inclusion roots
    Roots,
    /// No roots given: every edge endpoint minus the exclusions
    WholeGraph,
}

/// Inclusion roots and exclusions for one run
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Inclusion roots, processed in this order
    pub include: Vec<NodeId>,
    /// Descent stop-points (with roots) or hard removals (without roots)
    pub exclude: HashSet<NodeId>,
}

impl Selection {
    /// Create an empty selection (keeps the whole graph)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an inclusion root
    pub fn include(mut self, node: NodeId) -> Self {
        self.include.push(node);
        self
    }

    /// Add an exclusion
    pub fn exclude(mut self, node: NodeId) -> Self {
        self.exclude.insert(node);
        self
    }

    /// The policy [`Selection::execute`] will apply
    pub fn mode(&self) -> SelectionMode {
        if self.include.is_empty() {
            SelectionMode::WholeGraph
        } else {
            SelectionMode::Roots
        }
    }

    /// Compute the keep-counts for this selection over an indexed graph
    pub fn execute(&self, index: &GraphIndex) -> KeepCounts {
        let mut store = KeepCounts::new();

        match self.mode() {
            SelectionMode::Roots => {
                // The empty id only exists as an edge endpoint, never as a root.
                for root in self.include.iter().filter(|root| !root.is_empty()) {
                    include_descendants(root, &self.exclude, index, &mut store);
                    include_ancestors(root, index, ANCESTOR_DEPTH, &mut store);
                    tracing::debug!(root = %root, reached = store.len(), "root expanded");
                }
            }
            SelectionMode::WholeGraph => {
                for node in index.edge_endpoints() {
                    store.bump(node);
                }
                for node in &self.exclude {
                    store.remove(node);
                }
                tracing::debug!(kept = store.len(), "whole graph selected");
            }
        }

        store
    }
}

/// Keep `root` and everything reachable from it along forward edges
///
/// An excluded node is kept but not expanded. Nodes already present in the
/// store are neither counted again nor expanded; this also breaks cycles.
pub fn include_descendants<'a>(
    root: &'a NodeId,
    exclude: &HashSet<NodeId>,
    index: &'a GraphIndex,
    store: &mut KeepCounts,
) {
    store.bump(root);
    if exclude.contains(root) {
        return;
    }

    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        tracing::trace!(node = %node, "expanding descendants");
        for child in index.successors(node) {
            if store.contains(child) {
                continue;
            }
            store.bump(child);
            if !exclude.contains(child) {
                pending.push(child);
            }
        }
    }
}

/// Keep `node` and its predecessors up to `depth` reverse hops away
///
/// Exclusions do not apply here. A predecessor already present in the store
/// is not revisited, so a node first reached at the depth limit stays
/// unexpanded even if a shorter path to it exists.
pub fn include_ancestors(node: &NodeId, index: &GraphIndex, depth: usize, store: &mut KeepCounts) {
    store.bump(node);
    if depth == 0 {
        return;
    }

    for parent in index.predecessors(node) {
        if !store.contains(parent) {
            include_ancestors(parent, index, depth - 1, store);
        }
    }
}
