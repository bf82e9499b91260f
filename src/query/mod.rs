//! Subgraph selection over an indexed graph description
//!
//! Computes which nodes are kept for a set of inclusion roots and
//! exclusions, then filters the original lines against that set.

mod emit;
mod reach;

pub use emit::{EmitStats, Emitter};
pub use reach::{
    include_ancestors, include_descendants, KeepCounts, Selection, SelectionMode, ANCESTOR_DEPTH,
};
