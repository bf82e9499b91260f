//! Dotcut: reachable-subgraph extraction for line-oriented graph descriptions
//!
//! Reads a description made of edge lines (`a -> b`, optionally with
//! `:port` suffixes and trailing attributes), node label lines
//! (`a [label="..."]`) and everything else, then writes back only the lines
//! that concern the selected nodes. Line order and text are preserved.
//!
//! # Selection
//!
//! - With inclusion roots, each root keeps its descendants (descent stops at
//!   excluded nodes, which are themselves kept) and its ancestors up to
//!   [`ANCESTOR_DEPTH`] levels.
//! - Without roots, every edge endpoint is kept and exclusions are removed.
//!
//! # Example
//!
//! ```
//! use dotcut::{Extractor, NodeId, Selection};
//!
//! let root = NodeId::parse("b").unwrap();
//! let mut out = Vec::new();
//! Extractor::new(Selection::new().include(root))
//!     .filter("a -> b\nb -> c\nz -> y\n", &mut out)
//!     .unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "a -> b\nb -> c\n");
//! ```

pub mod config;
mod engine;
pub mod graph;
pub mod query;

pub use config::{Profile, SelectionConfig};
pub use engine::{DotcutError, DotcutResult, Extractor, FilterOutcome, KeptNode, RunSummary};
pub use graph::{ClassifiedLine, GraphIndex, LineKind, NodeId};
pub use query::{EmitStats, KeepCounts, Selection, SelectionMode, ANCESTOR_DEPTH};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
