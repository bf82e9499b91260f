//! Selective emission of the original lines

use super::reach::KeepCounts;
use crate::graph::{ClassifiedLine, LineKind, NodeId};
use serde::Serialize;
use std::collections::HashSet;
use std::io::{self, Write};

/// Counters describing what an emission pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmitStats {
    pub lines_read: usize,
    pub lines_written: usize,
    pub edges_emitted: usize,
    /// Edges with at least one endpoint outside the kept set
    pub edges_dropped: usize,
    pub duplicates_suppressed: usize,
    pub labels_dropped: usize,
}

/// Decides, line by line and in order, what reaches the output
///
/// Edges need both endpoints kept, labels need their node kept, every other
/// line passes through. With duplicate suppression, an edge whose
/// `left::right` marker was already written is skipped; ports do not count.
#[derive(Debug)]
pub struct Emitter<'a> {
    keep: &'a KeepCounts,
    no_dups: bool,
    emitted: HashSet<String>,
    stats: EmitStats,
}

impl<'a> Emitter<'a> {
    /// Create an emitter over a computed keep set
    pub fn new(keep: &'a KeepCounts, no_dups: bool) -> Self {
        Self {
            keep,
            no_dups,
            emitted: HashSet::new(),
            stats: EmitStats::default(),
        }
    }

    /// Whether this line belongs in the output; updates the counters
    pub fn accept(&mut self, line: &ClassifiedLine<'_>) -> bool {
        self.stats.lines_read += 1;

        let accepted = match &line.kind {
            LineKind::Edge { left, right } => self.accept_edge(left, right),
            LineKind::Label { node, .. } => {
                let kept = self.keep.is_kept(node);
                if !kept {
                    self.stats.labels_dropped += 1;
                }
                kept
            }
            LineKind::Other => true,
        };

        if accepted {
            self.stats.lines_written += 1;
        }
        accepted
    }

    fn accept_edge(&mut self, left: &NodeId, right: &NodeId) -> bool {
        if !self.keep.is_kept(left) || !self.keep.is_kept(right) {
            self.stats.edges_dropped += 1;
            return false;
        }

        if self.no_dups && !self.emitted.insert(edge_marker(left, right)) {
            self.stats.duplicates_suppressed += 1;
            return false;
        }

        self.stats.edges_emitted += 1;
        true
    }

    /// Write every accepted line's bytes verbatim, each followed by `\n`
    pub fn write_all<W: Write>(mut self, lines: &[ClassifiedLine<'_>], out: &mut W) -> io::Result<EmitStats> {
        for line in lines {
            if self.accept(line) {
                out.write_all(line.text)?;
                out.write_all(b"\n")?;
            }
        }
        Ok(self.stats)
    }

    /// Counters for the lines accepted or rejected so far
    pub fn stats(&self) -> EmitStats {
        self.stats
    }
}

fn edge_marker(left: &NodeId, right: &NodeId) -> String {
    format!("{}::{}", left, right)
}
