//! Extractor: reads a description, selects a subgraph, writes the result

use crate::graph::{classify_document, GraphIndex, NodeId};
use crate::query::{EmitStats, Emitter, Selection, SelectionMode};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while extracting a subgraph
#[derive(Debug, Error)]
pub enum DotcutError {
    #[error("failed to open file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write report {}: {source}", .path.display())]
    WriteReport {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read profile {}: {source}", .path.display())]
    ReadProfile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid profile {}: {source}", .path.display())]
    ParseProfile {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for dotcut operations
pub type DotcutResult<T> = Result<T, DotcutError>;

/// A node that made it into the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeptNode {
    pub id: NodeId,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// What filtering a single document produced
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome {
    pub mode: SelectionMode,
    #[serde(flatten)]
    pub stats: EmitStats,
    /// Kept nodes ordered by identifier
    pub kept: Vec<KeptNode>,
}

/// Summary of a file-to-file run, serialized as the JSON report
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(flatten)]
    pub outcome: FilterOutcome,
}

impl RunSummary {
    /// Write this summary as pretty-printed JSON
    pub fn write_report(&self, path: &Path) -> DotcutResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json + "\n").map_err(|source| DotcutError::WriteReport {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Runs the classify → index → select → emit pipeline
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    selection: Selection,
    no_dups: bool,
}

impl Extractor {
    /// Create an extractor for a selection
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            no_dups: false,
        }
    }

    /// Suppress repeated `left -> right` edges after the first
    pub fn no_dups(mut self, no_dups: bool) -> Self {
        self.no_dups = no_dups;
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Filter a whole document held in memory
    ///
    /// Lines are copied byte for byte, so the document need not be UTF-8.
    pub fn filter<C, W>(&self, content: &C, out: &mut W) -> std::io::Result<FilterOutcome>
    where
        C: AsRef<[u8]> + ?Sized,
        W: Write,
    {
        let lines = classify_document(content);
        let index = GraphIndex::build(&lines);
        let keep = self.selection.execute(&index);

        let stats = Emitter::new(&keep, self.no_dups).write_all(&lines, out)?;

        let kept = keep
            .sorted()
            .into_iter()
            .map(|(id, count)| KeptNode {
                id: id.clone(),
                count,
                name: index.name(id).map(str::to_string),
            })
            .collect();

        Ok(FilterOutcome {
            mode: self.selection.mode(),
            stats,
            kept,
        })
    }

    /// Filter `input` into a newly created `output`
    ///
    /// The output file is created only after the input has been read, and is
    /// flushed once at the end.
    pub fn run(&self, input: &Path, output: &Path) -> DotcutResult<RunSummary> {
        let content = std::fs::read(input).map_err(|source| DotcutError::ReadInput {
            path: input.to_path_buf(),
            source,
        })?;

        let write_err = |source| DotcutError::WriteOutput {
            path: output.to_path_buf(),
            source,
        };

        let file = File::create(output).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        let outcome = self.filter(&content, &mut writer).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            mode = ?outcome.mode,
            kept = outcome.kept.len(),
            lines_read = outcome.stats.lines_read,
            lines_written = outcome.stats.lines_written,
            edges_emitted = outcome.stats.edges_emitted,
            edges_dropped = outcome.stats.edges_dropped,
            duplicates_suppressed = outcome.stats.duplicates_suppressed,
            "subgraph extracted"
        );

        Ok(RunSummary {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            outcome,
        })
    }
}
