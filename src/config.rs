//! Selection configuration: CLI selector tokens, YAML profiles, sidecar lists
//!
//! Inputs accumulate in a fixed order: selector tokens first, then an
//! optional profile, then `include.txt` / `exclude.txt` from a directory.

use crate::engine::{DotcutError, DotcutResult, Extractor};
use crate::graph::NodeId;
use crate::query::Selection;
use serde::Deserialize;
use std::path::Path;

/// Sidecar file whose lines are appended to the inclusion roots
pub const INCLUDE_SIDECAR: &str = "include.txt";

/// Sidecar file whose lines are appended to the exclusions
pub const EXCLUDE_SIDECAR: &str = "exclude.txt";

const NO_DUPS_TOKEN: &str = "nodups";

/// Everything that decides what a run keeps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Inclusion roots, in the order they were given
    pub include: Vec<NodeId>,
    pub exclude: Vec<NodeId>,
    /// Suppress duplicate edges in the output
    pub no_dups: bool,
}

impl SelectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from selector tokens
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::new();
        for token in tokens {
            config.push_token(token.as_ref());
        }
        config
    }

    /// Apply one selector token
    ///
    /// `+id` includes, `-id` excludes, `nodups` (any case) enables duplicate
    /// suppression, and any other token includes.
    pub fn push_token(&mut self, token: &str) {
        if let Some(rest) = token.strip_prefix('+') {
            push_id(&mut self.include, rest, token);
        } else if let Some(rest) = token.strip_prefix('-') {
            push_id(&mut self.exclude, rest, token);
        } else if token.eq_ignore_ascii_case(NO_DUPS_TOKEN) {
            self.no_dups = true;
        } else {
            push_id(&mut self.include, token, token);
        }
    }

    /// Append the lists and flags of a profile
    pub fn merge_profile(&mut self, profile: Profile) {
        for id in &profile.include {
            push_id(&mut self.include, id, id);
        }
        for id in &profile.exclude {
            push_id(&mut self.exclude, id, id);
        }
        self.no_dups |= profile.nodups;
    }

    /// Append `include.txt` and `exclude.txt` from `dir`, if present
    pub fn load_sidecars(&mut self, dir: &Path) {
        for id in read_sidecar(&dir.join(INCLUDE_SIDECAR)) {
            push_id(&mut self.include, &id, &id);
        }
        for id in read_sidecar(&dir.join(EXCLUDE_SIDECAR)) {
            push_id(&mut self.exclude, &id, &id);
        }
    }

    /// The traversal inputs described by this configuration
    pub fn selection(&self) -> Selection {
        Selection {
            include: self.include.clone(),
            exclude: self.exclude.iter().cloned().collect(),
        }
    }

    /// An extractor configured with this selection and duplicate policy
    pub fn extractor(&self) -> Extractor {
        Extractor::new(self.selection()).no_dups(self.no_dups)
    }
}

fn push_id(list: &mut Vec<NodeId>, raw: &str, token: &str) {
    match NodeId::parse(raw) {
        Some(id) => list.push(id),
        None => tracing::warn!(token, "ignoring selector with an empty node id"),
    }
}

/// A saved selection, read from YAML
///
/// ```yaml
/// include: [n12, n40]
/// exclude: [n7]
/// nodups: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub nodups: bool,
}

impl Profile {
    /// Parse a profile from YAML text; an empty document is an empty profile
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Read and parse a profile file
    pub fn load(path: &Path) -> DotcutResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|source| DotcutError::ReadProfile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml).map_err(|source| DotcutError::ParseProfile {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Read a sidecar list; a file that cannot be read is an empty list
pub fn read_sidecar(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let ids = parse_list(&content);
            tracing::debug!(path = %path.display(), count = ids.len(), "sidecar loaded");
            ids
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable sidecar");
            Vec::new()
        }
    }
}

/// First whitespace-delimited token of every non-empty line
fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
