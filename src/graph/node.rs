//! Node identifiers as they appear in the graph description

use serde::{Deserialize, Serialize};

/// Identifier of a node, taken verbatim from an edge or label line
///
/// Case-sensitive. Ids built from selectors are never empty; an edge line
/// with a missing endpoint (`-> b`) yields the empty id, which then behaves
/// like any other node. Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Build an identifier from a token, rejecting the empty string
    pub fn parse(token: &str) -> Option<Self> {
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    /// Endpoint of an edge line, possibly empty
    pub(crate) fn endpoint(token: &str) -> Self {
        Self(token.to_string())
    }

    /// Whether this is the empty endpoint id
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
