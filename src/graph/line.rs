//! Line classification for the graph description format
//!
//! Every input line is one of three things: an edge (`left -> right`, with
//! optional `:port` suffixes and trailing attributes or comments), a node
//! label declaration (`id [label=...]`), or anything else. Anything else is
//! structural syntax or commentary and always passes through untouched.

use super::node::NodeId;

/// Token separating the two endpoints of an edge
pub const CONNECTOR: &str = "->";

/// Marker identifying a node label declaration
pub const LABEL_MARKER: &str = " [label=";

const NAME_OPEN: &str = "<name> ";
const NAME_CLOSE: &str = "\"];";
const ATTRIBUTE_STARTS: [char; 4] = ['[', ';', '/', '*'];

/// What a single line of the description encodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A directed edge between two nodes (ports stripped)
    Edge { left: NodeId, right: NodeId },
    /// A label declaration for one node, with its display name if present
    Label { node: NodeId, name: Option<String> },
    /// Comments, graph attributes, braces, malformed edges
    Other,
}

/// An original line paired with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// The line exactly as read, without its `\n` terminator
    pub text: &'a [u8],
    pub kind: LineKind,
}

/// Split a document into lines and classify each one, in input order
///
/// The input need not be UTF-8: each line is classified through a lossy
/// UTF-8 view while `text` keeps the raw bytes. A final `\n` does not start
/// another line.
pub fn classify_document<C: AsRef<[u8]> + ?Sized>(content: &C) -> Vec<ClassifiedLine<'_>> {
    let content = content.as_ref();
    if content.is_empty() {
        return Vec::new();
    }

    let body = content.strip_suffix(b"\n").unwrap_or(content);
    body.split(|&b| b == b'\n')
        .map(|text| ClassifiedLine {
            text,
            kind: classify(&String::from_utf8_lossy(text)),
        })
        .collect()
}

/// Classify one raw line
pub fn classify(line: &str) -> LineKind {
    let normalized = normalize(line);

    if let Some((left, right)) = classify_edge(&normalized) {
        return LineKind::Edge { left, right };
    }

    if normalized.contains(LABEL_MARKER) {
        if let Some(node) = NodeId::parse(trim_spaces(before(&normalized, " ["))) {
            return LineKind::Label {
                node,
                name: display_name(&normalized),
            };
        }
    }

    LineKind::Other
}

/// Tabs become single spaces; surrounding spaces (and a CRLF `\r`) are trimmed
pub fn normalize(line: &str) -> String {
    line.replace('\t', " ")
        .trim_matches(|c: char| c == ' ' || c == '\r')
        .to_string()
}

/// Extract both endpoints if the normalized line is an edge
///
/// Returns `None` for lines that split into anything other than exactly two
/// parts around the connector. A missing endpoint becomes the empty id.
pub fn classify_edge(normalized: &str) -> Option<(NodeId, NodeId)> {
    let body = normalized.trim_matches(|c: char| matches!(c, ' ' | '\t' | ';'));

    let mut parts = body.split(CONNECTOR);
    let (Some(left), Some(right), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    let left = trim_spaces(before(left, ":"));
    let right = trim_spaces(strip_attributes(before(right, ":")));

    Some((NodeId::endpoint(left), NodeId::endpoint(right)))
}

/// Cut trailing attribute/comment syntax from the right-hand endpoint
///
/// The leftmost of `[`, `;`, `/`, `*` wins; a match at position 0 is ignored.
fn strip_attributes(text: &str) -> &str {
    let cut = ATTRIBUTE_STARTS
        .iter()
        .filter_map(|c| text.find(*c))
        .filter(|&pos| pos > 0)
        .min();

    match cut {
        Some(pos) => &text[..pos],
        None => text,
    }
}

/// Display name embedded in a label line, cut at the first `|`
fn display_name(normalized: &str) -> Option<String> {
    let (_, rest) = normalized.split_once(NAME_OPEN)?;
    let (name, _) = rest.split_once(NAME_CLOSE)?;
    let name = trim_spaces(before(name, "|"));
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn before<'a>(text: &'a str, separator: &str) -> &'a str {
    text.split_once(separator).map_or(text, |(head, _)| head)
}

fn trim_spaces(text: &str) -> &str {
    text.trim_matches(|c: char| c == ' ' || c == '\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(left: &str, right: &str) -> LineKind {
        LineKind::Edge {
            left: NodeId::endpoint(left),
            right: NodeId::endpoint(right),
        }
    }

    #[test]
    fn test_plain_edge() {
        assert_eq!(classify("a -> b"), edge("a", "b"));
        assert_eq!(classify("a->b;"), edge("a", "b"));
    }

    #[test]
    fn test_edge_with_tabs_and_semicolon() {
        assert_eq!(classify("\t\tn1\t->\tn2 ;  "), edge("n1", "n2"));
    }

    #[test]
    fn test_edge_ports_are_stripped() {
        assert_eq!(classify("  n1:out -> n2:in;"), edge("n1", "n2"));
        assert_eq!(classify("n1:p1:s -> n2"), edge("n1", "n2"));
    }

    #[test]
    fn test_edge_trailing_attributes_and_comments() {
        assert_eq!(classify("a -> b [color=red];"), edge("a", "b"));
        assert_eq!(classify("a -> b // calls"), edge("a", "b"));
        assert_eq!(classify("a -> b /* calls */"), edge("a", "b"));
        assert_eq!(classify("a -> b* weird"), edge("a", "b"));
    }

    #[test]
    fn test_leftmost_attribute_start_wins() {
        assert_eq!(strip_attributes(" b ; [x]"), " b ");
        assert_eq!(strip_attributes(" b [x];"), " b ");
        assert_eq!(strip_attributes(" b /* [x] */"), " b ");
    }

    #[test]
    fn test_attribute_start_at_position_zero_is_ignored() {
        assert_eq!(strip_attributes("[b"), "[b");
        assert_eq!(strip_attributes("*b;c"), "*b");
    }

    #[test]
    fn test_chained_edge_is_not_an_edge() {
        assert_eq!(classify("a -> b -> c"), LineKind::Other);
    }

    #[test]
    fn test_edge_with_missing_endpoint_uses_empty_id() {
        assert_eq!(classify("-> b"), edge("", "b"));
        assert_eq!(classify("a -> ;"), edge("a", ""));
        assert_eq!(classify("->"), edge("", ""));
    }

    #[test]
    fn test_document_accepts_non_utf8_lines() {
        let doc = classify_document(&b"n1 [label=\"<name> Caf\xe9\"];\nn1 -> n2\n"[..]);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc[0].text, &b"n1 [label=\"<name> Caf\xe9\"];"[..]);
        assert!(matches!(&doc[0].kind, LineKind::Label { node, .. } if node.as_str() == "n1"));
        assert_eq!(doc[1].kind, edge("n1", "n2"));
    }

    #[test]
    fn test_document_line_splitting() {
        assert!(classify_document("").is_empty());
        assert_eq!(classify_document("\n").len(), 1);
        assert_eq!(classify_document("a -> b").len(), 1);
        assert_eq!(classify_document("a -> b\n\n").len(), 2);
    }

    #[test]
    fn test_crlf_is_ignored_for_classification() {
        assert_eq!(classify("a -> b\r"), edge("a", "b"));
    }

    #[test]
    fn test_structural_lines_are_other() {
        assert_eq!(classify("digraph G {"), LineKind::Other);
        assert_eq!(classify("  rankdir=LR;"), LineKind::Other);
        assert_eq!(classify("// a comment"), LineKind::Other);
        assert_eq!(classify("}"), LineKind::Other);
        assert_eq!(classify(""), LineKind::Other);
    }

    #[test]
    fn test_label_with_display_name() {
        let line = "\tn7 [label=\"<id> 7 | <name> Parser | extra\"];";
        assert_eq!(
            classify(line),
            LineKind::Label {
                node: NodeId::parse("n7").unwrap(),
                name: Some("Parser".to_string()),
            }
        );
    }

    #[test]
    fn test_label_without_display_name() {
        assert_eq!(
            classify("n7 [label=\"plain\"];"),
            LineKind::Label {
                node: NodeId::parse("n7").unwrap(),
                name: None,
            }
        );
    }

    #[test]
    fn test_label_name_without_separator() {
        assert_eq!(display_name("n1 [label=\"<name> Lexer\"];"), Some("Lexer".to_string()));
    }

    #[test]
    fn test_label_marker_needs_leading_space() {
        assert_eq!(classify("n7[label=\"x\"];"), LineKind::Other);
    }

    #[test]
    fn test_document_keeps_original_text() {
        let doc = classify_document("digraph {\n\ta -> b;\n}\n");
        assert_eq!(doc.len(), 3);
        assert_eq!(doc[1].text, &b"\ta -> b;"[..]);
        assert_eq!(doc[1].kind, edge("a", "b"));
        assert_eq!(doc[2].kind, LineKind::Other);
    }
}
