//! Index tests over small graph descriptions

use super::{classify_document, GraphIndex, NodeId};

fn id(s: &str) -> NodeId {
    NodeId::parse(s).unwrap()
}

fn ids(nodes: &[NodeId]) -> Vec<&str> {
    nodes.iter().map(|n| n.as_str()).collect()
}

const SAMPLE: &str = r#"digraph deps {
    node [shape=record];
    n1 [label="<id> 1 | <name> Lexer | src/lexer.rs"];
    n2 [label="<id> 2 | <name> Parser"];
    n1 -> n2;
    n2:out -> n3:in [color=blue];
    n1 -> n3 // direct
    n1 -> n2;
}
"#;

#[test]
fn successors_follow_file_order_with_duplicates() {
    let index = GraphIndex::build(&classify_document(SAMPLE));
    assert_eq!(ids(index.successors(&id("n1"))), vec!["n2", "n3", "n2"]);
    assert_eq!(ids(index.successors(&id("n2"))), vec!["n3"]);
    assert!(index.successors(&id("n3")).is_empty());
}

#[test]
fn predecessors_mirror_successors() {
    let index = GraphIndex::build(&classify_document(SAMPLE));
    assert_eq!(ids(index.predecessors(&id("n2"))), vec!["n1", "n1"]);
    assert_eq!(ids(index.predecessors(&id("n3"))), vec!["n2", "n1"]);
    assert!(index.predecessors(&id("n1")).is_empty());
}

#[test]
fn counts_nodes_and_edges() {
    let index = GraphIndex::build(&classify_document(SAMPLE));
    assert_eq!(index.edge_count(), 4);
    assert_eq!(index.node_count(), 3);
}

#[test]
fn label_names_are_indexed() {
    let index = GraphIndex::build(&classify_document(SAMPLE));
    assert_eq!(index.name(&id("n1")), Some("Lexer"));
    assert_eq!(index.name(&id("n2")), Some("Parser"));
    assert_eq!(index.name(&id("n3")), None);
}

#[test]
fn label_only_nodes_are_not_edge_endpoints() {
    let index = GraphIndex::build(&classify_document("lonely [label=\"<name> L\"];\na -> b\n"));
    let endpoints: Vec<_> = index.edge_endpoints().map(|n| n.as_str()).collect();
    assert!(!endpoints.contains(&"lonely"));
    assert_eq!(index.name(&id("lonely")), Some("L"));
}

#[test]
fn node_with_both_directions_is_yielded_twice() {
    let index = GraphIndex::build(&classify_document("a -> b\nb -> c\n"));
    let b_count = index.edge_endpoints().filter(|n| n.as_str() == "b").count();
    assert_eq!(b_count, 2);
    assert_eq!(index.node_count(), 3);
}
