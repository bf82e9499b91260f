//! Shared fixtures for dotcut integration tests

#![allow(dead_code)]

use dotcut::{Extractor, KeepCounts, NodeId, Selection};
use std::path::{Path, PathBuf};

/// A small dependency graph with labels, a duplicate edge and a
/// disconnected component:
///
/// ```text
/// top -> a -> b -> c -> d
///        x -> b
///        z -> y
/// ```
pub const DEPS: &str = r#"digraph deps {
  rankdir=LR;
  node [shape=record];
  a [label="<id> a | <name> Alpha"];
  b [label="<id> b | <name> Beta"];
  c [label="<id> c | <name> Gamma"];
  z [label="<id> z | <name> Zeta"];
  top -> a;
  a -> b;
  b:out -> c:in [color=red];
  c -> d; // tail
  x -> b;
  z -> y;
  b -> c;
}
"#;

pub fn id(s: &str) -> NodeId {
    NodeId::parse(s).expect("non-empty id")
}

pub fn selection(include: &[&str], exclude: &[&str]) -> Selection {
    let selection = include.iter().fold(Selection::new(), |s, n| s.include(id(n)));
    exclude.iter().fold(selection, |s, n| s.exclude(id(n)))
}

/// Filter a document in memory and return the output text
pub fn filter(content: &str, include: &[&str], exclude: &[&str], no_dups: bool) -> String {
    let mut out = Vec::new();
    Extractor::new(selection(include, exclude))
        .no_dups(no_dups)
        .filter(content, &mut out)
        .expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("output is utf-8")
}

/// Node ids with a positive keep-count, sorted
pub fn kept_ids(store: &KeepCounts) -> Vec<String> {
    store.sorted().into_iter().map(|(n, _)| n.to_string()).collect()
}

/// Write `content` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}
