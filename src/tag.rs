//! Tags name nodes for later re-entry with `find`.
//!
//! Every node is registered under its own identity. Callers may additionally
//! stage an explicit key with `tag(..)` before the next `next(..)`.

use crate::node::{NodeId, NodeRef};
use std::fmt;

/// A key in a graph's tag registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
  /// The implicit tag every node carries.
  Node(NodeId),
  /// An explicit caller-supplied key.
  Key(String),
}

impl fmt::Display for Tag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Tag::Node(id) => write!(f, "{id}"),
      Tag::Key(key) => write!(f, "{key}"),
    }
  }
}

impl From<&str> for Tag {
  fn from(key: &str) -> Self {
    Tag::Key(key.to_string())
  }
}

impl From<String> for Tag {
  fn from(key: String) -> Self {
    Tag::Key(key)
  }
}

impl From<NodeId> for Tag {
  fn from(id: NodeId) -> Self {
    Tag::Node(id)
  }
}

impl<I, O> From<NodeRef<I, O>> for Tag {
  fn from(node: NodeRef<I, O>) -> Self {
    Tag::Node(node.id())
  }
}
