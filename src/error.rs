//! # Error Handling
//!
//! Two error families flow through a pushweave graph:
//!
//! - **`NodeError`**: data-path failures. Either self-originated by a node that
//!   cannot produce a valid output (type mismatch, failed coercion, a fallible
//!   map returning an error) or injected at the boundary by an adapter
//!   (request failure, external failure). Node errors travel through the graph
//!   as error signals: the receiving node detaches from the failing upstream
//!   and multicasts the same error to all of its downstream nodes.
//! - **`GraphError`**: construction and API misuse. These never travel through
//!   the graph; they are returned to the caller of a builder or run operation.
//!
//! `NodeError` is `Clone` so a single error can be multicast to every
//! downstream node without re-wrapping.

use crate::adapters::RequestError;
use crate::node::NodeId;
use crate::tag::Tag;
use std::error::Error;
use std::sync::Arc;
use thiserror::Error;

/// A failure on the data path of a graph.
#[derive(Error, Debug, Clone)]
pub enum NodeError {
  /// A value of the wrong type reached a node.
  #[error("node `{node}` expected input of type `{expected}`")]
  TypeMismatch {
    /// Name of the receiving node.
    node: &'static str,
    /// Type name the node expects.
    expected: &'static str,
  },
  /// A value could not be converted into the requested scalar.
  #[error("cannot coerce `{from}` into `{into}`: {reason}")]
  Coercion {
    /// Type name of the received value.
    from: &'static str,
    /// Type name of the requested scalar.
    into: &'static str,
    /// Why the conversion failed.
    reason: String,
  },
  /// A transformation function rejected its input.
  #[error("transformation failed: {0}")]
  Transform(String),
  /// An adapter lost the connection to its external collaborator.
  #[error("disconnected: {0}")]
  Disconnected(String),
  /// An external request failed.
  #[error(transparent)]
  Request(#[from] RequestError),
  /// Any other failure reported by an external collaborator.
  #[error("external failure: {0}")]
  External(Arc<dyn Error + Send + Sync>),
}

impl NodeError {
  /// Wraps an arbitrary external error.
  pub fn external<E>(error: E) -> Self
  where
    E: Error + Send + Sync + 'static,
  {
    NodeError::External(Arc::new(error))
  }

  /// Builds a coercion error for a conversion from `F` into `S`.
  pub fn coercion<F: ?Sized, S: ?Sized>(reason: impl Into<String>) -> Self {
    NodeError::Coercion {
      from: std::any::type_name::<F>(),
      into: std::any::type_name::<S>(),
      reason: reason.into(),
    }
  }
}

/// A construction-time or API-usage failure.
#[derive(Error, Debug, Clone)]
pub enum GraphError {
  /// A terminal was requested with no node under the cursor.
  #[error("no current node to attach to")]
  NoCurrentNode,
  /// The cursor was moved to a tag that is not registered.
  #[error("no node is registered under tag `{0}`")]
  UnknownTag(Tag),
  /// A second begin node was requested.
  #[error("graph already has a begin node ({0})")]
  BeginExists(NodeId),
  /// A run operation needs a begin node but none was installed.
  #[error("graph has no begin node")]
  NoBeginNode,
  /// A handle does not belong to this graph.
  #[error("unknown node {0}")]
  UnknownNode(NodeId),
  /// Two nodes (or a node and a value) do not agree on a type.
  #[error("type mismatch at {node}: expected `{expected}`, found `{found}`")]
  TypeMismatch {
    /// The node where the mismatch was detected.
    node: NodeId,
    /// Type name required at that point.
    expected: &'static str,
    /// Type name actually supplied.
    found: &'static str,
  },
  /// The requested edge would close a cycle.
  #[error("attaching {from} -> {to} would create a cycle")]
  Cycle {
    /// Upstream end of the rejected edge.
    from: NodeId,
    /// Downstream end of the rejected edge.
    to: NodeId,
  },
  /// A terminal node was read before it received any value.
  #[error("terminal node {0} received no value")]
  NoValue(NodeId),
  /// A terminal node recorded a data-path error.
  #[error("node {node} failed: {source}")]
  Node {
    /// The terminal that recorded the error.
    node: NodeId,
    /// The recorded error.
    #[source]
    source: NodeError,
  },
  /// Configuration could not be parsed.
  #[error("invalid graph configuration: {0}")]
  Config(String),
}
