//! # Graph - Arena and Synchronous Dispatch
//!
//! The `Graph` owns every node in an arena and refers to them by [`NodeId`].
//! Edges are stored as ordered fan-out lists on each arena entry; they are
//! dispatch associations only. The graph, not any upstream node, owns node
//! lifetime.
//!
//! ## Execution Model
//!
//! Execution is synchronous and depth-first. Driving a node (`emit`, `push`,
//! `publish`) runs its step, then carries each emitted signal to every attached
//! downstream node, recursively, before the call returns. There is no queue and
//! no suspension point.
//!
//! ## Topology
//!
//! The topology must be acyclic. With the default configuration, `attach`
//! rejects any edge that would close a cycle.
//!
//! ## Errors
//!
//! A node receiving an error signal is first detached from the upstream that
//! sent it, then its operator's `on_error` hook runs (multicast by default).
//! An error signal emitted by a node with no downstream is logged and kept in
//! the unhandled error list.

use crate::config::GraphConfig;
use crate::error::{GraphError, NodeError};
use crate::node::{Node, NodeId, NodeRef, Operator, OperatorNode, Payload, Signal};
use crate::tag::Tag;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Position of the builder cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Cursor {
  /// No node selected yet.
  Unset,
  /// Chaining continues from this node.
  At(NodeId),
  /// `find` was called with a tag that is not registered.
  Lost(Tag),
}

/// One arena slot: the node and its fan-out list.
struct NodeEntry {
  node: Box<dyn Node>,
  downstream: Vec<NodeId>,
}

/// A push-based dataflow graph.
///
/// # Example
///
/// ```rust
/// use pushweave::graph::Graph;
///
/// let mut graph = Graph::new();
/// let sink = graph.from_list(0..10).skip(7).collect();
/// graph.emit().unwrap();
/// assert_eq!(graph.collected(sink).unwrap(), vec![7, 8, 9]);
/// ```
pub struct Graph {
  config: GraphConfig,
  nodes: Vec<NodeEntry>,
  tags: HashMap<Tag, NodeId>,
  begin: Option<NodeId>,
  pub(crate) cursor: Cursor,
  pub(crate) pending_tag: Option<Tag>,
  construction_error: Option<GraphError>,
  unhandled: Vec<(NodeId, NodeError)>,
}

impl Default for Graph {
  fn default() -> Self {
    Self::new()
  }
}

impl Graph {
  /// Creates an empty graph with the default configuration.
  pub fn new() -> Self {
    Self::with_config(GraphConfig::default())
  }

  /// Creates an empty graph with the given configuration.
  pub fn with_config(config: GraphConfig) -> Self {
    Self {
      config,
      nodes: Vec::new(),
      tags: HashMap::new(),
      begin: None,
      cursor: Cursor::Unset,
      pending_tag: None,
      construction_error: None,
      unhandled: Vec::new(),
    }
  }

  /// The graph's configuration.
  pub fn config(&self) -> &GraphConfig {
    &self.config
  }

  /// Number of nodes in the arena.
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Whether the arena is empty.
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// The begin node, if one has been installed.
  pub fn begin_node(&self) -> Option<NodeId> {
    self.begin
  }

  /// The node the builder cursor points at.
  pub fn current_node(&self) -> Option<NodeId> {
    match self.cursor {
      Cursor::At(id) => Some(id),
      _ => None,
    }
  }

  // --------------------------------------------------------------------------
  // Arena and registry
  // --------------------------------------------------------------------------

  /// Adds an unattached node to the arena and registers its identity tag.
  pub fn add<Op: Operator>(&mut self, op: Op) -> NodeRef<Op::In, Op::Out> {
    let id = NodeId(self.nodes.len());
    self.nodes.push(NodeEntry {
      node: Box::new(OperatorNode::new(op)),
      downstream: Vec::new(),
    });
    self.tags.insert(Tag::Node(id), id);
    trace!(graph = %self.config.name, node = %id, "node added");
    NodeRef::new(id)
  }

  /// Registers `id` under `tag`. A previous mapping for the tag is replaced.
  pub fn register(&mut self, tag: impl Into<Tag>, id: NodeId) -> Result<(), GraphError> {
    self.entry(id)?;
    let tag = tag.into();
    debug!(graph = %self.config.name, %tag, node = %id, "tag registered");
    self.tags.insert(tag, id);
    Ok(())
  }

  /// Looks up the node registered under `tag`.
  pub fn lookup(&self, tag: impl Into<Tag>) -> Option<NodeId> {
    self.tags.get(&tag.into()).copied()
  }

  /// The ordered fan-out list of a node.
  pub fn downstream_of(&self, id: NodeId) -> Result<&[NodeId], GraphError> {
    Ok(&self.entry(id)?.downstream)
  }

  /// The operator name of a node.
  pub fn name_of(&self, id: NodeId) -> Result<&'static str, GraphError> {
    Ok(self.entry(id)?.node.name())
  }

  /// Borrows the operator of a node as its concrete type.
  pub fn operator<Op: Operator>(&self, id: NodeId) -> Result<&Op, GraphError> {
    let node = &self.entry(id)?.node;
    let found = node.operator_type_name();
    node
      .operator()
      .downcast_ref::<Op>()
      .ok_or(GraphError::TypeMismatch {
        node: id,
        expected: std::any::type_name::<Op>(),
        found,
      })
  }

  /// Mutably borrows the operator of a node as its concrete type.
  pub fn operator_mut<Op: Operator>(&mut self, id: NodeId) -> Result<&mut Op, GraphError> {
    let node = &mut self.entry_mut(id)?.node;
    let found = node.operator_type_name();
    node
      .operator_mut()
      .downcast_mut::<Op>()
      .ok_or(GraphError::TypeMismatch {
        node: id,
        expected: std::any::type_name::<Op>(),
        found,
      })
  }

  fn entry(&self, id: NodeId) -> Result<&NodeEntry, GraphError> {
    self.nodes.get(id.0).ok_or(GraphError::UnknownNode(id))
  }

  fn entry_mut(&mut self, id: NodeId) -> Result<&mut NodeEntry, GraphError> {
    self.nodes.get_mut(id.0).ok_or(GraphError::UnknownNode(id))
  }

  // --------------------------------------------------------------------------
  // Output capability: attach / detach
  // --------------------------------------------------------------------------

  /// Attaches `to` downstream of `from`. Attaching twice is a no-op.
  pub fn attach<A, T, B>(
    &mut self,
    from: NodeRef<A, T>,
    to: NodeRef<T, B>,
  ) -> Result<(), GraphError> {
    self.link(from.id(), to.id())
  }

  /// Attaches every target downstream of `from`, checking types at run time.
  pub fn attach_all(&mut self, from: NodeId, targets: &[NodeId]) -> Result<(), GraphError> {
    for &to in targets {
      self.link(from, to)?;
    }
    Ok(())
  }

  /// Detaches every target from `from`. Targets that are not attached are ignored.
  pub fn detach(&mut self, from: NodeId, targets: &[NodeId]) -> Result<(), GraphError> {
    self.entry(from)?;
    for &to in targets {
      self.unlink(from, to);
    }
    Ok(())
  }

  pub(crate) fn link(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
    let (produced, produced_name) = self.entry(from)?.node.output_type();
    let (accepted, accepted_name) = self.entry(to)?.node.input_type();
    if produced != accepted {
      return Err(GraphError::TypeMismatch {
        node: to,
        expected: accepted_name,
        found: produced_name,
      });
    }
    if self.entry(from)?.downstream.contains(&to) {
      return Ok(());
    }
    if self.config.reject_cycles && (from == to || self.reaches(to, from)) {
      return Err(GraphError::Cycle { from, to });
    }

    self.nodes[from.0].downstream.push(to);
    debug!(graph = %self.config.name, %from, %to, "attached");

    let mut signals = Vec::new();
    let entry = &mut self.nodes[from.0];
    let downstream = entry.downstream.len();
    entry.node.on_attached(&mut signals, downstream);
    for signal in signals {
      self.deliver(Some(from), to, signal);
    }
    Ok(())
  }

  fn unlink(&mut self, from: NodeId, to: NodeId) {
    if let Some(entry) = self.nodes.get_mut(from.0) {
      let before = entry.downstream.len();
      entry.downstream.retain(|&id| id != to);
      if entry.downstream.len() != before {
        debug!(graph = %self.config.name, %from, %to, "detached");
      }
    }
  }

  /// Whether `target` is reachable from `start` along existing edges.
  fn reaches(&self, start: NodeId, target: NodeId) -> bool {
    let mut visited = vec![false; self.nodes.len()];
    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
      if id == target {
        return true;
      }
      if std::mem::replace(&mut visited[id.0], true) {
        continue;
      }
      stack.extend(self.nodes[id.0].downstream.iter().copied());
    }
    false
  }

  // --------------------------------------------------------------------------
  // Builder state
  // --------------------------------------------------------------------------

  /// Returns the first construction error recorded by the builder, if any.
  pub fn check(&self) -> Result<(), GraphError> {
    match &self.construction_error {
      Some(error) => Err(error.clone()),
      None => Ok(()),
    }
  }

  pub(crate) fn poison(&mut self, error: GraphError) {
    warn!(graph = %self.config.name, %error, "graph construction failed");
    if self.construction_error.is_none() {
      self.construction_error = Some(error);
    }
  }

  /// Checks that a node can be appended at the cursor.
  pub(crate) fn ready_to_append(&self) -> Result<(), GraphError> {
    self.check()?;
    match &self.cursor {
      Cursor::At(_) => Ok(()),
      Cursor::Unset => match self.begin {
        None => Ok(()),
        Some(begin) => Err(GraphError::BeginExists(begin)),
      },
      Cursor::Lost(tag) => Err(GraphError::UnknownTag(tag.clone())),
    }
  }

  /// Attaches `entry` after the cursor (or installs it as the begin node) and
  /// moves the cursor to `cursor_to`. The pending tag is bound to `cursor_to`.
  pub(crate) fn append(&mut self, entry: NodeId, cursor_to: NodeId) -> Result<(), GraphError> {
    self.ready_to_append()?;
    match self.cursor {
      Cursor::At(parent) => self.link(parent, entry)?,
      _ => self.install_begin(entry)?,
    }
    self.bind_pending_tag(cursor_to);
    self.cursor = Cursor::At(cursor_to);
    Ok(())
  }

  /// Attaches `id` after the cursor without moving the cursor.
  pub(crate) fn append_terminal(&mut self, id: NodeId) -> Result<(), GraphError> {
    self.check()?;
    match &self.cursor {
      Cursor::At(parent) => {
        let parent = *parent;
        self.link(parent, id)?;
      }
      Cursor::Unset => return Err(GraphError::NoCurrentNode),
      Cursor::Lost(tag) => return Err(GraphError::UnknownTag(tag.clone())),
    }
    self.bind_pending_tag(id);
    Ok(())
  }

  pub(crate) fn install_begin(&mut self, id: NodeId) -> Result<(), GraphError> {
    if let Some(begin) = self.begin {
      return Err(GraphError::BeginExists(begin));
    }
    self.entry(id)?;
    debug!(graph = %self.config.name, node = %id, "begin node installed");
    self.begin = Some(id);
    Ok(())
  }

  fn bind_pending_tag(&mut self, id: NodeId) {
    if let Some(tag) = self.pending_tag.take() {
      debug!(graph = %self.config.name, %tag, node = %id, "tag registered");
      self.tags.insert(tag, id);
    }
  }

  /// Moves the cursor to the node registered under `tag`, whose output must be `T`.
  pub(crate) fn seek<T: 'static>(&mut self, tag: Tag) {
    match self.tags.get(&tag).copied() {
      Some(id) => {
        let (produced, found) = self.nodes[id.0].node.output_type();
        if produced == TypeId::of::<T>() {
          self.cursor = Cursor::At(id);
        } else {
          self.cursor = Cursor::Unset;
          self.poison(GraphError::TypeMismatch {
            node: id,
            expected: std::any::type_name::<T>(),
            found,
          });
        }
      }
      None => {
        debug!(graph = %self.config.name, %tag, "find missed, cursor lost");
        self.cursor = Cursor::Lost(tag);
      }
    }
  }

  // --------------------------------------------------------------------------
  // Driving the graph
  // --------------------------------------------------------------------------

  /// Asks the begin node to emit its values (a list source pushes its items).
  pub fn emit(&mut self) -> Result<(), GraphError> {
    self.check()?;
    let begin = self.begin.ok_or(GraphError::NoBeginNode)?;
    let mut signals = Vec::new();
    let entry = &mut self.nodes[begin.0];
    let downstream = entry.downstream.len();
    entry.node.emit(&mut signals, downstream);
    self.dispatch(begin, signals);
    Ok(())
  }

  /// Delivers a value to the begin node.
  pub fn push<T: Send + Sync + 'static>(&mut self, value: T) -> Result<(), GraphError> {
    self.check()?;
    let begin = self.begin.ok_or(GraphError::NoBeginNode)?;
    self.deliver_value(begin, Arc::new(value), std::any::type_name::<T>())
  }

  /// Delivers a value to an arbitrary node as if an upstream had produced it.
  pub fn push_to<I, O>(&mut self, node: NodeRef<I, O>, value: I) -> Result<(), GraphError>
  where
    I: Send + Sync + 'static,
  {
    self.check()?;
    self.deliver_value(node.id(), Arc::new(value), std::any::type_name::<I>())
  }

  /// Sends `value` to the downstream set of `node`, as if `node` had emitted it.
  ///
  /// This is the entry point for source adapters.
  pub fn publish<I, O>(&mut self, node: NodeRef<I, O>, value: O) -> Result<(), GraphError>
  where
    O: Send + Sync + 'static,
  {
    self.check()?;
    self.entry(node.id())?;
    let payload: Payload = Arc::new(value);
    self.dispatch(node.id(), vec![Signal::Value(payload)]);
    Ok(())
  }

  /// Signals completion to the downstream set of `node`.
  pub fn complete<I, O>(&mut self, node: NodeRef<I, O>) -> Result<(), GraphError> {
    self.check()?;
    self.entry(node.id())?;
    self.dispatch(node.id(), vec![Signal::Completed]);
    Ok(())
  }

  /// Multicasts `error` to the downstream set of `node`.
  pub fn fail<I, O>(&mut self, node: NodeRef<I, O>, error: NodeError) -> Result<(), GraphError> {
    self.check()?;
    self.entry(node.id())?;
    self.dispatch(node.id(), vec![Signal::Error(error)]);
    Ok(())
  }

  fn deliver_value(
    &mut self,
    id: NodeId,
    payload: Payload,
    found: &'static str,
  ) -> Result<(), GraphError> {
    let (accepted, expected) = self.entry(id)?.node.input_type();
    if (*payload).type_id() != accepted {
      return Err(GraphError::TypeMismatch {
        node: id,
        expected,
        found,
      });
    }
    self.deliver(None, id, Signal::Value(payload));
    Ok(())
  }

  /// Runs one signal through `target`, then through everything downstream of it.
  fn deliver(&mut self, from: Option<NodeId>, target: NodeId, signal: Signal) {
    if let (Some(from), Signal::Error(_)) = (from, &signal) {
      self.unlink(from, target);
    }
    trace!(graph = %self.config.name, node = %target, ?signal, "deliver");

    let mut signals = Vec::new();
    let entry = &mut self.nodes[target.0];
    let downstream = entry.downstream.len();
    match signal {
      Signal::Value(payload) => {
        if let Err(error) = entry.node.on_input(payload, &mut signals, downstream) {
          signals.push(Signal::Error(error));
        }
      }
      Signal::Completed => entry.node.on_completed(&mut signals, downstream),
      Signal::Error(error) => entry.node.on_error(error, &mut signals, downstream),
    }
    self.dispatch(target, signals);
  }

  /// Carries each signal from `from` to its current fan-out list, in order.
  fn dispatch(&mut self, from: NodeId, signals: Vec<Signal>) {
    for signal in signals {
      let targets = self.nodes[from.0].downstream.clone();
      if targets.is_empty() {
        if let Signal::Error(error) = signal {
          self.record_unhandled(from, error);
        }
        continue;
      }
      for target in targets {
        self.deliver(Some(from), target, signal.clone());
      }
    }
  }

  fn record_unhandled(&mut self, node: NodeId, error: NodeError) {
    warn!(graph = %self.config.name, %node, %error, "error reached a node with no downstream");
    self.unhandled.push((node, error));
  }

  /// Errors that reached a node with no downstream and were not recorded by it.
  pub fn unhandled_errors(&self) -> &[(NodeId, NodeError)] {
    &self.unhandled
  }

  /// Drains the unhandled error list.
  pub fn take_unhandled_errors(&mut self) -> Vec<(NodeId, NodeError)> {
    std::mem::take(&mut self.unhandled)
  }
}
