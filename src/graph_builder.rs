//! # GraphBuilder
//!
//! Fluent construction over a [`Graph`].
//!
//! A `GraphBuilder<'_, T>` borrows the graph and carries the output type `T` of
//! the node under the cursor, so every `next(..)` is type-checked at compile
//! time. The cursor itself, the begin node, and the pending tag live on the
//! graph, so several builders can be started one after the other to grow
//! branches:
//!
//! ```rust
//! use pushweave::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.begin::<i32>().tag("source").map(|x| x * 10);
//! let small = graph.find::<i32>("source").filter(|x| *x < 30).collect();
//! let large = graph.find::<i32>("source").filter(|x| *x >= 30).collect();
//!
//! for x in 0..5 {
//!   graph.push(x).unwrap();
//! }
//! assert_eq!(graph.collected(small).unwrap(), vec![0, 10, 20]);
//! assert_eq!(graph.collected(large).unwrap(), vec![30, 40]);
//! ```
//!
//! ## Errors
//!
//! Builder calls never return errors directly. The first construction error is
//! stored on the graph; later builder calls become no-ops and every run
//! operation (`emit`, `push`, `publish`, the `to_*` terminals) returns it.
//! `try_next` is the immediate-error variant of `next`.

use crate::error::{GraphError, NodeError};
use crate::graph::Graph;
use crate::node::{NodeId, NodeRef, Operator};
use crate::nodes::collect_node::CollectNode;
use crate::nodes::filter_node::FilterNode;
use crate::nodes::for_each_node::ActionNode;
use crate::nodes::list_node::ListNode;
use crate::nodes::map_node::MapNode;
use crate::nodes::reduction::SumNode;
use crate::nodes::stream::{
  BufferNode, DeferNode, RepeatNode, SkipNode, SkipWhileNode, TakeNode, ZipPortRef,
};
use crate::nodes::type_ops::{
  ScalarNode, to_boolean_node, to_char_node, to_number_node, to_string_node,
};
use crate::tag::Tag;
use num_traits::ToPrimitive;
use std::fmt::Display;
use std::marker::PhantomData;

/// Fluent cursor over a graph whose current node produces `T`.
pub struct GraphBuilder<'g, T> {
  graph: &'g mut Graph,
  _marker: PhantomData<fn() -> T>,
}

impl Graph {
  /// Starts a chain whose first node accepts `T`.
  ///
  /// The cursor is reset; the first `next(..)` installs the begin node.
  pub fn begin<T: Send + Sync + 'static>(&mut self) -> GraphBuilder<'_, T> {
    self.cursor = crate::graph::Cursor::Unset;
    GraphBuilder::new(self)
  }

  /// Adopts an externally constructed source node as the begin node.
  pub fn from<Op: Operator>(&mut self, source: Op) -> GraphBuilder<'_, Op::Out> {
    let source = self.add(source);
    self.cursor = crate::graph::Cursor::Unset;
    if let Err(error) = self.append(source.id(), source.id()) {
      self.poison(error);
    }
    GraphBuilder::new(self)
  }

  /// Adopts a list source holding `items` as the begin node.
  pub fn from_list<T, I>(&mut self, items: I) -> GraphBuilder<'_, T>
  where
    T: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
  {
    self.from(ListNode::new(items))
  }

  /// Moves the cursor to the node registered under `tag`.
  ///
  /// The node must produce `T`. An unregistered tag leaves the cursor lost: the
  /// next `next(..)` fails with [`GraphError::UnknownTag`].
  pub fn find<T: Send + Sync + 'static>(&mut self, tag: impl Into<Tag>) -> GraphBuilder<'_, T> {
    self.seek::<T>(tag.into());
    GraphBuilder::new(self)
  }

  /// Collected values of a [`CollectNode`] sink.
  pub fn collected<T>(&self, sink: NodeRef<T, T>) -> Result<Vec<T>, GraphError>
  where
    T: Clone + Send + Sync + 'static,
  {
    Ok(self.operator::<CollectNode<T>>(sink.id())?.values().cloned().collect())
  }
}

impl<'g, T: Send + Sync + 'static> GraphBuilder<'g, T> {
  fn new(graph: &'g mut Graph) -> Self {
    Self {
      graph,
      _marker: PhantomData,
    }
  }

  fn retype<U>(self) -> GraphBuilder<'g, U> {
    GraphBuilder {
      graph: self.graph,
      _marker: PhantomData,
    }
  }

  /// The graph being built.
  pub fn graph(&mut self) -> &mut Graph {
    &mut *self.graph
  }

  /// The node under the cursor.
  pub fn node(&self) -> Option<NodeId> {
    self.graph.current_node()
  }

  /// Stages `tag` for the node attached by the very next `next(..)`.
  pub fn tag(self, tag: impl Into<Tag>) -> Self {
    self.graph.pending_tag = Some(tag.into());
    self
  }

  /// Attaches `op` after the cursor and moves the cursor to it.
  pub fn next<Op>(self, op: Op) -> GraphBuilder<'g, Op::Out>
  where
    Op: Operator<In = T>,
  {
    match self.graph.ready_to_append() {
      Ok(()) => {
        let node = self.graph.add(op);
        if let Err(error) = self.graph.append(node.id(), node.id()) {
          self.graph.poison(error);
        }
      }
      Err(error) => self.graph.poison(error),
    }
    self.retype()
  }

  /// Like [`next`](Self::next), but reports a construction error immediately
  /// instead of storing it on the graph.
  pub fn try_next<Op>(self, op: Op) -> Result<GraphBuilder<'g, Op::Out>, GraphError>
  where
    Op: Operator<In = T>,
  {
    self.graph.ready_to_append()?;
    let node = self.graph.add(op);
    self.graph.append(node.id(), node.id())?;
    Ok(self.retype())
  }

  /// Attaches an existing node after the cursor and moves the cursor to it.
  ///
  /// This is how several branches fan in to one shared node.
  pub fn next_node<U>(self, node: NodeRef<T, U>) -> GraphBuilder<'g, U>
  where
    U: Send + Sync + 'static,
  {
    if let Err(error) = self.graph.append(node.id(), node.id()) {
      self.graph.poison(error);
    }
    self.retype()
  }

  /// Attaches a terminal node without moving the cursor and returns its handle.
  pub fn end<Op>(self, sink: Op) -> NodeRef<T, Op::Out>
  where
    Op: Operator<In = T>,
  {
    let sink = self.graph.add(sink);
    if let Err(error) = self.graph.append_terminal(sink.id()) {
      self.graph.poison(error);
    }
    sink
  }

  /// Attaches an action terminal without moving the cursor.
  pub fn end_action<F>(self, action: F) -> NodeRef<T, T>
  where
    F: FnMut(&T) + Send + 'static,
  {
    self.end(ActionNode::new(action))
  }

  /// Enters one port of a zip node; the cursor moves to the zip node itself.
  pub fn next_port<O>(self, port: ZipPortRef<T, O>) -> GraphBuilder<'g, O>
  where
    O: Send + Sync + 'static,
  {
    if let Err(error) = self.graph.append(port.port().id(), port.zip().id()) {
      self.graph.poison(error);
    }
    self.retype()
  }

  /// Forwards values satisfying `predicate`.
  pub fn filter<F>(self, predicate: F) -> Self
  where
    F: FnMut(&T) -> bool + Send + 'static,
  {
    self.next(FilterNode::new(predicate))
  }

  /// Forwards `function(value)`.
  pub fn map<O, F>(self, function: F) -> GraphBuilder<'g, O>
  where
    O: Send + Sync + 'static,
    F: FnMut(&T) -> O + Send + 'static,
  {
    self.next(MapNode::new(function))
  }

  /// Forwards each value rendered through `Display`.
  pub fn string(self) -> GraphBuilder<'g, String>
  where
    T: Display,
  {
    self.map(|value| value.to_string())
  }

  /// Alias of [`map`](Self::map).
  pub fn eval<O, F>(self, function: F) -> GraphBuilder<'g, O>
  where
    O: Send + Sync + 'static,
    F: FnMut(&T) -> O + Send + 'static,
  {
    self.map(function)
  }

  /// Forwards `function(value)`; an `Err` is raised as a node error.
  pub fn try_map<O, F>(self, function: F) -> GraphBuilder<'g, O>
  where
    O: Send + Sync + 'static,
    F: FnMut(&T) -> Result<O, NodeError> + Send + 'static,
  {
    self.next(MapNode::try_new(function))
  }

  /// Runs `action` for each value and forwards the value unchanged.
  pub fn action<F>(self, action: F) -> Self
  where
    F: FnMut(&T) + Send + 'static,
  {
    self.next(ActionNode::new(action))
  }

  /// Alias of [`action`](Self::action).
  pub fn exec<F>(self, action: F) -> Self
  where
    F: FnMut(&T) + Send + 'static,
  {
    self.action(action)
  }

  /// Drops the first `count` values.
  pub fn skip(self, count: usize) -> Self {
    self.next(SkipNode::new(count))
  }

  /// Drops values while `predicate` holds, then forwards everything.
  pub fn skip_while<F>(self, predicate: F) -> Self
  where
    F: FnMut(&T) -> bool + Send + 'static,
  {
    self.next(SkipWhileNode::new(predicate))
  }

  /// Forwards the first `count` values, then completes.
  pub fn take(self, count: usize) -> Self {
    self.next(TakeNode::new(count))
  }

  /// Forwards every value `times` times.
  pub fn repeat(self, times: usize) -> Self {
    self.next(RepeatNode::new(times))
  }

  /// Retains the last `capacity` values for late downstream nodes.
  pub fn buffer(self, capacity: usize) -> Self {
    self.next(BufferNode::new(capacity))
  }

  /// Holds values until a downstream node is attached, bounded by the
  /// configured `defer_capacity`.
  pub fn defer(self) -> Self {
    let capacity = self.graph.config().defer_capacity;
    self.next(DeferNode::new(capacity))
  }

  /// Holds at most `capacity` values until a downstream node is attached.
  pub fn defer_bounded(self, capacity: usize) -> Self {
    self.next(DeferNode::new(Some(capacity)))
  }

  /// Accumulates a running total, emitted when upstream completes.
  pub fn sum(self) -> GraphBuilder<'g, f64>
  where
    T: ToPrimitive,
  {
    self.next(SumNode::new())
  }

  /// Attaches a sink recording every value, and returns its handle.
  pub fn collect(self) -> NodeRef<T, T> {
    self.end(CollectNode::new())
  }

  /// Attaches a scalar terminal, emits the begin node and reads the result.
  fn collapse<S>(self, terminal: ScalarNode<T, S>) -> Result<S, GraphError>
  where
    S: Clone + Send + Sync + 'static,
  {
    let graph = self.graph;
    let sink = graph.add(terminal);
    graph.append_terminal(sink.id())?;
    graph.emit()?;
    graph.operator::<ScalarNode<T, S>>(sink.id())?.result(sink.id())
  }

  /// Emits the graph and returns the last value as `bool`.
  pub fn to_bool(self) -> Result<bool, GraphError> {
    self.collapse(ScalarNode::new("to_bool", to_boolean_node::to_bool::<T>))
  }

  /// Emits the graph and returns the last value as `char`.
  pub fn to_char(self) -> Result<char, GraphError> {
    self.collapse(ScalarNode::new("to_char", to_char_node::to_char::<T>))
  }

  /// Emits the graph and returns the last value as `i8`.
  pub fn to_i8(self) -> Result<i8, GraphError>
  where
    T: ToPrimitive,
  {
    self.collapse(ScalarNode::new("to_i8", to_number_node::to_i8::<T>))
  }

  /// Emits the graph and returns the last value as `i16`.
  pub fn to_i16(self) -> Result<i16, GraphError>
  where
    T: ToPrimitive,
  {
    self.collapse(ScalarNode::new("to_i16", to_number_node::to_i16::<T>))
  }

  /// Emits the graph and returns the last value as `i32`.
  pub fn to_i32(self) -> Result<i32, GraphError>
  where
    T: ToPrimitive,
  {
    self.collapse(ScalarNode::new("to_i32", to_number_node::to_i32::<T>))
  }

  /// Emits the graph and returns the last value as `i64`.
  pub fn to_i64(self) -> Result<i64, GraphError>
  where
    T: ToPrimitive,
  {
    self.collapse(ScalarNode::new("to_i64", to_number_node::to_i64::<T>))
  }

  /// Emits the graph and returns the last value as `f32`.
  pub fn to_f32(self) -> Result<f32, GraphError>
  where
    T: ToPrimitive,
  {
    self.collapse(ScalarNode::new("to_f32", to_number_node::to_f32::<T>))
  }

  /// Emits the graph and returns the last value as `f64`.
  pub fn to_f64(self) -> Result<f64, GraphError>
  where
    T: ToPrimitive,
  {
    self.collapse(ScalarNode::new("to_f64", to_number_node::to_f64::<T>))
  }

  /// Emits the graph and returns the last value rendered with `Display`.
  pub fn to_text(self) -> Result<String, GraphError>
  where
    T: Display,
  {
    self.collapse(ScalarNode::new("to_text", to_string_node::to_text::<T>))
  }
}
