//! # Node Contract
//!
//! This module defines the contract every graph element implements.
//!
//! ## Operators and Nodes
//!
//! Node authors implement [`Operator`]: a strategy object with an input type, an
//! output type, and a single `on_input` step. The graph wraps every operator in one
//! erased node type that performs the checked downcast of incoming payloads, owns
//! the multicast fan-out list, and applies the default completion and error
//! behavior. There is no operator inheritance hierarchy; all built-in nodes are
//! plain structs implementing [`Operator`].
//!
//! ## Payloads
//!
//! Values travel as [`Payload`] (`Arc<dyn Any + Send + Sync>`). Fan-out clones the
//! `Arc`, never the value. An operator sees its input as `Arc<In>`; pass-through
//! operators forward that same `Arc` downstream.
//!
//! ## Signals
//!
//! An operator emits into an [`Outlet`]. Whatever it emits is delivered, in order,
//! to every attached downstream node once the step returns. Emitting nothing for an
//! input means "forward nothing".

use crate::error::NodeError;
use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A type-erased value travelling between nodes.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// Stable identity of a node inside its graph's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
  /// Position of the node in the arena.
  pub fn index(self) -> usize {
    self.0
  }
}

impl fmt::Display for NodeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "node#{}", self.0)
  }
}

/// A typed handle to a node accepting `I` and producing `O`.
///
/// Handles are `Copy` and only meaningful for the graph that created them.
/// Attaching two typed handles is checked at compile time.
pub struct NodeRef<I, O> {
  id: NodeId,
  _marker: PhantomData<fn(I) -> O>,
}

impl<I, O> NodeRef<I, O> {
  pub(crate) fn new(id: NodeId) -> Self {
    Self {
      id,
      _marker: PhantomData,
    }
  }

  /// The untyped identity of the node.
  pub fn id(&self) -> NodeId {
    self.id
  }
}

impl<I, O> Clone for NodeRef<I, O> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<I, O> Copy for NodeRef<I, O> {}

impl<I, O> PartialEq for NodeRef<I, O> {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl<I, O> Eq for NodeRef<I, O> {}

impl<I, O> fmt::Debug for NodeRef<I, O> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("NodeRef")
      .field("id", &self.id)
      .field("input", &std::any::type_name::<I>())
      .field("output", &std::any::type_name::<O>())
      .finish()
  }
}

/// One unit of traffic on an edge.
#[derive(Clone)]
pub(crate) enum Signal {
  Value(Payload),
  Completed,
  Error(NodeError),
}

impl fmt::Debug for Signal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Signal::Value(_) => write!(f, "Value(..)"),
      Signal::Completed => write!(f, "Completed"),
      Signal::Error(error) => write!(f, "Error({error})"),
    }
  }
}

/// Where an operator puts what it produces for the current step.
pub struct Outlet<'a, O> {
  signals: &'a mut Vec<Signal>,
  downstream: usize,
  _marker: PhantomData<fn(O)>,
}

impl<'a, O: Send + Sync + 'static> Outlet<'a, O> {
  pub(crate) fn new(signals: &'a mut Vec<Signal>, downstream: usize) -> Self {
    Self {
      signals,
      downstream,
      _marker: PhantomData,
    }
  }

  /// Emits a freshly produced value.
  pub fn emit(&mut self, value: O) {
    self.forward(Arc::new(value));
  }

  /// Emits a shared value without copying it.
  pub fn forward(&mut self, value: Arc<O>) {
    let payload: Payload = value;
    self.signals.push(Signal::Value(payload));
  }

  /// Signals that no more values will follow from this node.
  pub fn complete(&mut self) {
    self.signals.push(Signal::Completed);
  }

  /// Signals a failure to every downstream node.
  pub fn fail(&mut self, error: NodeError) {
    self.signals.push(Signal::Error(error));
  }

  /// Whether at least one downstream node is attached.
  pub fn has_downstream(&self) -> bool {
    self.downstream > 0
  }

  /// Number of attached downstream nodes.
  pub fn downstream_count(&self) -> usize {
    self.downstream
  }
}

/// The processing step of a node.
///
/// Only [`Operator::on_input`] is required. The remaining hooks default to the
/// base node behavior:
///
/// - `on_completed`: do nothing.
/// - `on_error`: multicast the error to every downstream node. The link from the
///   failing upstream has already been detached by the graph at this point.
/// - `on_attached`: do nothing. Anything emitted here is delivered only to the
///   node that was just attached.
/// - `emit`: do nothing. Source nodes override it to produce their values.
pub trait Operator: Send + 'static {
  /// Input value type.
  type In: Send + Sync + 'static;
  /// Output value type.
  type Out: Send + Sync + 'static;

  /// Short name used in logs and errors.
  fn name(&self) -> &'static str {
    std::any::type_name::<Self>()
  }

  /// Processes one input value.
  fn on_input(
    &mut self,
    input: Arc<Self::In>,
    out: &mut Outlet<'_, Self::Out>,
  ) -> Result<(), NodeError>;

  /// Reacts to upstream completion.
  fn on_completed(&mut self, _out: &mut Outlet<'_, Self::Out>) {}

  /// Reacts to an upstream error.
  fn on_error(&mut self, error: NodeError, out: &mut Outlet<'_, Self::Out>) {
    out.fail(error);
  }

  /// Reacts to a new downstream node being attached.
  fn on_attached(&mut self, _out: &mut Outlet<'_, Self::Out>) {}

  /// Produces values when the node is driven as a source.
  fn emit(&mut self, _out: &mut Outlet<'_, Self::Out>) {}
}

/// Type-erased view of an operator, as stored in the graph arena.
pub(crate) trait Node: Send {
  fn name(&self) -> &'static str;
  fn input_type(&self) -> (TypeId, &'static str);
  fn output_type(&self) -> (TypeId, &'static str);
  fn on_input(
    &mut self,
    input: Payload,
    signals: &mut Vec<Signal>,
    downstream: usize,
  ) -> Result<(), NodeError>;
  fn on_completed(&mut self, signals: &mut Vec<Signal>, downstream: usize);
  fn on_error(&mut self, error: NodeError, signals: &mut Vec<Signal>, downstream: usize);
  fn on_attached(&mut self, signals: &mut Vec<Signal>, downstream: usize);
  fn emit(&mut self, signals: &mut Vec<Signal>, downstream: usize);
  fn operator(&self) -> &dyn Any;
  fn operator_mut(&mut self) -> &mut dyn Any;
  fn operator_type_name(&self) -> &'static str;
}

/// The single erased node type: an operator plus the checked downcast.
pub(crate) struct OperatorNode<Op> {
  op: Op,
}

impl<Op: Operator> OperatorNode<Op> {
  pub(crate) fn new(op: Op) -> Self {
    Self { op }
  }
}

impl<Op: Operator> Node for OperatorNode<Op> {
  fn name(&self) -> &'static str {
    self.op.name()
  }

  fn input_type(&self) -> (TypeId, &'static str) {
    (TypeId::of::<Op::In>(), std::any::type_name::<Op::In>())
  }

  fn output_type(&self) -> (TypeId, &'static str) {
    (TypeId::of::<Op::Out>(), std::any::type_name::<Op::Out>())
  }

  fn on_input(
    &mut self,
    input: Payload,
    signals: &mut Vec<Signal>,
    downstream: usize,
  ) -> Result<(), NodeError> {
    let input = input
      .downcast::<Op::In>()
      .map_err(|_| NodeError::TypeMismatch {
        node: self.op.name(),
        expected: std::any::type_name::<Op::In>(),
      })?;
    self.op.on_input(input, &mut Outlet::new(signals, downstream))
  }

  fn on_completed(&mut self, signals: &mut Vec<Signal>, downstream: usize) {
    self.op.on_completed(&mut Outlet::new(signals, downstream));
  }

  fn on_error(&mut self, error: NodeError, signals: &mut Vec<Signal>, downstream: usize) {
    self.op.on_error(error, &mut Outlet::new(signals, downstream));
  }

  fn on_attached(&mut self, signals: &mut Vec<Signal>, downstream: usize) {
    self.op.on_attached(&mut Outlet::new(signals, downstream));
  }

  fn emit(&mut self, signals: &mut Vec<Signal>, downstream: usize) {
    self.op.emit(&mut Outlet::new(signals, downstream));
  }

  fn operator(&self) -> &dyn Any {
    &self.op
  }

  fn operator_mut(&mut self) -> &mut dyn Any {
    &mut self.op
  }

  fn operator_type_name(&self) -> &'static str {
    std::any::type_name::<Op>()
  }
}
