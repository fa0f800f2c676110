//! # Scalar Node
//!
//! Converts each input with a plain function and keeps the latest outcome.
//! Successful conversions are also emitted, so a scalar node can sit in the
//! middle of a chain; failures are recorded and multicast when something is
//! attached downstream.

use crate::error::{GraphError, NodeError};
use crate::node::{NodeId, Operator, Outlet};
use std::sync::Arc;

/// Conversion from a borrowed input to a scalar.
pub type Convert<T, S> = fn(&T) -> Result<S, NodeError>;

/// Coercing terminal from `T` to `S`.
pub struct ScalarNode<T, S> {
  name: &'static str,
  convert: Convert<T, S>,
  value: Option<S>,
  error: Option<NodeError>,
  completed: bool,
}

impl<T, S: Clone> ScalarNode<T, S> {
  /// Creates a terminal named `name` using `convert`.
  pub fn new(name: &'static str, convert: Convert<T, S>) -> Self {
    Self {
      name,
      convert,
      value: None,
      error: None,
      completed: false,
    }
  }

  /// The latest successfully converted value.
  pub fn value(&self) -> Option<&S> {
    self.value.as_ref()
  }

  /// The latest failure, if the latest input failed.
  pub fn error(&self) -> Option<&NodeError> {
    self.error.as_ref()
  }

  /// Whether upstream completed.
  pub fn is_completed(&self) -> bool {
    self.completed
  }

  /// Reads the outcome of the terminal at `node`.
  pub fn result(&self, node: NodeId) -> Result<S, GraphError> {
    if let Some(source) = &self.error {
      return Err(GraphError::Node {
        node,
        source: source.clone(),
      });
    }
    self.value.clone().ok_or(GraphError::NoValue(node))
  }

  fn record_error(&mut self, error: NodeError, out: &mut Outlet<'_, S>)
  where
    S: Send + Sync + 'static,
  {
    self.value = None;
    self.error = Some(error.clone());
    if out.has_downstream() {
      out.fail(error);
    }
  }
}

impl<T, S> Operator for ScalarNode<T, S>
where
  T: Send + Sync + 'static,
  S: Clone + Send + Sync + 'static,
{
  type In = T;
  type Out = S;

  fn name(&self) -> &'static str {
    self.name
  }

  fn on_input(&mut self, input: Arc<T>, out: &mut Outlet<'_, S>) -> Result<(), NodeError> {
    match (self.convert)(&input) {
      Ok(value) => {
        self.error = None;
        self.value = Some(value.clone());
        out.emit(value);
      }
      Err(error) => self.record_error(error, out),
    }
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, S>) {
    self.completed = true;
    out.complete();
  }

  fn on_error(&mut self, error: NodeError, out: &mut Outlet<'_, S>) {
    self.record_error(error, out);
  }
}
