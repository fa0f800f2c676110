//! # Collect Node
//!
//! A sink that records everything it receives: values in arrival order, whether
//! upstream completed, and every error. Read it back with
//! [`Graph::collected`](crate::graph::Graph::collected) or by borrowing the
//! operator through [`Graph::operator`](crate::graph::Graph::operator).

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use std::sync::Arc;

/// Recording sink.
pub struct CollectNode<T> {
  values: Vec<Arc<T>>,
  completions: usize,
  errors: Vec<NodeError>,
}

impl<T> Default for CollectNode<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> CollectNode<T> {
  /// Creates an empty sink.
  pub fn new() -> Self {
    Self {
      values: Vec::new(),
      completions: 0,
      errors: Vec::new(),
    }
  }

  /// Recorded values, oldest first.
  pub fn values(&self) -> impl Iterator<Item = &T> {
    self.values.iter().map(|value| value.as_ref())
  }

  /// Recorded values as the shared allocations that arrived.
  pub fn payloads(&self) -> &[Arc<T>] {
    &self.values
  }

  /// Whether upstream completed at least once.
  pub fn is_completed(&self) -> bool {
    self.completions > 0
  }

  /// How many completion signals arrived.
  pub fn completions(&self) -> usize {
    self.completions
  }

  /// Recorded errors, oldest first.
  pub fn errors(&self) -> &[NodeError] {
    &self.errors
  }

  /// Forgets everything recorded so far.
  pub fn clear(&mut self) {
    self.values.clear();
    self.completions = 0;
    self.errors.clear();
  }
}

impl<T: Send + Sync + 'static> Operator for CollectNode<T> {
  type In = T;
  type Out = T;

  fn name(&self) -> &'static str {
    "collect"
  }

  fn on_input(&mut self, input: Arc<T>, _out: &mut Outlet<'_, T>) -> Result<(), NodeError> {
    self.values.push(input);
    Ok(())
  }

  fn on_completed(&mut self, _out: &mut Outlet<'_, T>) {
    self.completions += 1;
  }

  fn on_error(&mut self, error: NodeError, _out: &mut Outlet<'_, T>) {
    self.errors.push(error);
  }
}
