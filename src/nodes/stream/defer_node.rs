//! # Defer Node
//!
//! Holds inputs while nothing is attached downstream. The first attach drains
//! the held inputs to the new node; from then on the node is a pure
//! pass-through. With a bound, the oldest held input is evicted when full.

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use std::collections::VecDeque;
use std::sync::Arc;

/// Holds inputs until a downstream node exists.
pub struct DeferNode<T> {
  max: Option<usize>,
  held: VecDeque<Arc<T>>,
}

impl<T> DeferNode<T> {
  /// Creates a defer node, optionally bounded to `max` held inputs.
  pub fn new(max: Option<usize>) -> Self {
    Self {
      max,
      held: VecDeque::new(),
    }
  }

  /// Number of held inputs.
  pub fn held(&self) -> usize {
    self.held.len()
  }
}

impl<T: Send + Sync + 'static> Operator for DeferNode<T> {
  type In = T;
  type Out = T;

  fn name(&self) -> &'static str {
    "defer"
  }

  fn on_input(&mut self, input: Arc<T>, out: &mut Outlet<'_, T>) -> Result<(), NodeError> {
    if out.has_downstream() {
      out.forward(input);
      return Ok(());
    }
    match self.max {
      Some(0) => {}
      Some(max) => {
        if self.held.len() == max {
          self.held.pop_front();
        }
        self.held.push_back(input);
      }
      None => self.held.push_back(input),
    }
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, T>) {
    out.complete();
  }

  fn on_attached(&mut self, out: &mut Outlet<'_, T>) {
    for value in self.held.drain(..) {
      out.forward(value);
    }
  }
}
