//! # Buffer Node
//!
//! A pass-through that remembers the `capacity` most recent inputs. Whenever a
//! downstream node is attached, the remembered inputs are replayed to it, oldest
//! first. A full buffer evicts its oldest entry.

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use std::collections::VecDeque;
use std::sync::Arc;

/// Replaying pass-through.
pub struct BufferNode<T> {
  capacity: usize,
  retained: VecDeque<Arc<T>>,
}

impl<T> BufferNode<T> {
  /// Creates a buffer retaining at most `capacity` inputs.
  pub fn new(capacity: usize) -> Self {
    Self {
      capacity,
      retained: VecDeque::with_capacity(capacity),
    }
  }

  /// Configured capacity.
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Number of retained inputs.
  pub fn len(&self) -> usize {
    self.retained.len()
  }

  /// Whether nothing is retained.
  pub fn is_empty(&self) -> bool {
    self.retained.is_empty()
  }

  /// Retained inputs, oldest first.
  pub fn retained(&self) -> impl Iterator<Item = &T> {
    self.retained.iter().map(|value| value.as_ref())
  }
}

impl<T: Send + Sync + 'static> Operator for BufferNode<T> {
  type In = T;
  type Out = T;

  fn name(&self) -> &'static str {
    "buffer"
  }

  fn on_input(&mut self, input: Arc<T>, out: &mut Outlet<'_, T>) -> Result<(), NodeError> {
    if self.capacity > 0 {
      if self.retained.len() == self.capacity {
        self.retained.pop_front();
      }
      self.retained.push_back(Arc::clone(&input));
    }
    out.forward(input);
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, T>) {
    out.complete();
  }

  fn on_attached(&mut self, out: &mut Outlet<'_, T>) {
    for value in &self.retained {
      out.forward(Arc::clone(value));
    }
  }
}
