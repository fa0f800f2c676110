//! # Skip Node
//!
//! Drops the first `count` inputs and forwards the rest in order.

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use std::marker::PhantomData;
use std::sync::Arc;

/// Drops a fixed number of leading inputs.
pub struct SkipNode<T> {
  remaining: usize,
  _marker: PhantomData<fn(T)>,
}

impl<T> SkipNode<T> {
  /// Creates a node dropping the first `count` inputs.
  pub fn new(count: usize) -> Self {
    Self {
      remaining: count,
      _marker: PhantomData,
    }
  }

  /// Inputs still to be dropped.
  pub fn remaining(&self) -> usize {
    self.remaining
  }
}

impl<T: Send + Sync + 'static> Operator for SkipNode<T> {
  type In = T;
  type Out = T;

  fn name(&self) -> &'static str {
    "skip"
  }

  fn on_input(&mut self, input: Arc<T>, out: &mut Outlet<'_, T>) -> Result<(), NodeError> {
    if self.remaining > 0 {
      self.remaining -= 1;
    } else {
      out.forward(input);
    }
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, T>) {
    out.complete();
  }
}
