//! # Skip While Node
//!
//! Drops inputs while the predicate holds. The first input it rejects is
//! forwarded and the predicate is never consulted again.

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use std::marker::PhantomData;
use std::sync::Arc;

/// Drops a leading run of inputs.
pub struct SkipWhileNode<T> {
  predicate: Box<dyn FnMut(&T) -> bool + Send>,
  skipping: bool,
  _marker: PhantomData<fn(T)>,
}

impl<T> SkipWhileNode<T> {
  /// Creates a node dropping inputs while `predicate` returns `true`.
  pub fn new<F>(predicate: F) -> Self
  where
    F: FnMut(&T) -> bool + Send + 'static,
  {
    Self {
      predicate: Box::new(predicate),
      skipping: true,
      _marker: PhantomData,
    }
  }

  /// Whether the node is still dropping inputs.
  pub fn is_skipping(&self) -> bool {
    self.skipping
  }
}

impl<T: Send + Sync + 'static> Operator for SkipWhileNode<T> {
  type In = T;
  type Out = T;

  fn name(&self) -> &'static str {
    "skip_while"
  }

  fn on_input(&mut self, input: Arc<T>, out: &mut Outlet<'_, T>) -> Result<(), NodeError> {
    if self.skipping && (self.predicate)(&input) {
      return Ok(());
    }
    self.skipping = false;
    out.forward(input);
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, T>) {
    out.complete();
  }
}
