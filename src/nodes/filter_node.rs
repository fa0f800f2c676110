//! # Filter Node
//!
//! Forwards an input unchanged when the predicate accepts it and drops it
//! otherwise. Upstream completion is forwarded.

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use std::marker::PhantomData;
use std::sync::Arc;

/// Predicate gate over `T`.
pub struct FilterNode<T> {
  predicate: Box<dyn FnMut(&T) -> bool + Send>,
  _marker: PhantomData<fn(T)>,
}

impl<T> FilterNode<T> {
  /// Creates a filter from `predicate`.
  pub fn new<F>(predicate: F) -> Self
  where
    F: FnMut(&T) -> bool + Send + 'static,
  {
    Self {
      predicate: Box::new(predicate),
      _marker: PhantomData,
    }
  }
}

impl<T: Send + Sync + 'static> Operator for FilterNode<T> {
  type In = T;
  type Out = T;

  fn name(&self) -> &'static str {
    "filter"
  }

  fn on_input(&mut self, input: Arc<T>, out: &mut Outlet<'_, T>) -> Result<(), NodeError> {
    if (self.predicate)(&input) {
      out.forward(input);
    }
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, T>) {
    out.complete();
  }
}
