//! # Action Node
//!
//! Runs a side effect for every input and forwards the input unchanged.

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use std::marker::PhantomData;
use std::sync::Arc;

/// Side-effecting pass-through.
pub struct ActionNode<T> {
  action: Box<dyn FnMut(&T) + Send>,
  _marker: PhantomData<fn(T)>,
}

impl<T> ActionNode<T> {
  /// Creates an action node running `action` on each input.
  pub fn new<F>(action: F) -> Self
  where
    F: FnMut(&T) + Send + 'static,
  {
    Self {
      action: Box::new(action),
      _marker: PhantomData,
    }
  }
}

impl<T: Send + Sync + 'static> Operator for ActionNode<T> {
  type In = T;
  type Out = T;

  fn name(&self) -> &'static str {
    "action"
  }

  fn on_input(&mut self, input: Arc<T>, out: &mut Outlet<'_, T>) -> Result<(), NodeError> {
    (self.action)(&input);
    out.forward(input);
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, T>) {
    out.complete();
  }
}
