//! # Repeat Node
//!
//! Forwards every input `times` times in a row. `times == 0` forwards nothing.

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use std::marker::PhantomData;
use std::sync::Arc;

/// Multiplies every input.
pub struct RepeatNode<T> {
  times: usize,
  _marker: PhantomData<fn(T)>,
}

impl<T> RepeatNode<T> {
  /// Creates a node forwarding each input `times` times.
  pub fn new(times: usize) -> Self {
    Self {
      times,
      _marker: PhantomData,
    }
  }
}

impl<T: Send + Sync + 'static> Operator for RepeatNode<T> {
  type In = T;
  type Out = T;

  fn name(&self) -> &'static str {
    "repeat"
  }

  fn on_input(&mut self, input: Arc<T>, out: &mut Outlet<'_, T>) -> Result<(), NodeError> {
    for _ in 0..self.times {
      out.forward(Arc::clone(&input));
    }
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, T>) {
    out.complete();
  }
}
