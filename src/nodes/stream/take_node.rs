//! # Take Node
//!
//! Forwards the first `count` inputs. The next input after that completes the
//! node instead of being forwarded; everything later is dropped.
//!
//! With `count == 0` every input is dropped and the input path never signals
//! completion. Upstream completion is forwarded once, unless the node already
//! completed.

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use std::marker::PhantomData;
use std::sync::Arc;

/// Forwards a bounded prefix.
pub struct TakeNode<T> {
  count: usize,
  seen: usize,
  completed: bool,
  _marker: PhantomData<fn(T)>,
}

impl<T> TakeNode<T> {
  /// Creates a node forwarding the first `count` inputs.
  pub fn new(count: usize) -> Self {
    Self {
      count,
      seen: 0,
      completed: false,
      _marker: PhantomData,
    }
  }

  /// Whether the node has signalled completion.
  pub fn is_completed(&self) -> bool {
    self.completed
  }
}

impl<T: Send + Sync + 'static> Operator for TakeNode<T> {
  type In = T;
  type Out = T;

  fn name(&self) -> &'static str {
    "take"
  }

  fn on_input(&mut self, input: Arc<T>, out: &mut Outlet<'_, T>) -> Result<(), NodeError> {
    if self.seen < self.count {
      self.seen += 1;
      out.forward(input);
    } else if self.count > 0 && !self.completed {
      self.completed = true;
      out.complete();
    }
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, T>) {
    if !self.completed {
      self.completed = true;
      out.complete();
    }
  }
}
