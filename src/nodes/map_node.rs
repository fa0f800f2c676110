//! # Map Node
//!
//! A transform node that applies a function to each input and forwards the
//! result.
//!
//! ## Behavior
//!
//! - [`MapNode::new`] wraps an infallible function.
//! - [`MapNode::try_new`] wraps a fallible one; an `Err` becomes a node error
//!   that is multicast downstream instead of a value.
//! - Upstream completion is forwarded.

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use std::sync::Arc;

type MapFunction<I, O> = Box<dyn FnMut(&I) -> Result<O, NodeError> + Send>;

/// Applies a function from `I` to `O` to every input.
pub struct MapNode<I, O> {
  function: MapFunction<I, O>,
}

impl<I: 'static, O: 'static> MapNode<I, O> {
  /// Creates a map node from an infallible function.
  pub fn new<F>(mut function: F) -> Self
  where
    F: FnMut(&I) -> O + Send + 'static,
  {
    Self {
      function: Box::new(move |input| Ok(function(input))),
    }
  }

  /// Creates a map node from a fallible function.
  pub fn try_new<F>(function: F) -> Self
  where
    F: FnMut(&I) -> Result<O, NodeError> + Send + 'static,
  {
    Self {
      function: Box::new(function),
    }
  }
}

impl<I, O> Operator for MapNode<I, O>
where
  I: Send + Sync + 'static,
  O: Send + Sync + 'static,
{
  type In = I;
  type Out = O;

  fn name(&self) -> &'static str {
    "map"
  }

  fn on_input(&mut self, input: Arc<I>, out: &mut Outlet<'_, O>) -> Result<(), NodeError> {
    let value = (self.function)(&input)?;
    out.emit(value);
    Ok(())
  }

  fn on_completed(&mut self, out: &mut Outlet<'_, O>) {
    out.complete();
  }
}
