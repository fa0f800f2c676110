//! # Source Node
//!
//! A node with no upstream of its own. It never produces anything by itself:
//! values enter through [`Graph::publish`], and the stream ends with
//! [`Graph::complete`] or [`Graph::fail`].
//!
//! [`Graph::drain`] drives a source from a tokio channel. It awaits between
//! values, never inside a cascade, and signals completion once every sender
//! has been dropped.

use crate::error::{GraphError, NodeError};
use crate::graph::Graph;
use crate::node::{NodeRef, Operator, Outlet};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

/// Passive entry point producing `T`.
pub struct SourceNode<T> {
  _marker: PhantomData<fn() -> T>,
}

impl<T> Default for SourceNode<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> SourceNode<T> {
  /// Creates a source.
  pub fn new() -> Self {
    Self {
      _marker: PhantomData,
    }
  }
}

impl<T: Send + Sync + 'static> Operator for SourceNode<T> {
  type In = ();
  type Out = T;

  fn name(&self) -> &'static str {
    "source"
  }

  fn on_input(&mut self, _input: Arc<()>, _out: &mut Outlet<'_, T>) -> Result<(), NodeError> {
    Ok(())
  }
}

impl Graph {
  /// Publishes every value received on `receiver` from `source`, then signals
  /// completion. Returns the number of values published.
  pub async fn drain<T>(
    &mut self,
    source: NodeRef<(), T>,
    receiver: &mut UnboundedReceiver<T>,
  ) -> Result<usize, GraphError>
  where
    T: Send + Sync + 'static,
  {
    let mut published = 0;
    while let Some(value) = receiver.recv().await {
      self.publish(source, value)?;
      published += 1;
    }
    debug!(graph = %self.config().name, node = %source.id(), published, "source drained");
    self.complete(source)?;
    Ok(published)
  }
}
