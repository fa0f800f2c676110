//! # List Node
//!
//! A source holding an ordered sequence. Emitting the node pushes every item in
//! order, followed by completion. Used as an operator it accepts a whole
//! `Vec<T>` and does the same with that vector.

use crate::error::NodeError;
use crate::node::{Operator, Outlet};
use std::sync::Arc;

/// Ordered sequence source.
pub struct ListNode<T> {
  items: Vec<Arc<T>>,
}

impl<T> ListNode<T> {
  /// Creates a list source over `items`.
  pub fn new(items: impl IntoIterator<Item = T>) -> Self {
    Self {
      items: items.into_iter().map(Arc::new).collect(),
    }
  }

  /// Number of held items.
  pub fn len(&self) -> usize {
    self.items.len()
  }

  /// Whether the list is empty.
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl<T: Clone + Send + Sync + 'static> Operator for ListNode<T> {
  type In = Vec<T>;
  type Out = T;

  fn name(&self) -> &'static str {
    "list"
  }

  fn on_input(&mut self, input: Arc<Vec<T>>, out: &mut Outlet<'_, T>) -> Result<(), NodeError> {
    for item in input.iter() {
      out.emit(item.clone());
    }
    out.complete();
    Ok(())
  }

  fn emit(&mut self, out: &mut Outlet<'_, T>) {
    for item in &self.items {
      out.forward(Arc::clone(item));
    }
    out.complete();
  }
}
